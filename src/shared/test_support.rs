use crate::model::errors::FetchError;
use crate::shared::constants::{
    CASH3_URL, CASH4LIFE_URL, CASH4_URL, FANTASY5_URL, MEGA_MILLIONS_NEXT_DRAW_URL,
    MEGA_MILLIONS_URL, POWERBALL_URL,
};
use crate::shared::fetcher::Fetcher;
use axum::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

pub const POWERBALL_HTML: &str = r#"<!DOCTYPE html>
<html>
<head><title>Powerball | Draw Result</title>
<script>window.dataLayer = [{ "jackpot": 12 }];</script></head>
<body>
<div class="card">
  <h5 class="card-title mx-auto mb-3 lh-1 text-center title-date">Sat, Jan 31, 2026</h5>
  <div class="game-ball-group">
    <h4 class="col-12">Winning Numbers</h4>
    <div class="form-control col white-balls item-powerball">4</div>
    <div class="form-control col white-balls item-powerball">15</div>
    <div class="form-control col white-balls item-powerball">23</div>
    <div class="form-control col white-balls item-powerball">42</div>
    <div class="form-control col white-balls item-powerball">61</div>
    <div class="form-control col powerball item-powerball">9</div>
  </div>
  <div class="pb-4 multiplier">Power Play <span class="multiplier">3x</span></div>
  <div class="estimated-jackpot"><span>Estimated Jackpot:</span> <span>$59 Million</span></div>
  <div class="cash-value"><span>Cash Value:</span> <span>$26.6 Million</span></div>
</div>
</body>
</html>"#;

pub const MEGA_MILLIONS_HTML: &str = r#"<html><body>
<nav><a href="/winning-numbers.aspx">Winning Numbers</a></nav>
<section class="latest">
  <h2>Latest Winning Numbers</h2>
  <span class="drawingDate">DRAWING DATE: </span><span class="date">Fri., 1/30.</span>
  <ul class="numbers">
    <li class="ball">7</li><li class="ball">12</li><li class="ball">33</li>
    <li class="ball">48</li><li class="ball">62</li><li class="yellowBall">19</li>
  </ul>
  <p class="megaplier">Megaplier <span>2X</span></p>
  <p>Estimated Jackpot: <span class="amount">$285 Million</span></p>
  <p>Cash Option: <span class="amount">$131.2 Million</span></p>
</section>
</body></html>"#;

pub const MEGA_MILLIONS_NEXT_DRAW_HTML: &str = r#"<html><body>
<div class="nextDrawing"><h3>Next Drawing</h3> <span>Tue., 2/3 @ 11 p.m.</span></div>
<div class="jackpot">Estimated Jackpot: $300 Million</div>
</body></html>"#;

pub const CASH4LIFE_HTML: &str = r#"<html><body>
<div class="game-header"><h1>Cash4Life</h1><p>$1,000 a Day for Life!</p></div>
<div class="results">
  <h3>LAST DRAW RESULTS:</h3> <span>( 02/01/2026 ).</span>
  <span class="ball">05</span> <span class="ball">12</span> <span class="ball">19</span>
  <span class="ball">30</span> <span class="ball">41</span> <span class="cash-ball">3</span>
</div>
<div class="how-to-play"><h3>How To Play</h3><p>Pick 5 numbers from 1 to 60.</p></div>
</body></html>"#;

pub const FANTASY5_HTML: &str = r#"<html><body>
<div class="game-header"><h1>Fantasy 5</h1>
  <p>Check the jackpot history below.</p>
  <div class="jackpot">JACKPOT <strong>$125,000</strong></div>
</div>
<div class="results">
  <h3>LAST DRAW RESULTS:</h3> <span>( 02/01/2026 ).</span>
  <span>03</span> <span>11</span> <span>24</span> <span>36</span> <span>42</span>
</div>
<div class="how-to-play"><h3>How To Play</h3><p>Pick 5 numbers from 1 to 42.</p></div>
</body></html>"#;

pub const CASH3_HTML: &str = r#"<html><body>
<div class="results"><h3>LAST DRAW RESULTS:</h3>
  <p>Midday ( 02/01/2026 ). <span>4</span> <span>4</span> <span>8</span>.</p>
  <p>Evening ( 02/01/2026 ). <span>1</span> <span>2</span> <span>3</span>.</p>
  <p>Night ( 01/31/2026 ). <span>0</span> <span>9</span> <span>7</span>.</p>
</div>
<div class="about"><h3>About Cash 3</h3><p>Drawn 3 times daily, 7 days a week.</p></div>
</body></html>"#;

pub const CASH4_HTML: &str = r#"<html><body>
<div class="results"><h3>LAST DRAW RESULTS:</h3>
  <p>Midday ( 02/01/2026 ). <span>1</span> <span>9</span> <span>0</span> <span>6</span>.</p>
  <p>Evening ( 02/01/2026 ). <span>5</span> <span>5</span> <span>2</span> <span>8</span>.</p>
  <p>Night ( 01/31/2026 ). <span>7</span> <span>3</span> <span>3</span> <span>0</span>.</p>
</div>
<div class="odds"><h3>Odds</h3><p>1 in 10,000</p></div>
</body></html>"#;

pub fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

enum Page {
    Body(String),
    Failure(FetchError),
    Panic,
}

/// Serves canned pages keyed by URL and counts the requests it receives.
pub struct StubFetcher {
    pages: HashMap<&'static str, Page>,
    requests: AtomicUsize,
}

impl StubFetcher {
    pub fn with_all_pages() -> Self {
        let pages = [
            (POWERBALL_URL, POWERBALL_HTML),
            (MEGA_MILLIONS_URL, MEGA_MILLIONS_HTML),
            (MEGA_MILLIONS_NEXT_DRAW_URL, MEGA_MILLIONS_NEXT_DRAW_HTML),
            (CASH4LIFE_URL, CASH4LIFE_HTML),
            (FANTASY5_URL, FANTASY5_HTML),
            (CASH3_URL, CASH3_HTML),
            (CASH4_URL, CASH4_HTML),
        ]
        .into_iter()
        .map(|(url, html)| (url, Page::Body(html.to_string())))
        .collect();

        StubFetcher {
            pages,
            requests: AtomicUsize::new(0),
        }
    }

    pub fn failing(mut self, url: &'static str, error: FetchError) -> Self {
        self.pages.insert(url, Page::Failure(error));
        self
    }

    pub fn panicking(mut self, url: &'static str) -> Self {
        self.pages.insert(url, Page::Panic);
        self
    }

    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Fetcher for StubFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        match self.pages.get(url) {
            Some(Page::Body(html)) => Ok(html.clone()),
            Some(Page::Failure(e)) => Err(e.clone()),
            Some(Page::Panic) => panic!("page shape nobody expected: {}", url),
            None => Err(FetchError::Unreachable(format!("no stub for {}", url))),
        }
    }
}

/// Every page takes `delay` to arrive and is empty.
pub struct SlowFetcher {
    pub delay: Duration,
}

#[async_trait]
impl Fetcher for SlowFetcher {
    async fn fetch_text(&self, _url: &str) -> Result<String, FetchError> {
        tokio::time::sleep(self.delay).await;
        Ok(String::new())
    }
}
