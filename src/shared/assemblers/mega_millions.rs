use crate::model::draw_record::DrawRecord;
use crate::model::errors::GameError;
use crate::model::game::Game;
use crate::shared::constants::{
    MEGA_MILLIONS_CASH_VALUE, MEGA_MILLIONS_DATE, MEGA_MILLIONS_JACKPOT,
    MEGA_MILLIONS_MULTIPLIER, MEGA_MILLIONS_NEXT_DRAW, MEGA_MILLIONS_NEXT_DRAW_URL,
    MEGA_MILLIONS_NUMBERS, MEGA_MILLIONS_SOURCE, MEGA_MILLIONS_URL,
};
use crate::shared::extractors::{
    extract_balls_after, extract_date_after, extract_money_after, extract_multiplier,
    extract_next_draw, html_to_text, traced,
};
use crate::shared::fetcher::Fetcher;

/// Fetches the winning-numbers page and, best-effort, the page announcing the
/// next drawing. Only the first one decides whether the record is `ok`.
pub async fn fetch_mega_millions(fetcher: &dyn Fetcher) -> DrawRecord {
    let (results_page, next_draw_page) = tokio::join!(
        fetcher.fetch_text(MEGA_MILLIONS_URL),
        fetcher.fetch_text(MEGA_MILLIONS_NEXT_DRAW_URL)
    );

    match results_page {
        Ok(html) => {
            let next_draw_page = next_draw_page
                .map_err(|e| tracing::debug!("Mega Millions next drawing unavailable: {}", e))
                .ok();
            assemble_mega_millions(&html, next_draw_page.as_deref())
        }
        Err(e) => DrawRecord::failed(Game::MegaMillions.label(), GameError::Upstream(e)),
    }
}

/// The page only prints `DRAWING DATE: Fri., 1/30.`, without a year, so the
/// draw date stays absent unless a full date is published.
pub fn assemble_mega_millions(html: &str, next_draw_html: Option<&str>) -> DrawRecord {
    let game = Game::MegaMillions.label();
    let text = html_to_text(html);
    let balls = extract_balls_after(&text, &MEGA_MILLIONS_NUMBERS, Game::MegaMillions.arity());
    let next_draw = next_draw_html
        .and_then(|html| extract_next_draw(&html_to_text(html), &MEGA_MILLIONS_NEXT_DRAW));

    DrawRecord {
        draw_date: traced(
            game,
            "draw date",
            extract_date_after(&text, &MEGA_MILLIONS_DATE),
        ),
        numbers: traced(game, "numbers", balls.main),
        special: traced(game, "Mega Ball", balls.special),
        multiplier: traced(
            game,
            "Megaplier",
            extract_multiplier(&text, &MEGA_MILLIONS_MULTIPLIER),
        ),
        jackpot: traced(
            game,
            "jackpot",
            extract_money_after(&text, &MEGA_MILLIONS_JACKPOT),
        ),
        cash_value: traced(
            game,
            "cash option",
            extract_money_after(&text, &MEGA_MILLIONS_CASH_VALUE),
        ),
        next_draw: traced(game, "next drawing", next_draw),
        ..DrawRecord::new(game, MEGA_MILLIONS_SOURCE)
    }
}
