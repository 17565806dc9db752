use crate::model::draw_record::{DrawRecord, GameReport};
use crate::model::errors::GameError;
use crate::model::game::{Arity, Game};
use crate::shared::constants::GA_LAST_DRAW;
use crate::shared::extractors::{extract_balls, split_at_us_date, window_after, Balls};
use crate::shared::fetcher::Fetcher;
use time::OffsetDateTime;

pub mod cash4life;
pub mod cash_digits;
pub mod fantasy5;
pub mod mega_millions;
pub mod powerball;

/// Fetches and assembles the latest record of one game.
pub async fn assemble(fetcher: &dyn Fetcher, game: Game) -> GameReport {
    match game {
        Game::Powerball => powerball::fetch_powerball(fetcher).await.into(),
        Game::MegaMillions => mega_millions::fetch_mega_millions(fetcher).await.into(),
        Game::Cash4Life => cash4life::fetch_cash4life(fetcher).await.into(),
        Game::Fantasy5 => fantasy5::fetch_fantasy5(fetcher).await.into(),
        Game::Cash3 | Game::Cash4 => cash_digits::fetch_cash_digits(fetcher, game)
            .await
            .into(),
    }
}

pub(crate) async fn fetch_draw_page(
    fetcher: &dyn Fetcher,
    game: Game,
    url: &str,
    assemble_page: fn(&str) -> DrawRecord,
) -> DrawRecord {
    match fetcher.fetch_text(url).await {
        Ok(html) => assemble_page(&html),
        Err(e) => DrawRecord::failed(game.label(), GameError::Upstream(e)),
    }
}

/// Date and balls of the "LAST DRAW RESULTS: ( MM/DD/YYYY ). n n n" block
/// the Georgia Lottery pages share. Balls are only read after the date.
pub(crate) fn ga_last_draw(text: &str, arity: &Arity) -> (Option<OffsetDateTime>, Balls) {
    match window_after(text, &GA_LAST_DRAW).and_then(split_at_us_date) {
        Some((draw_date, rest)) => (draw_date, extract_balls(rest, arity)),
        None => (None, Balls::default()),
    }
}
