use crate::model::draw_record::{DrawRecord, Session, SessionedDrawRecord};
use crate::model::errors::GameError;
use crate::model::game::Game;
use crate::shared::constants::{
    CASH3_URL, CASH4_URL, GA_LAST_DRAW, GA_LOTTERY_SOURCE, GA_SECTION_END_MARKERS,
};
use crate::shared::extractors::{
    extract_digits, html_to_text, labeled_blocks, section, split_at_us_date, traced,
};
use crate::shared::fetcher::Fetcher;

fn page_url(game: Game) -> &'static str {
    match game {
        Game::Cash4 => CASH4_URL,
        _ => CASH3_URL,
    }
}

/// Fetches a Cash 3 or Cash 4 page.
pub async fn fetch_cash_digits(fetcher: &dyn Fetcher, game: Game) -> SessionedDrawRecord {
    match fetcher.fetch_text(page_url(game)).await {
        Ok(html) => assemble_cash_digits(game, &html),
        Err(e) => SessionedDrawRecord::failed(game.label(), GameError::Upstream(e)),
    }
}

/// Reads up to three sessions from
/// `LAST DRAW RESULTS: Midday ( 02/01/2026 ). 4 4 8. Evening ( ... ). ...`.
///
/// Each session is read from its own block, so a missing or malformed block
/// only leaves that session empty.
pub fn assemble_cash_digits(game: Game, html: &str) -> SessionedDrawRecord {
    let text = html_to_text(html);
    let labels = Session::ALL.map(Session::label);
    let blocks = match section(&text, GA_LAST_DRAW.label, &GA_SECTION_END_MARKERS) {
        Some(results) => labeled_blocks(results, &labels),
        None => {
            tracing::debug!("{}: results section not found", game.label());
            vec![None; labels.len()]
        }
    };

    let mut sessions = Session::ALL
        .into_iter()
        .zip(blocks)
        .map(|(session, block)| block.map(|block| session_record(game, session, block)));

    SessionedDrawRecord {
        ok: true,
        game: game.label().to_string(),
        midday: sessions.next().flatten(),
        evening: sessions.next().flatten(),
        night: sessions.next().flatten(),
        source: Some(GA_LOTTERY_SOURCE),
        error: None,
    }
}

fn session_record(game: Game, session: Session, block: &str) -> DrawRecord {
    let label = format!("{} {}", game.label(), session.label());
    let (draw_date, numbers) = match split_at_us_date(block) {
        Some((draw_date, rest)) => (draw_date, extract_digits(rest, game.arity())),
        None => (None, None),
    };

    DrawRecord {
        draw_date: traced(&label, "draw date", draw_date),
        numbers: traced(&label, "numbers", numbers),
        ..DrawRecord::new(label.as_str(), GA_LOTTERY_SOURCE)
    }
}
