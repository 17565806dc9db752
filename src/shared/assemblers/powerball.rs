use crate::model::draw_record::DrawRecord;
use crate::model::game::Game;
use crate::shared::assemblers::fetch_draw_page;
use crate::shared::constants::{
    POWERBALL_CASH_VALUE, POWERBALL_DATE, POWERBALL_JACKPOT, POWERBALL_MULTIPLIER,
    POWERBALL_NUMBERS, POWERBALL_SOURCE, POWERBALL_URL,
};
use crate::shared::extractors::{
    extract_balls_after, extract_date_before, extract_money_after, extract_multiplier,
    html_to_text, traced,
};
use crate::shared::fetcher::Fetcher;

pub async fn fetch_powerball(fetcher: &dyn Fetcher) -> DrawRecord {
    fetch_draw_page(fetcher, Game::Powerball, POWERBALL_URL, assemble_powerball).await
}

/// The draw-result page heads the winning numbers with a `Sat, Jan 31, 2026` date.
pub fn assemble_powerball(html: &str) -> DrawRecord {
    let game = Game::Powerball.label();
    let text = html_to_text(html);
    let balls = extract_balls_after(&text, &POWERBALL_NUMBERS, Game::Powerball.arity());

    DrawRecord {
        draw_date: traced(
            game,
            "draw date",
            extract_date_before(&text, &POWERBALL_DATE),
        ),
        numbers: traced(game, "numbers", balls.main),
        special: traced(game, "Powerball", balls.special),
        multiplier: traced(
            game,
            "Power Play",
            extract_multiplier(&text, &POWERBALL_MULTIPLIER),
        ),
        jackpot: traced(
            game,
            "jackpot",
            extract_money_after(&text, &POWERBALL_JACKPOT),
        ),
        cash_value: traced(
            game,
            "cash value",
            extract_money_after(&text, &POWERBALL_CASH_VALUE),
        ),
        ..DrawRecord::new(game, POWERBALL_SOURCE)
    }
}
