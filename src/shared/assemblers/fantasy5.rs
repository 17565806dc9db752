use crate::model::draw_record::DrawRecord;
use crate::model::game::Game;
use crate::shared::assemblers::{fetch_draw_page, ga_last_draw};
use crate::shared::constants::{FANTASY5_JACKPOT, FANTASY5_URL, GA_LOTTERY_SOURCE};
use crate::shared::extractors::{extract_money_after, html_to_text, traced};
use crate::shared::fetcher::Fetcher;

pub async fn fetch_fantasy5(fetcher: &dyn Fetcher) -> DrawRecord {
    fetch_draw_page(fetcher, Game::Fantasy5, FANTASY5_URL, assemble_fantasy5).await
}

pub fn assemble_fantasy5(html: &str) -> DrawRecord {
    let game = Game::Fantasy5.label();
    let text = html_to_text(html);
    let (draw_date, balls) = ga_last_draw(&text, Game::Fantasy5.arity());

    DrawRecord {
        draw_date: traced(game, "draw date", draw_date),
        numbers: traced(game, "numbers", balls.main),
        jackpot: traced(
            game,
            "jackpot",
            extract_money_after(&text, &FANTASY5_JACKPOT),
        ),
        ..DrawRecord::new(game, GA_LOTTERY_SOURCE)
    }
}
