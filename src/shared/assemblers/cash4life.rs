use crate::model::draw_record::DrawRecord;
use crate::model::game::Game;
use crate::shared::assemblers::{fetch_draw_page, ga_last_draw};
use crate::shared::constants::{CASH4LIFE_URL, GA_LOTTERY_SOURCE};
use crate::shared::extractors::{html_to_text, traced};
use crate::shared::fetcher::Fetcher;

pub async fn fetch_cash4life(fetcher: &dyn Fetcher) -> DrawRecord {
    fetch_draw_page(fetcher, Game::Cash4Life, CASH4LIFE_URL, assemble_cash4life).await
}

/// Cash4Life pays a fixed top prize, so neither money field is reported.
pub fn assemble_cash4life(html: &str) -> DrawRecord {
    let game = Game::Cash4Life.label();
    let text = html_to_text(html);
    let (draw_date, balls) = ga_last_draw(&text, Game::Cash4Life.arity());

    DrawRecord {
        draw_date: traced(game, "draw date", draw_date),
        numbers: traced(game, "numbers", balls.main),
        special: traced(game, "Cash Ball", balls.special),
        ..DrawRecord::new(game, GA_LOTTERY_SOURCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_support::{strings, CASH4LIFE_HTML};
    use time::macros::datetime;

    #[test]
    fn assembles_record() {
        let record = assemble_cash4life(CASH4LIFE_HTML);
        assert!(record.ok);
        assert_eq!(record.game, "Cash4Life (GA)");
        assert_eq!(record.draw_date, Some(datetime!(2026-02-01 05:00 UTC)));
        assert_eq!(record.numbers, Some(strings(&["05", "12", "19", "30", "41"])));
        assert_eq!(record.special, Some("03".to_string()));
        assert_eq!(record.jackpot, None);
        assert_eq!(record.cash_value, None);
        assert_eq!(record.multiplier, None);
        assert_eq!(record.source, Some("gas-origin2.galottery.com"));
    }

    #[test]
    fn anchor_absent_leaves_fields_empty() {
        let record = assemble_cash4life("<p>05 12 19 30 41 3</p>");
        assert!(record.ok);
        assert_eq!(record.draw_date, None);
        assert_eq!(record.numbers, None);
        assert_eq!(record.special, None);
    }

    #[test]
    fn anchor_present_without_numbers() {
        let record = assemble_cash4life("<p>LAST DRAW RESULTS: ( 02/01/2026 ).</p><p>Results pending</p>");
        assert_eq!(record.draw_date, Some(datetime!(2026-02-01 05:00 UTC)));
        assert_eq!(record.numbers, None);
    }

    #[test]
    fn unrecognized_date_is_not_read_as_numbers() {
        let html = CASH4LIFE_HTML.replace("( 02/01/2026 )", "( Feb 1 )");
        let record = assemble_cash4life(&html);
        assert!(record.ok);
        assert_eq!(record.draw_date, None);
        assert_eq!(record.numbers, None);
        assert_eq!(record.special, None);
    }
}
