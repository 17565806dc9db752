use crate::shared::extractors::Anchor;

pub const CONFIG_DIRECTORY: &str = "config";

pub const POWERBALL_URL: &str = "https://www.powerball.com/draw-result?gc=powerbal&oc=ga";
pub const POWERBALL_SOURCE: &str = "powerball.com";
pub const POWERBALL_NUMBERS: Anchor = Anchor::new("Winning Numbers", 200);
/// The draw date heads the results card, just before [`POWERBALL_NUMBERS`].
pub const POWERBALL_DATE: Anchor = Anchor::new("Winning Numbers", 48);
pub const POWERBALL_MULTIPLIER: Anchor = Anchor::new("Power Play", 24);
pub const POWERBALL_JACKPOT: Anchor = Anchor::new("Estimated Jackpot:", 32);
pub const POWERBALL_CASH_VALUE: Anchor = Anchor::new("Cash Value:", 32);

pub const MEGA_MILLIONS_URL: &str = "https://www.megamillions.com/winning-numbers.aspx";
pub const MEGA_MILLIONS_NEXT_DRAW_URL: &str =
    "https://www.megamillions.com/winning-numbers/check-your-numbers.aspx";
pub const MEGA_MILLIONS_SOURCE: &str = "megamillions.com";
pub const MEGA_MILLIONS_DATE: Anchor = Anchor::new("DRAWING DATE:", 40);
pub const MEGA_MILLIONS_NUMBERS: Anchor = Anchor::new("Latest Winning Numbers", 200);
pub const MEGA_MILLIONS_MULTIPLIER: Anchor = Anchor::new("Megaplier", 24);
pub const MEGA_MILLIONS_JACKPOT: Anchor = Anchor::new("Estimated Jackpot:", 32);
pub const MEGA_MILLIONS_CASH_VALUE: Anchor = Anchor::new("Cash Option:", 32);
pub const MEGA_MILLIONS_NEXT_DRAW: Anchor = Anchor::new("Next Drawing", 48);

pub const GA_LOTTERY_SOURCE: &str = "gas-origin2.galottery.com";
pub const CASH4LIFE_URL: &str =
    "https://gas-origin2.galottery.com/en-us/games/draw-games/cash-for-life.html";
pub const FANTASY5_URL: &str =
    "https://gas-origin2.galottery.com/en-us/games/draw-games/fantasy-five.html";
pub const CASH3_URL: &str =
    "https://gas-origin2.galottery.com/en-us/games/draw-games/cash-three.html";
pub const CASH4_URL: &str =
    "https://gas-origin2.galottery.com/en-us/games/draw-games/cash-four.html";

pub const GA_LAST_DRAW: Anchor = Anchor::new("LAST DRAW RESULTS:", 160);
pub const FANTASY5_JACKPOT: Anchor = Anchor::new("JACKPOT", 24);

/// The digit-game results section starts at [`GA_LAST_DRAW`] and ends at the first of these.
pub const GA_SECTION_END_MARKERS: [&str; 3] = ["About", "How To Play", "Odds"];
