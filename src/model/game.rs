use serde::Serialize;
use std::ops::RangeInclusive;

/// Count and value range of the numbers a game draws.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Arity {
    pub main_count: usize,
    pub main_range: RangeInclusive<u8>,
    pub special_range: Option<RangeInclusive<u8>>,
    /// Zero-padding width of every rendered number.
    pub width: usize,
}

pub const POWERBALL_ARITY: Arity = Arity {
    main_count: 5,
    main_range: 1..=69,
    special_range: Some(1..=26),
    width: 2,
};

pub const MEGA_MILLIONS_ARITY: Arity = Arity {
    main_count: 5,
    main_range: 1..=70,
    special_range: Some(1..=25),
    width: 2,
};

pub const CASH4LIFE_ARITY: Arity = Arity {
    main_count: 5,
    main_range: 1..=60,
    special_range: Some(1..=4),
    width: 2,
};

pub const FANTASY5_ARITY: Arity = Arity {
    main_count: 5,
    main_range: 1..=42,
    special_range: None,
    width: 2,
};

pub const CASH3_ARITY: Arity = Arity {
    main_count: 3,
    main_range: 0..=9,
    special_range: None,
    width: 1,
};

pub const CASH4_ARITY: Arity = Arity {
    main_count: 4,
    main_range: 0..=9,
    special_range: None,
    width: 1,
};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize)]
pub enum Game {
    Powerball,
    MegaMillions,
    Cash4Life,
    Fantasy5,
    Cash3,
    Cash4,
}

impl Game {
    pub const ALL: [Game; 6] = [
        Game::Powerball,
        Game::MegaMillions,
        Game::Cash4Life,
        Game::Fantasy5,
        Game::Cash3,
        Game::Cash4,
    ];

    /// Key used in the aggregated response.
    pub fn key(self) -> &'static str {
        match self {
            Game::Powerball => "pb",
            Game::MegaMillions => "mm",
            Game::Cash4Life => "cash4life",
            Game::Fantasy5 => "ga_fantasy5",
            Game::Cash3 => "ga_cash3",
            Game::Cash4 => "ga_cash4",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Game::Powerball => "Powerball",
            Game::MegaMillions => "Mega Millions",
            Game::Cash4Life => "Cash4Life (GA)",
            Game::Fantasy5 => "GA Fantasy 5",
            Game::Cash3 => "GA Cash 3",
            Game::Cash4 => "GA Cash 4",
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Game::Powerball => "/api/pb",
            Game::MegaMillions => "/api/mm",
            Game::Cash4Life => "/api/cash4life",
            Game::Fantasy5 => "/api/ga/fantasy5",
            Game::Cash3 => "/api/ga/cash3",
            Game::Cash4 => "/api/ga/cash4",
        }
    }

    pub fn arity(self) -> &'static Arity {
        match self {
            Game::Powerball => &POWERBALL_ARITY,
            Game::MegaMillions => &MEGA_MILLIONS_ARITY,
            Game::Cash4Life => &CASH4LIFE_ARITY,
            Game::Fantasy5 => &FANTASY5_ARITY,
            Game::Cash3 => &CASH3_ARITY,
            Game::Cash4 => &CASH4_ARITY,
        }
    }

    /// Digit games are drawn several times a day and report per-session results.
    pub fn is_sessioned(self) -> bool {
        matches!(self, Game::Cash3 | Game::Cash4)
    }
}
