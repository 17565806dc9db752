use crate::model::draw_record::GameReport;
use crate::model::game::Game;
use dashmap::DashMap;
use std::time::{Duration, Instant};

/// Keeps successful reports for a fixed time so repeated requests do not hit
/// the operators' sites again. Failed reports are never stored.
pub struct ResponseCache {
    entries: DashMap<Game, (Instant, GameReport)>,
    ttl: Duration,
}

impl ResponseCache {
    pub fn new(ttl: Duration) -> Self {
        ResponseCache {
            entries: DashMap::new(),
            ttl,
        }
    }

    /// `None` when `ttl_secs` is zero, which disables caching.
    pub fn with_ttl_secs(ttl_secs: u64) -> Option<Self> {
        (ttl_secs > 0).then(|| ResponseCache::new(Duration::from_secs(ttl_secs)))
    }

    pub fn get(&self, game: Game) -> Option<GameReport> {
        let entry = self.entries.get(&game)?;
        let (stored_at, report) = entry.value();
        if stored_at.elapsed() < self.ttl {
            Some(report.clone())
        } else {
            None
        }
    }

    pub fn insert(&self, game: Game, report: &GameReport) {
        if report.is_ok() {
            self.entries.insert(game, (Instant::now(), report.clone()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::draw_record::DrawRecord;

    fn ok_report() -> GameReport {
        DrawRecord::new("Powerball", "powerball.com").into()
    }

    #[test]
    fn returns_fresh_entries() {
        let cache = ResponseCache::new(Duration::from_secs(60));
        assert_eq!(cache.get(Game::Powerball), None);
        cache.insert(Game::Powerball, &ok_report());
        assert_eq!(cache.get(Game::Powerball), Some(ok_report()));
        assert_eq!(cache.get(Game::MegaMillions), None);
    }

    #[test]
    fn expired_entries_are_ignored() {
        let cache = ResponseCache::new(Duration::ZERO);
        cache.insert(Game::Powerball, &ok_report());
        assert_eq!(cache.get(Game::Powerball), None);
    }

    #[test]
    fn failures_are_not_cached() {
        let cache = ResponseCache::new(Duration::from_secs(60));
        cache.insert(Game::Cash3, &GameReport::failed(Game::Cash3, "upstream timed out"));
        assert_eq!(cache.get(Game::Cash3), None);
    }

    #[test]
    fn zero_ttl_disables_the_cache() {
        assert!(ResponseCache::with_ttl_secs(0).is_none());
        assert!(ResponseCache::with_ttl_secs(300).is_some());
    }
}
