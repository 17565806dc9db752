use crate::model::draw_record::GameReport;
use crate::model::errors::GameError;
use crate::model::game::Game;
use crate::shared::assemblers::assemble;
use crate::shared::cache::ResponseCache;
use crate::shared::fetcher::Fetcher;
use futures::future::join_all;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Runs one game's assembler in its own task.
///
/// A panic inside the assembler is turned into an `ok: false` report.
pub async fn run_game(fetcher: Arc<dyn Fetcher>, game: Game) -> GameReport {
    let handle = tokio::spawn(async move { assemble(fetcher.as_ref(), game).await });
    match handle.await {
        Ok(report) => {
            if let Some(error) = report.error() {
                tracing::warn!("{} unavailable: {}", game.label(), error);
            }
            report
        }
        Err(e) => {
            tracing::error!("Assembler for {} failed: {}", game.label(), e);
            GameReport::failed(game, GameError::Internal(e.to_string()))
        }
    }
}

/// Like [`run_game`], answering from the cache when a fresh report exists.
pub async fn run_game_cached(
    fetcher: Arc<dyn Fetcher>,
    cache: Option<&ResponseCache>,
    game: Game,
) -> GameReport {
    if let Some(report) = cache.and_then(|cache| cache.get(game)) {
        return report;
    }

    let report = run_game(fetcher, game).await;
    if let Some(cache) = cache {
        cache.insert(game, &report);
    }
    report
}

/// Runs every game concurrently and keys the reports by game key.
pub async fn run_all(
    fetcher: Arc<dyn Fetcher>,
    cache: Option<&ResponseCache>,
) -> BTreeMap<&'static str, GameReport> {
    let reports = join_all(
        Game::ALL
            .into_iter()
            .map(|game| run_game_cached(fetcher.clone(), cache, game)),
    )
    .await;

    Game::ALL
        .into_iter()
        .map(Game::key)
        .zip(reports)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::draw_record::DrawRecord;
    use crate::model::errors::FetchError;
    use crate::shared::constants::{CASH3_URL, POWERBALL_URL};
    use crate::shared::test_support::{SlowFetcher, StubFetcher};
    use std::time::{Duration, Instant};

    fn draw(report: &GameReport) -> &DrawRecord {
        match report {
            GameReport::Draw(record) => record,
            GameReport::Sessioned(_) => panic!("expected a single draw record"),
        }
    }

    #[tokio::test]
    async fn one_upstream_failure_leaves_the_others_intact() {
        let fetcher = Arc::new(
            StubFetcher::with_all_pages()
                .failing(POWERBALL_URL, FetchError::Status { code: 500 }),
        );
        let reports = run_all(fetcher, None).await;

        assert_eq!(reports.len(), 6);
        assert!(!reports["pb"].is_ok());
        assert_eq!(reports["pb"].error(), Some("upstream returned status 500"));
        for key in ["mm", "cash4life", "ga_fantasy5", "ga_cash3", "ga_cash4"] {
            assert!(reports[key].is_ok(), "{} should be ok", key);
        }
        assert!(draw(&reports["mm"]).numbers.is_some());
    }

    #[tokio::test]
    async fn panicking_assembler_is_contained() {
        let fetcher = Arc::new(StubFetcher::with_all_pages().panicking(CASH3_URL));
        let reports = run_all(fetcher, None).await;

        let cash3 = &reports["ga_cash3"];
        assert!(!cash3.is_ok());
        assert!(cash3.error().unwrap().starts_with("internal error"));
        match cash3 {
            GameReport::Sessioned(record) => assert!(record.midday.is_none()),
            GameReport::Draw(_) => panic!("cash 3 reports sessions"),
        }
        assert!(reports["ga_cash4"].is_ok());
        assert!(reports["pb"].is_ok());
    }

    #[tokio::test]
    async fn fetches_run_concurrently() {
        let fetcher = Arc::new(SlowFetcher {
            delay: Duration::from_millis(300),
        });
        let started = Instant::now();
        let reports = run_all(fetcher, None).await;

        assert_eq!(reports.len(), 6);
        assert!(started.elapsed() < Duration::from_millis(1_500));
    }

    #[tokio::test]
    async fn cache_answers_repeated_requests() {
        let stub = Arc::new(StubFetcher::with_all_pages());
        let cache = ResponseCache::new(Duration::from_secs(60));

        let first = run_game_cached(stub.clone(), Some(&cache), Game::Fantasy5).await;
        let second = run_game_cached(stub.clone(), Some(&cache), Game::Fantasy5).await;

        assert_eq!(first, second);
        assert_eq!(stub.request_count(), 1);
    }

    #[tokio::test]
    async fn running_twice_is_idempotent() {
        let fetcher: Arc<dyn Fetcher> = Arc::new(StubFetcher::with_all_pages());
        let first = serde_json::to_string(&run_all(fetcher.clone(), None).await).unwrap();
        let second = serde_json::to_string(&run_all(fetcher, None).await).unwrap();
        assert_eq!(first, second);
    }
}
