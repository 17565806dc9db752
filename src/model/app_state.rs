use crate::model::configuration::Configuration;
use crate::shared::cache::ResponseCache;
use crate::shared::fetcher::Fetcher;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub fetcher: Arc<dyn Fetcher>,
    pub cache: Option<Arc<ResponseCache>>,
    pub configuration: Arc<Configuration>,
}

impl AppState {
    pub fn new(fetcher: Arc<dyn Fetcher>, configuration: Configuration) -> Self {
        let cache = ResponseCache::with_ttl_secs(configuration.cache_ttl_secs).map(Arc::new);
        AppState {
            fetcher,
            cache,
            configuration: Arc::new(configuration),
        }
    }
}
