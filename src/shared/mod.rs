pub mod aggregator;
pub mod assemblers;
pub mod cache;
pub mod configuration;
pub mod constants;
pub mod extractors;
pub mod fetcher;
pub mod normalizers;
#[cfg(test)]
pub mod test_support;
