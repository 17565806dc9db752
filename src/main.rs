use crate::controller::app;
use crate::model::app_state::AppState;
use crate::shared::configuration::initialize;
use crate::shared::fetcher::HttpFetcher;
use axum::extract::Request;
use axum::ServiceExt;
use std::str::FromStr;
use std::sync::Arc;
use tracing::Level;

mod controller;
mod middleware;
mod model;
mod shared;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let configuration = initialize()?;

    let log_level = Level::from_str(&configuration.log_level).unwrap_or(Level::INFO);
    tracing_subscriber::fmt().with_max_level(log_level).init();

    let fetcher = HttpFetcher::new(&configuration)?;
    let bind_point = configuration.server_bind_point.clone();
    let state = AppState::new(Arc::new(fetcher), configuration);

    let listener = tokio::net::TcpListener::bind(&bind_point).await?;
    tracing::info!("Serving lottery results on {}", &bind_point);
    axum::serve(listener, ServiceExt::<Request>::into_make_service(app(state))).await?;
    Ok(())
}
