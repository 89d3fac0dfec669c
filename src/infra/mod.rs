use crate::infra::config::AppConfig;
use crate::infra::db::init_db;
use crate::infra::state::AppState;
use std::sync::Arc;

pub mod app;
pub mod config;
pub mod db;
pub mod setup;
pub mod state;

pub async fn init_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let pool = init_db(config).await?;

    Ok(AppState {
        pool,
        config: Arc::new(config.clone()),
    })
}
