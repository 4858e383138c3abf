mod application;
mod dto;
mod error;
mod repository;
mod schema;
mod service;

use application::ApplicationEnv;
use std::time::Instant;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let started_at = Instant::now();

    #[cfg(debug_assertions)]
    {
        // Ignore error because .env file is not required
        // as long as env variables are set
        let _ = dotenvy::dotenv();
    }

    let env = ApplicationEnv::parse()?;

    application::setup_tracing(&env)?;

    let (state, state_to_close) = application::create_state(&env).await?;

    let bootstrap_result = state.bootstrap_service.bootstrap().await;

    application::close(state_to_close).await;

    match bootstrap_result {
        Ok(seed_id) => {
            tracing::info!(
                %seed_id,
                elapsed_ms = started_at.elapsed().as_millis() as u64,
                "bootstrap finished"
            );
            Ok(())
        }
        Err(err) => {
            tracing::error!(%err, "bootstrap failed");
            Err(err.into())
        }
    }
}
