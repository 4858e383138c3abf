use super::ApplicationEnv;
use crate::{
    dto::input,
    repository::NotificationsRepositoryImpl,
    service::bootstrap_service::{
        BootstrapService, BootstrapServiceConfig, BootstrapServiceImpl,
    },
};
use mongodb::{options::ClientOptions, Client};
use std::sync::Arc;

pub struct ApplicationState {
    pub bootstrap_service: Arc<dyn BootstrapService>,
}

pub struct ApplicationStateToClose {
    pub db_client: Client,
}

pub async fn create_state(
    env: &ApplicationEnv,
) -> anyhow::Result<(ApplicationState, ApplicationStateToClose)> {
    tracing::info!(db = %env.db_name, "connecting to database");
    let db_client_options = ClientOptions::parse(&env.db_connection_string).await?;
    let db_client = Client::with_options(db_client_options)?;
    let db = db_client.database(&env.db_name);

    tracing::info!("creating repositories");
    let notifications_repository = NotificationsRepositoryImpl::new(db);
    let notifications_repository = Arc::new(notifications_repository);

    tracing::info!("creating services");
    let config = BootstrapServiceConfig {
        schema_variant: env.schema_variant,
        seed: input::Notification::seed(),
    };
    let bootstrap_service = BootstrapServiceImpl::new(config, notifications_repository);
    let bootstrap_service = Arc::new(bootstrap_service);

    Ok((
        ApplicationState { bootstrap_service },
        ApplicationStateToClose { db_client },
    ))
}
