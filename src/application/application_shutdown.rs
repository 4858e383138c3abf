use super::ApplicationStateToClose;

pub async fn close(state: ApplicationStateToClose) {
    tracing::info!("closing connection with database");
    state.db_client.shutdown().await;
}
