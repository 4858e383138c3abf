use super::{BootstrapService, BootstrapServiceConfig};
use crate::{
    dto::input::SEED_ID,
    error::Error,
    repository::NotificationsRepository,
};
use async_trait::async_trait;
use bson::{doc, oid::ObjectId};
use std::sync::Arc;

pub struct BootstrapServiceImpl {
    config: BootstrapServiceConfig,
    repository: Arc<dyn NotificationsRepository>,
}

impl BootstrapServiceImpl {
    pub fn new(
        config: BootstrapServiceConfig,
        repository: Arc<dyn NotificationsRepository>,
    ) -> Self {
        Self { config, repository }
    }
}

#[async_trait]
impl BootstrapService for BootstrapServiceImpl {
    ///
    /// Creates `Notifications` collection with validator and inserts seed notification.
    /// Running it against already initialized database fails
    ///
    /// ### Returns
    /// `_id` of the seed notification
    ///
    /// ### Errors
    /// - [Error::Database] when
    ///     - collection already exists
    ///     - database rejects seed notification
    /// - [Error::Validation] when seed notification is invalid
    /// - [Error::Schema] when seed notification does not match configured schema variant
    ///
    /// Seed notification is checked before the collection is created,
    /// so a broken seed leaves the database untouched
    /// - [Error::SeedNotFound] when seed notification cannot be read back
    ///
    async fn bootstrap(&self) -> Result<ObjectId, Error> {
        let variant = self.config.schema_variant;

        let seed = &self.config.seed;
        seed.validate()?;
        let document = seed.to_document_with_id(variant, SEED_ID);
        variant.check(&document)?;

        tracing::info!(variant = variant.as_ref(), "creating collection");
        self.repository
            .create_collection(variant.validator())
            .await?;

        tracing::info!(id = %SEED_ID, "inserting seed notification");
        let id = self.repository.insert(document).await?;

        let notification = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(Error::SeedNotFound(id))?;
        tracing::info!(
            %id,
            title = %notification.title,
            actions = ?notification.actions,
            "inserted seed notification"
        );

        let count = self.repository.count(doc! {}).await?;
        if count != 1 {
            tracing::warn!(count, "collection does not contain exactly one notification");
        }

        Ok(id)
    }
}
