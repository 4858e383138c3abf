use crate::{dto::input, error::Error, schema::SchemaVariant};
use async_trait::async_trait;
use bson::oid::ObjectId;

pub struct BootstrapServiceConfig {
    pub schema_variant: SchemaVariant,
    pub seed: input::Notification,
}

#[async_trait]
pub trait BootstrapService: Send + Sync {
    async fn bootstrap(&self) -> Result<ObjectId, Error>;
}
