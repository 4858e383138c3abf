use crate::{repository, schema::SchemaViolation};
use bson::oid::ObjectId;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("schema violation: {0}")]
    Schema(#[from] SchemaViolation),

    #[error("seed notification {0} not found after insert")]
    SeedNotFound(ObjectId),

    #[error("database error: {0}")]
    Database(#[from] repository::Error),
}
