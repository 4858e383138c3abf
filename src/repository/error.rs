#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("collection already exists")]
    DuplicateCollection,

    #[error("document failed validation: {0}")]
    Validation(String),

    #[error("insert unique violation")]
    InsertUniqueViolation,

    #[error("mongo error: {0}")]
    Mongo(#[from] mongodb::error::Error),
}
