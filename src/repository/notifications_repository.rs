use super::{error::Error, Notification};
use async_trait::async_trait;
use bson::{oid::ObjectId, Document};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationsRepository: Send + Sync {
    ///
    /// Creates `Notifications` collection with validator attached
    ///
    /// ### Errors
    /// - [Error::DuplicateCollection] when collection already exists
    ///
    async fn create_collection(&self, validator: Document) -> Result<(), Error>;

    ///
    /// Inserts document as is. When document has no `_id` the database generates it
    ///
    /// ### Errors
    /// - [Error::Validation] when document does not satisfy collection validator
    /// - [Error::InsertUniqueViolation] when document with the same `_id` exists
    ///
    async fn insert(&self, document: Document) -> Result<ObjectId, Error>;

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Notification>, Error>;

    async fn find(&self, filter: Document) -> Result<Vec<Notification>, Error>;

    async fn count(&self, filter: Document) -> Result<u64, Error>;
}
