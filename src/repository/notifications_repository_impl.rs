use super::{entity::NotificationFindEntity, Error, Notification, NotificationsRepository};
use async_trait::async_trait;
use bson::{doc, oid::ObjectId, Bson, Document};
use futures::TryStreamExt;
use mongodb::{
    error::{ErrorKind, WriteFailure},
    Database,
};
use std::sync::Arc;

pub const NOTIFICATIONS: &str = "Notifications";

pub struct NotificationsRepositoryImpl {
    database: Database,
}

impl NotificationsRepositoryImpl {
    pub fn new(database: Database) -> Self {
        Self { database }
    }
}

#[async_trait]
impl NotificationsRepository for NotificationsRepositoryImpl {
    async fn create_collection(&self, validator: Document) -> Result<(), Error> {
        tracing::debug!(collection = NOTIFICATIONS, "creating collection");

        self.database
            .create_collection(NOTIFICATIONS)
            .validator(validator)
            .await
            .map_err(|err| {
                let ErrorKind::Command(ref command_error) = *err.kind else {
                    return Error::Mongo(err);
                };

                const NAMESPACE_EXISTS_CODE: i32 = 48;
                match command_error.code == NAMESPACE_EXISTS_CODE {
                    true => Error::DuplicateCollection,
                    false => Error::Mongo(err),
                }
            })?;

        Ok(())
    }

    async fn insert(&self, document: Document) -> Result<ObjectId, Error> {
        let insert_result = self
            .database
            .collection::<Document>(NOTIFICATIONS)
            .insert_one(document)
            .await
            .map_err(|err| {
                let ErrorKind::Write(ref write_failure) = *err.kind else {
                    return Error::Mongo(err);
                };

                let WriteFailure::WriteError(write_error) = write_failure else {
                    return Error::Mongo(err);
                };

                const DUPLICATE_KEY_CODE: i32 = 11000;
                const DOCUMENT_VALIDATION_FAILURE_CODE: i32 = 121;
                match write_error.code {
                    DUPLICATE_KEY_CODE => Error::InsertUniqueViolation,
                    DOCUMENT_VALIDATION_FAILURE_CODE => {
                        Error::Validation(write_error.message.clone())
                    }
                    _ => Error::Mongo(err),
                }
            })?;

        let Bson::ObjectId(id) = insert_result.inserted_id else {
            tracing::error!("invalid type of inserted '_id'");
            return Err(Error::Mongo(
                ErrorKind::Custom(Arc::new("invalid type of inserted '_id'")).into(),
            ));
        };

        Ok(id)
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Notification>, Error> {
        let notification = self
            .database
            .collection::<NotificationFindEntity>(NOTIFICATIONS)
            .find_one(doc! { "_id": id })
            .await?
            .map(Notification::from);

        Ok(notification)
    }

    async fn find(&self, filter: Document) -> Result<Vec<Notification>, Error> {
        let notifications = self
            .database
            .collection::<NotificationFindEntity>(NOTIFICATIONS)
            .find(filter)
            .await?
            .try_collect::<Vec<_>>()
            .await?
            .into_iter()
            .map(Notification::from)
            .collect();

        Ok(notifications)
    }

    async fn count(&self, filter: Document) -> Result<u64, Error> {
        let count = self
            .database
            .collection::<Document>(NOTIFICATIONS)
            .count_documents(filter)
            .await?;

        Ok(count)
    }
}
