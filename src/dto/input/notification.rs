use crate::{
    dto::Action,
    error::Error,
    schema::{SchemaVariant, FIELD_ACTION, FIELD_DESCRIPTION, FIELD_NAME, FIELD_TITLE},
};
use bson::{doc, oid::ObjectId, Bson, Document};

/// `670532d3acf02dec8d964037`
pub const SEED_ID: ObjectId = ObjectId::from_bytes([
    0x67, 0x05, 0x32, 0xd3, 0xac, 0xf0, 0x2d, 0xec, 0x8d, 0x96, 0x40, 0x37,
]);
pub const SEED_NAME: &str = "default message";
pub const SEED_TITLE: &str = "Linux Accompaniment";
pub const SEED_DESCRIPTION: &str = "Приложение LA запущено!";

///
/// Notification that is about to be written into the `Notifications` collection
///
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub name: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub actions: Vec<Action>,
}

impl Notification {
    ///
    /// Default record available right after the database is initialized
    ///
    pub fn seed() -> Self {
        Self {
            name: Some(SEED_NAME.to_string()),
            title: SEED_TITLE.to_string(),
            description: Some(SEED_DESCRIPTION.to_string()),
            actions: vec![Action::Show],
        }
    }

    ///
    /// ### Errors
    /// - [Error::Validation] when
    ///     - title is empty
    ///     - there are no actions
    ///
    pub fn validate(&self) -> Result<(), Error> {
        if self.title.is_empty() {
            return Err(Error::Validation("title must not be empty".to_string()));
        }
        if self.actions.is_empty() {
            return Err(Error::Validation(
                "notification needs at least one action".to_string(),
            ));
        }

        Ok(())
    }

    ///
    /// Renders document in the shape expected by the schema variant.
    /// Scalar variants keep only the first action,
    /// array variants keep unique actions in input order.
    ///
    pub fn to_document(&self, variant: SchemaVariant) -> Document {
        let mut document = Document::new();

        if let Some(name) = &self.name {
            document.insert(FIELD_NAME, name.clone());
        }
        document.insert(FIELD_TITLE, self.title.clone());
        if let Some(description) = &self.description {
            document.insert(FIELD_DESCRIPTION, description.clone());
        }

        let mut actions = Vec::with_capacity(self.actions.len());
        for action in &self.actions {
            if !actions.contains(action) {
                actions.push(*action);
            }
        }
        let mut actions = actions
            .into_iter()
            .map(|action| Bson::String(action.as_ref().to_string()));

        match variant.action_is_array() {
            true => {
                document.insert(FIELD_ACTION, Bson::Array(actions.collect()));
            }
            false => {
                if let Some(action) = actions.next() {
                    document.insert(FIELD_ACTION, action);
                }
            }
        }

        document
    }

    ///
    /// Renders document with fixed `_id`
    ///
    pub fn to_document_with_id(&self, variant: SchemaVariant, id: ObjectId) -> Document {
        let mut document = doc! { "_id": id };
        document.extend(self.to_document(variant));

        document
    }
}
