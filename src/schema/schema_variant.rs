use super::SchemaViolation;
use bson::{doc, Bson, Document};
use strum::{AsRefStr, EnumString};

const VALIDATOR_TITLE: &str = "User notifications validator";

pub const FIELD_NAME: &str = "name";
pub const FIELD_TITLE: &str = "title";
pub const FIELD_DESCRIPTION: &str = "description";
pub const FIELD_ACTION: &str = "action";

///
/// Shape of documents accepted by the `Notifications` collection.
///
/// The variants differ only in whether `name` is required
/// and whether `action` is a scalar or a set of strings
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, AsRefStr, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum SchemaVariant {
    /// `name`, `title`, `action` required, `action` is a non-empty array of unique strings
    #[default]
    Canonical,

    /// `title`, `action` required, `action` is a non-empty array of unique strings
    NameOptional,

    /// `name`, `title`, `action` required, `action` is a single string
    ActionString,
}

impl SchemaVariant {
    pub fn required_fields(&self) -> &'static [&'static str] {
        match self {
            SchemaVariant::Canonical | SchemaVariant::ActionString => {
                &[FIELD_NAME, FIELD_TITLE, FIELD_ACTION]
            }
            SchemaVariant::NameOptional => &[FIELD_TITLE, FIELD_ACTION],
        }
    }

    pub fn action_is_array(&self) -> bool {
        !matches!(self, SchemaVariant::ActionString)
    }

    ///
    /// Builds the `validator` option passed to `createCollection`
    ///
    pub fn validator(&self) -> Document {
        let action = match self.action_is_array() {
            true => doc! {
                "bsonType": "array",
                "description": "notification action must be a unique list of strings",
                "minItems": 1,
                "uniqueItems": true,
                "items": {
                    "bsonType": "string",
                    "description": "notification action must be a string",
                },
            },
            false => doc! {
                "bsonType": "string",
                "description": "notification action must be a string",
            },
        };

        doc! {
            "$jsonSchema": {
                "bsonType": "object",
                "title": VALIDATOR_TITLE,
                "required": self.required_fields().to_vec(),
                "properties": {
                    FIELD_NAME: {
                        "bsonType": "string",
                        "description": "notification name must be a string",
                    },
                    FIELD_TITLE: {
                        "bsonType": "string",
                        "description": "notification title must be a string",
                    },
                    FIELD_DESCRIPTION: {
                        "bsonType": "string",
                        "description": "notification description must be a string",
                    },
                    FIELD_ACTION: action,
                },
            }
        }
    }

    ///
    /// Checks document against the same rules the database enforces
    /// for this variant, so broken documents are reported before sending them.
    ///
    /// ### Errors
    /// First [SchemaViolation] found
    ///
    pub fn check(&self, document: &Document) -> Result<(), SchemaViolation> {
        if let Some(missing) = self
            .required_fields()
            .iter()
            .find(|field| !document.contains_key(field))
        {
            return Err(SchemaViolation::MissingField(*missing));
        }

        for field in [FIELD_NAME, FIELD_TITLE, FIELD_DESCRIPTION] {
            match document.get(field) {
                None | Some(Bson::String(_)) => {}
                Some(_) => {
                    return Err(SchemaViolation::WrongType {
                        field,
                        expected: "string",
                    })
                }
            }
        }

        let Some(action) = document.get(FIELD_ACTION) else {
            return Ok(());
        };

        match (self.action_is_array(), action) {
            (false, Bson::String(_)) => Ok(()),
            (false, _) => Err(SchemaViolation::WrongType {
                field: FIELD_ACTION,
                expected: "string",
            }),
            (true, Bson::Array(items)) => Self::check_action_items(items),
            (true, _) => Err(SchemaViolation::WrongType {
                field: FIELD_ACTION,
                expected: "array",
            }),
        }
    }

    fn check_action_items(items: &[Bson]) -> Result<(), SchemaViolation> {
        if items.is_empty() {
            return Err(SchemaViolation::EmptyArray(FIELD_ACTION));
        }

        if !items.iter().all(|item| matches!(item, Bson::String(_))) {
            return Err(SchemaViolation::WrongType {
                field: FIELD_ACTION,
                expected: "array of strings",
            });
        }

        let has_duplicates = items
            .iter()
            .enumerate()
            .any(|(i, item)| items[i + 1..].contains(item));
        if has_duplicates {
            return Err(SchemaViolation::DuplicateItems(FIELD_ACTION));
        }

        Ok(())
    }
}
