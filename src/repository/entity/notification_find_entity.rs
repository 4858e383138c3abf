use bson::oid::ObjectId;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
pub struct NotificationFindEntity {
    pub _id: ObjectId,

    pub name: Option<String>,
    pub title: String,
    pub description: Option<String>,

    #[serde(deserialize_with = "de_one_or_many")]
    pub action: Vec<String>,
}

///
/// `action` is stored either as a single string or as an array of strings
/// depending on collection validator
///
fn de_one_or_many<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<String>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match OneOrMany::deserialize(d)? {
        OneOrMany::One(action) => vec![action],
        OneOrMany::Many(actions) => actions,
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use bson::doc;

    #[test]
    fn deserialize_array_action() {
        let document = doc! {
            "_id": ObjectId::new(),
            "name": "default message",
            "title": "Linux Accompaniment",
            "action": ["show", "remind"],
        };

        let entity = bson::from_document::<NotificationFindEntity>(document).unwrap();

        assert_eq!(entity.action, vec!["show", "remind"]);
        assert!(entity.description.is_none());
    }

    #[test]
    fn deserialize_scalar_action() {
        let document = doc! {
            "_id": ObjectId::new(),
            "title": "Linux Accompaniment",
            "action": "show",
        };

        let entity = bson::from_document::<NotificationFindEntity>(document).unwrap();

        assert_eq!(entity.action, vec!["show"]);
        assert!(entity.name.is_none());
    }

    #[test]
    fn deserialize_missing_title() {
        let document = doc! {
            "_id": ObjectId::new(),
            "action": "show",
        };

        let entity = bson::from_document::<NotificationFindEntity>(document);

        assert!(entity.is_err());
    }
}
