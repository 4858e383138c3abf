use crate::repository::entity::NotificationFindEntity;
use bson::oid::ObjectId;

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: ObjectId,
    pub name: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub actions: Vec<String>,
}

impl From<NotificationFindEntity> for Notification {
    fn from(value: NotificationFindEntity) -> Self {
        Self {
            id: value._id,
            name: value.name,
            title: value.title,
            description: value.description,
            actions: value.action,
        }
    }
}
