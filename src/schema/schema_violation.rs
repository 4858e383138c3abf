#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum SchemaViolation {
    #[error("required field '{0}' is missing")]
    MissingField(&'static str),

    #[error("field '{field}' must be of type {expected}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
    },

    #[error("field '{0}' must contain at least one item")]
    EmptyArray(&'static str),

    #[error("field '{0}' must contain unique items")]
    DuplicateItems(&'static str),
}
