//!
//! Validator attached to the `Notifications` collection
//!

mod schema_variant;
mod schema_violation;

pub use schema_variant::*;
pub use schema_violation::*;
