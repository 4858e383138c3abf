//!
//! Module with dtos describing notifications kept in the database
//!

mod action;
pub mod input;

pub use action::Action;
