mod bootstrap_service;
mod bootstrap_service_impl;

pub use bootstrap_service::*;
pub use bootstrap_service_impl::*;
