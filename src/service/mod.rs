pub mod bootstrap_service;
