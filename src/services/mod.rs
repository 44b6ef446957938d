//! Service layer: business logic behind the HTTP routes.

pub mod admin;
pub mod catalog;
pub mod checkup;
