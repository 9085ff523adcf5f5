//! Use case handlers, grouped by concern.

pub mod auth;
pub mod finance;
pub mod invites;
pub mod members;
pub mod registration;
pub mod reports;
