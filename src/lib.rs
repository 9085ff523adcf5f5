//! Banda Hub - Member registration and finance tracking backend
//!
//! This crate implements invite-gated member self-registration, the member
//! registry, finance ledgers (contributions, deposits, expenses), and the
//! payment report engine for a community band association.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
