//! Adapters - Implementations of ports against real infrastructure.

pub mod auth;
pub mod email;
pub mod http;
pub mod memory;
pub mod postgres;
pub mod storage;
