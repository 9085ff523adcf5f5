//! Application layer - Use case handlers.
//!
//! Each handler wires one use case to the ports it needs. Handlers own no
//! state beyond `Arc` references to port implementations; all domain rules
//! live in `crate::domain`.

pub mod handlers;
