//! Domain layer - pure types and algorithms, no I/O.

pub mod finance;
pub mod foundation;
pub mod invite;
pub mod member;
