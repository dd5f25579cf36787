//! Types shared between the warehouse API client and the console UI:
//! domain identifiers, chat primitives, wire DTOs, and API error shapes.

pub mod domain;
pub mod error;
pub mod protocol;
