//! Bridge between the egui thread and the tokio worker that talks to the
//! warehouse gateway and the assistant.

pub mod commands;
pub mod runtime;
