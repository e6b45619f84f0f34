//! Helpers shared by the engine tasks and workflows.

pub mod sampling;
