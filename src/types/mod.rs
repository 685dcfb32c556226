// QuoteSync shared type definitions
// Each submodule defines types used across the application.

pub mod coordinator;
pub mod errors;
pub mod quote;
pub mod resource;
pub mod settings;
