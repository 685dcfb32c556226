// QuoteSync state managers
// Managers own durable or session state: the bookmark store and the per-screen coordinator.

pub mod bookmark_manager;
pub mod quote_coordinator;
