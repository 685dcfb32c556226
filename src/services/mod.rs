// QuoteSync services
// Services talk to the outside world: the remote quote source, the repository over
// source and store, settings on disk, and logging.

pub mod logging;
pub mod quote_repository;
pub mod quote_source;
pub mod settings_engine;
