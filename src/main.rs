//! QuoteSync demo driver.
//!
//! Usage: `quotesync [settings.json] [--bookmark]`
//!
//! Fetches one quote through a coordinator, printing every published
//! transition, optionally toggles its bookmark, then lists all bookmarks.

use std::error::Error;

use tokio::task::JoinHandle;

use tracing::warn;

use quotesync::app::App;
use quotesync::services::logging;
use quotesync::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use quotesync::types::coordinator::{CoordinatorEvent, FetchOutcome};
use quotesync::types::resource::Resource;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let toggle = args.iter().any(|a| a == "--bookmark");
    let settings_path = args.iter().find(|a| !a.starts_with("--")).cloned();

    let level = SettingsEngine::new(settings_path.clone())
        .load()
        .map(|s| s.logging.level)
        .unwrap_or_else(|_| "info".to_string());
    logging::init(&level);

    let app = App::new(settings_path)?;
    let coordinator = app.new_coordinator();

    let mut events = coordinator.subscribe();
    let printer = tokio::spawn(async move {
        while let Ok(event) = events.recv().await {
            match event {
                CoordinatorEvent::Quote(Resource::Loading) => println!("  … loading"),
                CoordinatorEvent::Quote(Resource::Success(quote)) => {
                    println!("  \"{}\"", quote.text());
                    println!("      — {}", quote.author());
                }
                CoordinatorEvent::Quote(Resource::Error(msg)) => println!("  ✗ {}", msg),
                CoordinatorEvent::Bookmarked(flag) => {
                    println!("  bookmarked: {}", if flag { "yes" } else { "no" })
                }
            }
        }
    });

    let outcome = coordinator.request_new_quote().await;

    if toggle {
        if let FetchOutcome::Published(Resource::Success(_)) = outcome {
            match coordinator.toggle_current_bookmark().await {
                Ok(result) => println!("  {}", result.notice()),
                Err(e) => eprintln!("  bookmark failed: {}", e),
            }
        }
    }

    let bookmarks = coordinator.bookmarks().await?;
    drop(coordinator);
    finish_printer(printer).await;

    println!();
    println!("{} bookmarked quote(s)", bookmarks.len());
    for record in bookmarks {
        println!("  - \"{}\" — {}", record.text, record.author);
    }

    Ok(())
}

/// Waits for the event printer; a panic in it is logged, not propagated.
async fn finish_printer(printer: JoinHandle<()>) -> bool {
    match printer.await {
        Ok(()) => true,
        Err(err) => {
            warn!(error = %err, "event printer task failed");
            false
        }
    }
}
