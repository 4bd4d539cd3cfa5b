//! Item list and display preference wired to a console "renderer"
//!
//! Run with `RUST_LOG=debug` to see the store logging.

use tincan_todo::{Filter, ItemListStore, MemoryStorage, PreferenceStore};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== Todo App ===\n");

    let list = ItemListStore::new();
    let prefs = PreferenceStore::initialize(MemoryStorage::new());

    // Re-render the footer after every list change
    list.subscribe(|state| {
        println!(
            "   [Footer] {} items shown, {} active ({:?})",
            state.visible().count(),
            state.active_count(),
            state.filter()
        );
    });

    prefs.subscribe(|pref| {
        println!("   [Theme] switched to {}", pref.label());
    });

    println!("Adding items...");
    let milk = list.add("Buy milk");
    list.add("   ");
    list.add("Walk dog");

    println!("\nCompleting \"Buy milk\"...");
    if let Some(id) = milk {
        list.toggle(id);
    }

    for filter in Filter::all() {
        list.set_filter(*filter);
        let texts: Vec<_> = list
            .filtered_view()
            .iter()
            .map(|item| item.text().to_string())
            .collect();
        println!("   {}: {:?}", filter.label(), texts);
    }

    println!("\nClearing completed...");
    list.clear_completed();

    println!("\nToggling theme (was {})...", prefs.current().label());
    if let Err(e) = prefs.toggle() {
        eprintln!("could not save theme: {e}");
    }

    println!("\nFinal items: {:#?}", list.items());
}
