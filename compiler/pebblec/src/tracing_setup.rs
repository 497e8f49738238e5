//! Subscriber setup for the CLI.

use std::sync::Once;

use tracing_subscriber::{prelude::*, EnvFilter};
use tracing_tree::HierarchicalLayer;

static TRACING_INIT: Once = Once::new();

/// Preferred filter variable; `RUST_LOG` is the fallback.
const LOG_ENV: &str = "PEBBLE_LOG";

/// Install the tracing subscriber. Safe to call multiple times.
///
/// Nothing is installed unless `PEBBLE_LOG` or `RUST_LOG` is set, e.g.
/// `PEBBLE_LOG=pebble_lexer=trace pebble lex main.peb`.
pub fn init() {
    TRACING_INIT.call_once(|| {
        let directives = std::env::var(LOG_ENV).or_else(|_| std::env::var("RUST_LOG"));
        let Ok(directives) = directives else {
            return;
        };

        let layer = HierarchicalLayer::new(2)
            .with_writer(std::io::stderr)
            .with_targets(true)
            .with_bracketed_fields(true);
        tracing_subscriber::registry()
            .with(layer)
            .with(EnvFilter::new(directives))
            .init();
    });
}
