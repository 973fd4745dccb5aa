//! Tracing initialization.
//!
//! Enable with `RUST_LOG`, e.g. `RUST_LOG=patty_eval=debug`. Nothing is
//! installed when it is unset. `PATTY_LOG_TREE=1` renders spans as an
//! indented call tree instead of flat lines. All log output goes to stderr.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the global subscriber. Safe to call multiple times.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let filter = EnvFilter::from_default_env();

        let result = if tree_requested(std::env::var("PATTY_LOG_TREE").ok().as_deref()) {
            tracing_subscriber::registry()
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_bracketed_fields(true),
                )
                .with(filter)
                .try_init()
        } else {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .try_init()
        };

        if let Err(err) = result {
            eprintln!("patty: warning: tracing not initialized: {err}");
        }
    });
}

fn tree_requested(value: Option<&str>) -> bool {
    matches!(value, Some("1" | "true"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tree_layout_only_on_explicit_request() {
        assert!(tree_requested(Some("1")));
        assert!(tree_requested(Some("true")));
        assert!(!tree_requested(Some("0")));
        assert!(!tree_requested(None));
    }

    #[test]
    fn init_is_idempotent() {
        init_tracing();
        init_tracing();
    }
}
