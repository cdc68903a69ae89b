//! Driver for the Monkey interpreter.
//!
//! [`Session`] ties the lexer, parser and evaluator together against one
//! persistent root environment. The REPL and the `monkey` binary are thin
//! layers over it.

pub mod commands;
pub mod repl;
mod session;

pub use session::{RunError, Session};

use std::sync::Once;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Install the global tracing subscriber.
///
/// Does nothing unless `RUST_LOG` is set, so normal runs pay no cost.
/// `MONKEY_LOG_TREE=1` switches to an indented per-call tree, which reads
/// better when following recursion.
///
/// ```text
/// RUST_LOG=monkey_eval=debug monkey run fib.monkey
/// RUST_LOG=debug MONKEY_LOG_TREE=1 monkey
/// ```
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        if std::env::var_os("RUST_LOG").is_none() {
            return;
        }

        let tree = std::env::var("MONKEY_LOG_TREE").is_ok_and(|v| v == "1");
        let flat = (!tree).then(|| {
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_writer(std::io::stderr)
        });
        let hierarchical = tree.then(|| {
            tracing_tree::HierarchicalLayer::new(2)
                .with_targets(true)
                .with_bracketed_fields(true)
        });

        tracing_subscriber::registry()
            .with(EnvFilter::from_default_env())
            .with(flat)
            .with(hierarchical)
            .init();
    });
}
