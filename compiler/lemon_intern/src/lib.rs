//! Lemon Intern - hash-consing tables for pattern ASTs
//!
//! Deduplicates structurally equal patterns into small `Copy` handles, so a
//! lexicon linker can key match caches by a `PatternId<VerbPattern>` instead
//! of a whole tree. An id only resolves in the interner that issued it.
//!
//! # Debugging
//!
//! Enable tracing with environment variables:
//! - `RUST_LOG=lemon_intern=debug` - fingerprint collisions
//! - `RUST_LOG=lemon_intern=trace` - every newly interned pattern (verbose)

mod id;
mod interner;

pub use id::PatternId;
pub use interner::{
    InternError, NpInterner, PatternInterner, SharedPatternInterner, VerbInterner,
};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install a `fmt` subscriber for the interner's events.
///
/// Safe to call repeatedly; only the first call has an effect, and only
/// when `RUST_LOG` holds a valid filter. Use `RUST_LOG=lemon_intern=debug`
/// to see fingerprint collisions, or `RUST_LOG=lemon_intern=trace` to also
/// log every pattern added to a `PatternInterner`.
///
/// Leaves an already installed global subscriber in place.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let Ok(filter) = EnvFilter::try_from_default_env() else {
            return;
        };
        let installed = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_level(true))
            .with(filter)
            .try_init();
        if installed.is_err() {
            tracing::debug!("global subscriber already set; keeping it");
        }
    });
}
