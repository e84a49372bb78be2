//! Logging helpers: dev-only tracing subscriber and text anonymization.
//!
//! Raw news text never goes into logs; events carry `anon_hash(text)`.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub const ENV_DEV_LOG: &str = "ANALYZER_DEV_LOG";

/// Dev logging gate: ANALYZER_DEV_LOG=1 AND dev env (debug build or
/// SHUTTLE_ENV in {local, development, dev}).
pub fn dev_logging_enabled() -> bool {
    let on = std::env::var(ENV_DEV_LOG).ok().as_deref() == Some("1");
    if !on {
        return false;
    }
    if cfg!(debug_assertions) {
        return true;
    }
    matches!(
        std::env::var("SHUTTLE_ENV")
            .unwrap_or_default()
            .to_ascii_lowercase()
            .as_str(),
        "local" | "development" | "dev"
    )
}

/// Install a compact fmt subscriber when dev logging is on.
///
/// Uses `try_init`, so a subscriber already installed by the runtime wins.
pub fn init_dev_tracing() {
    if !dev_logging_enabled() {
        return;
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("analyze=debug,news_sentiment_analyzer=info,warn"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .try_init();
}

/// First 6 bytes of SHA-256 as lowercase hex.
pub fn anon_hash(text: &str) -> String {
    use sha2::{Digest, Sha256};
    let digest = Sha256::digest(text.as_bytes());
    let mut out = String::with_capacity(12);
    for b in digest.iter().take(6) {
        use std::fmt::Write as _;
        let _ = write!(&mut out, "{:02x}", b);
    }
    out
}
