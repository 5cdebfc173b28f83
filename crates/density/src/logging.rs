// ABOUTME: Diagnostic logging setup for the density scorer binary.
// ABOUTME: Installs a stderr tracing subscriber filtered by RUST_LOG (default warn).

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Initialize tracing on stderr.
///
/// Stdout is reserved for the JSON result, so diagnostics never go there.
/// Configure with `RUST_LOG`, e.g. `RUST_LOG=notes_density=debug`.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_filter(filter);

    let _ = tracing_subscriber::registry().with(console_layer).try_init();
}
