//! Logging initialization for the CLI
//!
//! Log lines go to stderr so that `fmt` output on stdout stays pipeable.
//! `RUST_LOG` overrides the level chosen by `--verbose`.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn init_logging(verbose: bool) {
    let console_layer = fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(build_env_filter(verbose))
        .with(console_layer)
        .init();
}

fn build_env_filter(verbose: bool) -> EnvFilter {
    let level = if verbose { "debug" } else { "warn" };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "cinnabar={level},cinnabar_format={level},cinnabar_models={level}"
        ))
    })
}
