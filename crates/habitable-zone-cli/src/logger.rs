use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Install a compact stderr subscriber; `RUST_LOG` overrides the default filter.
///
/// Logs go to stderr so that `--format json` output on stdout stays parseable.
pub fn init_cli_logger(verbose: bool) {
    let default_filter = if verbose {
        "hzcalc=debug,habitable_zone=debug"
    } else {
        "hzcalc=warn,habitable_zone=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
