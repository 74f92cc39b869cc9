use tracing::Level;
use tracing_subscriber::fmt;

/// Install the stderr subscriber. Warnings and errors always show; `verbose`
/// adds debug diagnostics. Calling it twice is harmless.
pub fn init(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let _ = fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .without_time()
        .try_init();
}
