/// Logging utilities
///
/// Subscriber setup plus small formatting helpers shared by the log calls.
use tracing_subscriber::EnvFilter;

/// Initializes the tracing subscriber.
///
/// `RUST_LOG` wins when it is set; otherwise the level falls back to
/// `debug` in verbose mode and `info` in normal mode.
pub fn init(verbose: bool) {
    let fallback = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Truncates long text for log display
///
/// # Arguments
/// - `text`: original text
/// - `max_len`: maximum length in characters
///
/// # Returns
/// The truncated text
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
