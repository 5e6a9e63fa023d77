use tracing_subscriber::EnvFilter;

fn filter(verbose: bool) -> EnvFilter {
    let default = if verbose { "podgen=debug" } else { "podgen=info" };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

// stdout carries the manifest, so every log line goes to stderr
#[cfg(not(debug_assertions))]
pub fn init(verbose: bool) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter(verbose))
        .json()
        .init();
}

#[cfg(debug_assertions)]
pub fn init(verbose: bool) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .pretty()
        .without_time()
        .with_file(false)
        .with_line_number(false)
        .with_env_filter(filter(verbose))
        .init();
}
