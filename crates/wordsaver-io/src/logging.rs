use std::env;

use tracing_subscriber::EnvFilter;

/// Global subscriber for both binaries.
/// `RUST_LOG` filter (default `info`); `LOG_FORMAT=json` for JSON lines
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(false);

    if json_requested(env::var("LOG_FORMAT").ok().as_deref()) {
        builder.json().init();
    } else {
        builder.with_ansi(atty::is(atty::Stream::Stdout)).init();
    }
}

fn json_requested(log_format: Option<&str>) -> bool {
    log_format.is_some_and(|v| v.trim().eq_ignore_ascii_case("json"))
}
