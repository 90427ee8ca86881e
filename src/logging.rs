//! Logger installation
//!
//! The `log` facade is used throughout the crate; the env_logger backend is
//! installed once, at startup, for the requested verbosity. `RUST_LOG`
//! still overrides the default filter.

use env_logger::{Builder, Env};
use std::io::Write;

/// Default filter for this crate at the given verbosity
pub fn default_filter(debug: bool) -> String {
    let level = if debug { "debug" } else { "info" };
    format!("warn,{}={}", env!("CARGO_CRATE_NAME"), level)
}

/// Build a logger configured for the requested verbosity
///
/// Normal output is `> message`; debug output is
/// `[LEVEL] module::path - message`.
pub fn builder(debug: bool) -> Builder {
    let mut builder = Builder::from_env(Env::default().default_filter_or(default_filter(debug)));

    if debug {
        builder.format(|buf, record| {
            writeln!(
                buf,
                "[{}] {} - {}",
                record.level(),
                record.module_path().unwrap_or("?"),
                record.args()
            )
        });
    } else {
        builder.format(|buf, record| writeln!(buf, "> {}", record.args()));
    }

    builder
}

/// Install the logger; later calls are ignored
pub fn init(debug: bool) {
    let _ = builder(debug).try_init();
}
