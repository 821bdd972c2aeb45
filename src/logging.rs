//! Debug logging
//!
//! The terminal belongs to the TUI, so debug builds log to a file in the temp dir.
//! Release builds do not install a logger and every `log::` call is a no-op.

#[cfg(debug_assertions)]
const LOG_FILE: &str = "locpick-debug.log";

/// Install the file logger (debug builds only). `RUST_LOG` sets the filter.
#[cfg(debug_assertions)]
pub fn init() {
    use std::io::Write;

    let path = std::env::temp_dir().join(LOG_FILE);
    let Ok(file) = std::fs::File::create(&path) else {
        return;
    };

    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} [{}] {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init();
}

#[cfg(not(debug_assertions))]
pub fn init() {}
