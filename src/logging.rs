use std::io::Write;

use chrono::Local;

use crate::config::Config;

/// Builds the stderr logger for a run. `RUST_LOG` takes precedence over the
/// configured verbosity.
pub fn builder(config: &Config) -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(config.log_level())
        .parse_default_env()
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {} -{}- {}",
                Local::now().format("%Y-%m-%d %H:%M:%S,%3f"),
                record.module_path().unwrap_or_else(|| record.target()),
                record.level(),
                record.args()
            )
        });
    builder
}

pub fn init(config: &Config) -> Result<(), log::SetLoggerError> {
    builder(config).try_init()
}
