//! Logger setup for the server binary.

use crate::config::AppConfig;
use env_logger::{Env, Target};
use std::fs::OpenOptions;
use std::io;

/// Installs `env_logger` as the `log` backend.
///
/// `RUST_LOG` still wins over the configured filter. With a log file configured
/// every line is appended to it instead of going to stderr.
pub fn init(config: &AppConfig) -> io::Result<()> {
    let mut builder =
        env_logger::Builder::from_env(Env::default().default_filter_or(config.log_filter.as_str()));

    if let Some(path) = &config.log_file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        builder.target(Target::Pipe(Box::new(file)));
    }

    builder
        .try_init()
        .map_err(|err| io::Error::new(io::ErrorKind::AlreadyExists, err))
}
