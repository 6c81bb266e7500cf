use std::{fs::File, path::Path, str::FromStr, sync::Arc};
use thiserror::Error;
use tracing_subscriber::{
    filter::{self, LevelFilter},
    fmt::writer::BoxMakeWriter,
    prelude::*,
};

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("Creating log file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid LOG_LEVEL: {0}")]
    Level(String),
}

pub fn setup_logger(log_level: LevelFilter, log_file: Option<&Path>) -> Result<(), LoggerError> {
    let file_log = match log_file {
        Some(path) => {
            let file = File::create(path)?;
            Some(
                tracing_subscriber::fmt::layer()
                    .with_writer(BoxMakeWriter::new(Arc::new(file)))
                    .with_ansi(false)
                    .with_file(false),
            )
        }
        None => None,
    };

    let stdout_log = tracing_subscriber::fmt::layer().pretty().with_file(false);

    tracing_subscriber::registry()
        .with(
            stdout_log
                .and_then(file_log)
                .with_filter(log_level)
                // Rejects spans and events of the gui toolkit internals on both layers.
                .with_filter(filter::filter_fn(|metadata| {
                    !metadata.target().starts_with("iced_wgpu")
                        && !metadata.target().starts_with("iced_winit")
                        && !metadata.target().starts_with("iced_graphics")
                        && !metadata.target().starts_with("iced_runtime")
                        && !metadata.target().starts_with("iced_core")
                        && !metadata.target().starts_with("wgpu_core")
                        && !metadata.target().starts_with("wgpu_hal")
                        && !metadata.target().starts_with("naga")
                        && !metadata.target().starts_with("winit")
                        && !metadata.target().starts_with("cosmic_text")
                        && !metadata.target().starts_with("calloop")
                        && !metadata.target().starts_with("polling")
                        && !metadata.target().starts_with("mio")
                        && !metadata.target().starts_with("tokio")
                })),
        )
        .init();

    Ok(())
}

/// Parse LOG_LEVEL environment variable.
pub fn parse_log_level() -> Result<Option<LevelFilter>, LoggerError> {
    if let Ok(l) = std::env::var("LOG_LEVEL") {
        LevelFilter::from_str(&l)
            .map(Some)
            .map_err(|e| LoggerError::Level(e.to_string()))
    } else {
        Ok(None)
    }
}
