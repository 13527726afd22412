use std::{fs::File, path::Path, sync::Mutex};

use tracing_subscriber::{Layer, layer::SubscriberExt};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Level {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    #[default]
    Off,
}

impl Level {
    fn as_level_filter(&self) -> tracing_subscriber::filter::LevelFilter {
        match self {
            Self::Trace => tracing_subscriber::filter::LevelFilter::TRACE,
            Self::Debug => tracing_subscriber::filter::LevelFilter::DEBUG,
            Self::Info => tracing_subscriber::filter::LevelFilter::INFO,
            Self::Warn => tracing_subscriber::filter::LevelFilter::WARN,
            Self::Error => tracing_subscriber::filter::LevelFilter::ERROR,
            Self::Off => tracing_subscriber::filter::LevelFilter::OFF,
        }
    }
}

/// Install the global subscriber.
///
/// Events go to the log file when one is given, otherwise to stderr. With
/// `json`, the stderr output is JSON lines.
pub fn set_up_logging(level: Level, file: Option<&Path>, json: bool) -> std::io::Result<()> {
    let file_sub = if let Some(path) = file {
        let writer = File::options().create(true).append(true).open(path)?;
        Some(tracing_subscriber::fmt::layer().with_writer(Mutex::new(writer)))
    } else {
        None
    };

    let stderr_sub = if file.is_none() && !json {
        Some(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
    } else {
        None
    };

    let json_sub = if file.is_none() && json {
        Some(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr),
        )
    } else {
        None
    };

    let sub = tracing_subscriber::Registry::default();
    let sub = sub.with(file_sub.with_filter(level.as_level_filter()));
    let sub = sub.with(stderr_sub.with_filter(level.as_level_filter()));
    let sub = sub.with(json_sub.with_filter(level.as_level_filter()));
    tracing::subscriber::set_global_default(sub).map_err(std::io::Error::other)?;

    tracing::debug!("logging configured");

    Ok(())
}
