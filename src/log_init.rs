use log::{LevelFilter, Metadata, Record};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use crate::config::LogConfig;
use crate::error::Result;

struct FileLogger {
    file_path: PathBuf,
    level: LevelFilter,
}

impl log::Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            if let Ok(mut file) = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.file_path)
            {
                let _ = writeln!(file, "[{}] {}", record.level(), record.args());
            }
        }
    }

    fn flush(&self) {}
}

/// Send diagnostics to `path` at debug level.
pub fn init_logger(path: &str) -> Result<()> {
    init_with_config(&LogConfig::new(path))
}

/// Install the file logger described by `config`.
///
/// Fails if a logger is already installed.
pub fn init_with_config(config: &LogConfig) -> Result<()> {
    let logger = FileLogger {
        file_path: config.path.clone(),
        level: config.level,
    };
    log::set_boxed_logger(Box::new(logger))?;
    log::set_max_level(config.level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::{Level, Log};

    fn temp_log(name: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("ekho-{}-{name}.log", std::process::id()));
        let _ = std::fs::remove_file(&path);
        path
    }

    #[test]
    fn writes_records_at_or_above_level() {
        let path = temp_log("levels");
        let logger = FileLogger {
            file_path: path.clone(),
            level: LevelFilter::Warn,
        };

        logger.log(
            &Record::builder()
                .level(Level::Warn)
                .args(format_args!("bad color"))
                .build(),
        );
        logger.log(
            &Record::builder()
                .level(Level::Debug)
                .args(format_args!("finalized"))
                .build(),
        );

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "[WARN] bad color\n");
        let _ = std::fs::remove_file(&path);
    }
}
