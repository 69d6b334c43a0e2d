use colored::Colorize;
use env_logger::{Builder, Env};
use log::SetLoggerError;
use std::io::Write;

/// Installs Folio's logger, filtered through `RUST_LOG` (`info` by default).
///
/// Sites that already set up their own logger can skip this, Folio only goes through the [`log`] facade.
/// Returns an error if a logger was already installed.
pub fn init_logging() -> Result<(), SetLoggerError> {
    let logging_env = Env::default().filter_or("RUST_LOG", "info");
    Builder::from_env(logging_env)
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {} {}",
                chrono::Local::now().format("%H:%M:%S").to_string().dimmed(),
                record.target().to_ascii_lowercase().bold().bright_yellow(),
                record.args()
            )
        })
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_only_once() {
        // Another logger may already be installed by the test harness, so only the second call is certain.
        let _ = init_logging();
        assert!(init_logging().is_err());

        log::debug!(target: "layout", "still logs through the facade");
    }
}
