use std::fs::File;
use std::io::{self, IsTerminal};
use std::sync::Mutex;

use anyhow::{Context, Result};
use chrono::Local;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::{
    EnvFilter,
    fmt::{
        FmtContext,
        format::{FormatEvent, FormatFields, Writer},
    },
    layer::SubscriberExt,
    registry::LookupSpan,
    util::SubscriberInitExt,
};

use crate::config::LoggingConfig;

/// One line per event: local time, level, `file:line`, then the fields.
pub struct LineFormat;

impl<S, N> FormatEvent<S, N> for LineFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();
        let ansi = writer.has_ansi_escapes();
        let timestamp = Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z");
        let location = match (meta.file(), meta.line()) {
            (Some(file), Some(line)) => format!("{file}:{line}"),
            _ => meta.target().to_string(),
        };

        if ansi {
            let color = match *meta.level() {
                Level::ERROR => "1;31",
                Level::WARN => "1;33",
                Level::INFO => "1;32",
                Level::DEBUG => "1;34",
                Level::TRACE => "1;35",
            };
            write!(
                writer,
                "\x1b[2m{timestamp}\x1b[0m \x1b[{color}m{:>5}\x1b[0m \x1b[36m{location}\x1b[0m ",
                meta.level()
            )?;
        } else {
            write!(writer, "{timestamp} {:>5} {location} ", meta.level())?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Picks the filter directives: an explicit `--log-level`, then a
/// non-empty `RUST_LOG`, then the configured level.
fn filter_directives<'a>(
    explicit: Option<&'a str>,
    env: Option<&'a str>,
    configured: &'a str,
) -> &'a str {
    explicit
        .or(env.filter(|v| !v.trim().is_empty()))
        .unwrap_or(configured)
}

fn make_filter(
    explicit: Option<&str>,
    configured: &str,
) -> Result<EnvFilter> {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let directives = filter_directives(explicit, env.as_deref(), configured);
    EnvFilter::try_new(directives).with_context(|| format!("invalid log level '{directives}'"))
}

/// Installs the global subscriber. Call once at startup.
///
/// `explicit_level` is the `--log-level` flag; it beats `RUST_LOG`, which
/// beats `config.level`.
///
/// - stderr: colored when attached to a terminal, so reports on stdout
///   stay clean when piped.
/// - file: appended to when `config.file` is set. The directory must exist.
pub fn init_logging(
    config: &LoggingConfig,
    explicit_level: Option<&str>,
) -> Result<()> {
    let filter = make_filter(explicit_level, &config.level)?;

    let stderr_layer = tracing_subscriber::fmt::layer()
        .event_format(LineFormat)
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr);

    let file_layer = match &config.file {
        Some(path) => {
            let file = File::options()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("cannot open log file '{}'", path.display()))?;
            Some(
                tracing_subscriber::fmt::layer()
                    .event_format(LineFormat)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("logging already initialized")
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    use tracing_subscriber::fmt::MakeWriter;

    use super::*;

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Captured {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for Captured {
        fn write(
            &mut self,
            buf: &[u8],
        ) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Captured {
        type Writer = Captured;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn capture(emit: impl FnOnce()) -> String {
        let captured = Captured::default();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .event_format(LineFormat)
            .with_writer(captured.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, emit);
        captured.text()
    }

    #[test]
    fn plain_line_has_level_location_and_message() {
        let text = capture(|| tracing::warn!("unparseable amount"));

        assert!(text.contains(" WARN "), "{text}");
        assert!(text.contains("logging.rs:"), "{text}");
        assert!(text.contains("unparseable amount"), "{text}");
        assert!(text.ends_with('\n'));
        assert!(!text.contains('\x1b'), "{text}");
    }

    #[test]
    fn one_line_per_event() {
        let text = capture(|| {
            tracing::info!("first");
            tracing::error!("second");
        });

        assert_eq!(text.lines().count(), 2);
    }

    #[test]
    fn explicit_level_beats_environment_and_config() {
        assert_eq!(filter_directives(Some("debug"), Some("warn"), "info"), "debug");
        assert_eq!(filter_directives(Some("debug"), None, "info"), "debug");
    }

    #[test]
    fn environment_beats_config() {
        assert_eq!(filter_directives(None, Some("warn"), "info"), "warn");
        assert_eq!(filter_directives(None, Some("  "), "info"), "info");
        assert_eq!(filter_directives(None, None, "info"), "info");
    }

    #[test]
    fn configured_level_parses() {
        assert!(EnvFilter::try_new("debug").is_ok());
        assert!(EnvFilter::try_new("info,ratio_core=trace").is_ok());
    }

    #[test]
    fn file_logging_needs_an_existing_directory() {
        let config = LoggingConfig {
            level: "info".to_string(),
            file: Some("/nonexistent-dir/ratio-fin.log".into()),
        };

        let err = init_logging(&config, None).unwrap_err();

        assert!(err.to_string().contains("cannot open log file"));
    }
}
