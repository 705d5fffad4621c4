//! Tracing subscriber setup: console formatter and initialisation.

/// Target used by [`Logger::stage`](super::Logger::stage) for stage headers.
pub(super) const STAGE_TARGET: &str = "inifile::stage";

/// Environment variable that overrides the console filter (e.g. `inifile=trace`).
const FILTER_ENV: &str = "INIFILE_LOG";

/// Extracts the `message` field from a [`tracing::Event`].
#[derive(Default)]
struct MessageExtractor {
    message: String,
}

impl tracing::field::Visit for MessageExtractor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        }
    }
}

/// A [`tracing_subscriber::fmt::FormatEvent`] that emits inifile-style
/// console output.
struct ConsoleFormatter;

impl<S, N> tracing_subscriber::fmt::FormatEvent<S, N> for ConsoleFormatter
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
    N: for<'a> tracing_subscriber::fmt::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: tracing_subscriber::fmt::format::Writer<'_>,
        event: &tracing::Event<'_>,
    ) -> std::fmt::Result {
        let metadata = event.metadata();
        let level = *metadata.level();

        let mut extractor = MessageExtractor::default();
        event.record(&mut extractor);
        let line = format_line(level, metadata.target(), &extractor.message);

        if writer.has_ansi_escapes() {
            writeln!(writer, "{}", colorize(level, metadata.target(), &line))
        } else {
            writeln!(writer, "{line}")
        }
    }
}

/// Plain-text rendering of one event.
fn format_line(level: tracing::Level, target: &str, msg: &str) -> String {
    match level {
        tracing::Level::ERROR => format!("ERROR {msg}"),
        tracing::Level::WARN => format!("WARN  {msg}"),
        tracing::Level::INFO if target == STAGE_TARGET => format!("==> {msg}"),
        tracing::Level::INFO => format!("  {msg}"),
        _ => format!("  [debug] {msg}"),
    }
}

/// Wrap a rendered line in ANSI colors by level.
fn colorize(level: tracing::Level, target: &str, line: &str) -> String {
    let code = match level {
        tracing::Level::ERROR => "31",
        tracing::Level::WARN => "33",
        tracing::Level::INFO if target == STAGE_TARGET => "1;34",
        tracing::Level::INFO => "0",
        _ => "2",
    };
    format!("\x1b[{code}m{line}\x1b[0m")
}

/// Initialise the global [`tracing`] subscriber.
///
/// All events go to stderr so that stdout carries only command output.
/// `verbose` lowers the console level from `INFO` to `DEBUG`; the
/// `INIFILE_LOG` environment variable overrides both.
/// Must be called once at program startup, before any logging.
pub fn init_subscriber(verbose: bool) {
    use std::io::IsTerminal as _;
    use tracing_subscriber::{
        EnvFilter, fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _,
    };

    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_env(FILTER_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let console_layer = fmt::layer()
        .event_format(ConsoleFormatter)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .init();
}
