//! Tracing subscriber setup for the torc binary.
//!
//! Diagnostics go to stderr so stdout stays clean for the resolved
//! configuration (and for JSON output).  Verbosity is controlled by the
//! `TORC_LOG` environment variable (`tracing_subscriber::EnvFilter` syntax),
//! defaulting to `warn`.

use tracing_subscriber::EnvFilter;

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

/// A [`tracing_subscriber::fmt::FormatEvent`] that emits torc-style
/// single-line diagnostics.
struct TorcFormatter;

impl<S, N> tracing_subscriber::fmt::FormatEvent<S, N> for TorcFormatter
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
        let level = *event.metadata().level();

        let mut extractor = MessageExtractor::default();
        event.record(&mut extractor);
        let msg = &extractor.message;

        match level {
            tracing::Level::ERROR => writeln!(writer, "torc: error: {msg}"),
            tracing::Level::WARN => writeln!(writer, "torc: warning: {msg}"),
            _ => writeln!(writer, "torc: {msg}"),
        }
    }
}

/// Initialise the global [`tracing`] subscriber.
///
/// Must be called once at program startup, before any logging.
pub fn init() {
    use tracing_subscriber::{fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _};

    let filter = EnvFilter::try_from_env("TORC_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .event_format(TorcFormatter)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .init();
}
