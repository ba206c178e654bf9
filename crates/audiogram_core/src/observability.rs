//! Logging context and line format.
//!
//! Every line looks like `2026-10-16 09:30:00 [INFO] audiogram::run: message`.
//! A [`LogContext`] is built once at startup and handed to the code that
//! emits events; nothing is installed as a process-wide default, so building
//! a context twice never duplicates output.

use std::io;
use std::sync::{Arc, Mutex, PoisonError};

use tracing::{Dispatch, Event, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields, MakeWriter};
use tracing_subscriber::registry::LookupSpan;

/// Timestamp layout of every log line.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Filter directive used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "info";

/// Renders `timestamp [LEVEL] target: message`.
#[derive(Debug, Clone, Copy, Default)]
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
        let metadata = event.metadata();
        write!(
            writer,
            "{} [{}] {}: ",
            chrono::Local::now().format(TIMESTAMP_FORMAT),
            metadata.level(),
            metadata.target()
        )?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Explicit logging context.
///
/// Wraps a [`Dispatch`]; events emitted inside [`LogContext::in_scope`] go to
/// its writer and nowhere else.
#[derive(Clone)]
pub struct LogContext {
    dispatch: Dispatch,
}

impl LogContext {
    /// Console context writing to stderr, filtered by `RUST_LOG` (default `info`).
    pub fn stderr() -> Self {
        Self::with_writer(io::stderr, env_filter())
    }

    /// Context writing to an arbitrary sink.
    pub fn with_writer<W>(writer: W, filter: EnvFilter) -> Self
    where
        W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    {
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(writer)
            .event_format(LineFormat)
            .finish();

        Self {
            dispatch: Dispatch::new(subscriber),
        }
    }

    /// Context capturing INFO and above into `buffer`.
    pub fn with_buffer(buffer: &LogBuffer) -> Self {
        Self::with_writer(buffer.clone(), EnvFilter::new(DEFAULT_FILTER))
    }

    /// Runs `f` with this context receiving all events.
    pub fn in_scope<T>(&self, f: impl FnOnce() -> T) -> T {
        tracing::dispatcher::with_default(&self.dispatch, f)
    }
}

impl std::fmt::Debug for LogContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogContext").finish_non_exhaustive()
    }
}

/// `RUST_LOG` filter, falling back to [`DEFAULT_FILTER`].
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// In-memory sink, for capturing log output.
#[derive(Debug, Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far.
    pub fn contents(&self) -> String {
        let bytes = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&bytes).into_owned()
    }

    /// Written lines, in order.
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = LogBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_format() {
        let buffer = LogBuffer::new();
        let ctx = LogContext::with_writer(buffer.clone(), EnvFilter::new("info"));

        ctx.in_scope(|| tracing::info!(target: "audiogram::run", "Loading model: x"));

        let lines = buffer.lines();
        assert_eq!(lines.len(), 1);
        let (timestamp, rest) = lines[0].split_at(19);
        assert!(chrono::NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT).is_ok());
        assert_eq!(rest, " [INFO] audiogram::run: Loading model: x");
    }

    #[test]
    fn test_filter_drops_debug() {
        let buffer = LogBuffer::new();
        let ctx = LogContext::with_writer(buffer.clone(), EnvFilter::new("info"));

        ctx.in_scope(|| {
            tracing::debug!("hidden");
            tracing::error!("Execution failed.");
        });

        let lines = buffer.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("[ERROR]"));
    }

    #[test]
    fn test_contexts_are_independent() {
        let first = LogBuffer::new();
        let second = LogBuffer::new();
        let a = LogContext::with_writer(first.clone(), EnvFilter::new("info"));
        let b = LogContext::with_writer(second.clone(), EnvFilter::new("info"));

        a.in_scope(|| tracing::info!("one"));
        a.in_scope(|| tracing::info!("two"));
        b.in_scope(|| tracing::info!("three"));

        assert_eq!(first.lines().len(), 2);
        assert_eq!(second.lines().len(), 1);
    }

    #[test]
    fn test_events_outside_scope_are_not_captured() {
        let buffer = LogBuffer::new();
        let _ctx = LogContext::with_writer(buffer.clone(), EnvFilter::new("info"));

        tracing::info!("nobody listening");

        assert!(buffer.contents().is_empty());
    }
}
