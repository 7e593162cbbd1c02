//! Console output and warning accounting

use crate::filter::env_filter;
use json2cpp_core::LogLevel;
use parking_lot::Mutex;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::Layer;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::Context;
use tracing_subscriber::registry::LookupSpan;

/// Tracing layer that counts warning and error events
///
/// Clones share the same tally, so the handle returned by [`init_logging`]
/// observes everything the installed copy records.
#[derive(Clone, Default)]
pub struct WarningCounter {
    state: Arc<CounterState>,
}

#[derive(Default)]
struct CounterState {
    count: AtomicUsize,
    messages: Mutex<Vec<String>>,
}

impl WarningCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of WARN and ERROR events seen so far.
    pub fn count(&self) -> usize {
        self.state.count.load(Ordering::SeqCst)
    }

    /// Messages of the counted events, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.state.messages.lock().clone()
    }

    /// Convert tracing Level to our LogLevel
    fn convert_level(level: &Level) -> LogLevel {
        match *level {
            Level::TRACE => LogLevel::Trace,
            Level::DEBUG => LogLevel::Debug,
            Level::INFO => LogLevel::Info,
            Level::WARN => LogLevel::Warn,
            Level::ERROR => LogLevel::Error,
        }
    }
}

impl<S> Layer<S> for WarningCounter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let level = Self::convert_level(event.metadata().level());
        if level < LogLevel::Warn {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        self.state.count.fetch_add(1, Ordering::SeqCst);
        self.state
            .messages
            .lock()
            .push(visitor.message.unwrap_or_default());
    }
}

/// Visitor to extract the message field from tracing events
#[derive(Default)]
struct MessageVisitor {
    message: Option<String>,
}

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" || self.message.is_none() {
            self.message = Some(format!("{:?}", value));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" || self.message.is_none() {
            self.message = Some(value.to_string());
        }
    }
}

/// Initialize the logging system
///
/// Installs a stderr formatter filtered by `level` (or `RUST_LOG`) and a
/// [`WarningCounter`] that sees every warning regardless of the console
/// level. Call this once at startup; later calls leave the first subscriber
/// in place and return a counter that is not installed.
pub fn init_logging(level: LogLevel) -> WarningCounter {
    use tracing_subscriber::prelude::*;

    let counter = WarningCounter::new();

    let console = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(env_filter(level));

    let subscriber = tracing_subscriber::registry()
        .with(console)
        .with(counter.clone().with_filter(LevelFilter::WARN));

    // Try to set as global default (ignore error if already set)
    let _ = tracing::subscriber::set_global_default(subscriber);

    counter
}
