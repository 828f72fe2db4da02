//! Diagnostic log and event callbacks.
//!
//! The engine never prints. Hosts that want to see repagination and reveal
//! activity install a callback; without one every emit is a cheap no-op.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, OnceLock};

/// Log level for diagnostic callbacks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

type EventCallback = Box<dyn Fn(&str, &str) + Send + Sync + 'static>;
type LogCallback = Box<dyn Fn(LogLevel, &str) + Send + Sync + 'static>;

static LOG_INSTALLED: AtomicBool = AtomicBool::new(false);
static EVENT_INSTALLED: AtomicBool = AtomicBool::new(false);

fn event_callback() -> &'static Mutex<Option<EventCallback>> {
    static CALLBACK: OnceLock<Mutex<Option<EventCallback>>> = OnceLock::new();
    CALLBACK.get_or_init(|| Mutex::new(None))
}

fn log_callback() -> &'static Mutex<Option<LogCallback>> {
    static CALLBACK: OnceLock<Mutex<Option<LogCallback>>> = OnceLock::new();
    CALLBACK.get_or_init(|| Mutex::new(None))
}

/// Set the global event callback. Receives `(name, json_data)`.
pub fn set_event_callback<F>(callback: F)
where
    F: Fn(&str, &str) + Send + Sync + 'static,
{
    if let Ok(mut guard) = event_callback().lock() {
        *guard = Some(Box::new(callback));
        EVENT_INSTALLED.store(true, Ordering::Release);
    }
}

/// Remove the global event callback.
pub fn clear_event_callback() {
    if let Ok(mut guard) = event_callback().lock() {
        *guard = None;
        EVENT_INSTALLED.store(false, Ordering::Release);
    }
}

/// Check whether an event callback is installed.
pub(crate) fn events_enabled() -> bool {
    EVENT_INSTALLED.load(Ordering::Acquire)
}

/// Emit an event to the registered callback.
pub fn emit_event(name: &str, data: &str) {
    if !EVENT_INSTALLED.load(Ordering::Acquire) {
        return;
    }
    if let Ok(guard) = event_callback().lock() {
        if let Some(callback) = guard.as_ref() {
            callback(name, data);
        }
    }
}

/// Set the global log callback.
pub fn set_log_callback<F>(callback: F)
where
    F: Fn(LogLevel, &str) + Send + Sync + 'static,
{
    if let Ok(mut guard) = log_callback().lock() {
        *guard = Some(Box::new(callback));
        LOG_INSTALLED.store(true, Ordering::Release);
    }
}

/// Remove the global log callback.
pub fn clear_log_callback() {
    if let Ok(mut guard) = log_callback().lock() {
        *guard = None;
        LOG_INSTALLED.store(false, Ordering::Release);
    }
}

/// Emit a log message.
pub fn emit_log(level: LogLevel, message: &str) {
    if !LOG_INSTALLED.load(Ordering::Acquire) {
        return;
    }
    if let Ok(guard) = log_callback().lock() {
        if let Some(callback) = guard.as_ref() {
            callback(level, message);
        }
    }
}

/// Emit a formatted log message, skipping the formatting when nobody listens.
pub(crate) fn emit_log_fmt(level: LogLevel, args: fmt::Arguments<'_>) {
    if LOG_INSTALLED.load(Ordering::Acquire) {
        emit_log(level, &args.to_string());
    }
}

/// `emit_log_fmt` at debug level with `format!` syntax.
macro_rules! debug_log {
    ($($arg:tt)*) => {
        $crate::event::emit_log_fmt($crate::event::LogLevel::Debug, format_args!($($arg)*))
    };
}
pub(crate) use debug_log;

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn test_event_callback() {
        let seen = Arc::new(AtomicUsize::new(0));
        let seen_clone = Arc::clone(&seen);
        set_event_callback(move |name, _data| {
            if name == "unit-test-event" {
                seen_clone.fetch_add(1, Ordering::SeqCst);
            }
        });
        emit_event("unit-test-event", "{}");
        assert!(seen.load(Ordering::SeqCst) >= 1);
    }

    #[test]
    fn test_log_callback_formats_lazily() {
        let seen = Arc::new(AtomicUsize::new(0));
        let seen_clone = Arc::clone(&seen);
        set_log_callback(move |level, msg| {
            if msg == "unit-test 42" {
                assert_eq!(level, LogLevel::Debug);
                seen_clone.fetch_add(1, Ordering::SeqCst);
            }
        });
        debug_log!("unit-test {}", 42);
        assert!(seen.load(Ordering::SeqCst) >= 1);
    }

    #[test]
    fn test_log_level_ordering() {
        assert!(LogLevel::Debug < LogLevel::Warn);
        assert!(LogLevel::Error > LogLevel::Info);
    }
}
