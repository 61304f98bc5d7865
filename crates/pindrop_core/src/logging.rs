//! Process-wide logging bootstrap.
//!
//! # Responsibility
//! - Start file-based rolling logs at most once per process.
//! - Record panics as sanitized, metadata-only log events.
//!
//! # Invariants
//! - Re-running init with the active configuration is a no-op.
//! - Re-running init with a different level or directory is rejected.
//! - Initialization never panics.

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::{error, info};
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

const LOG_BASENAME: &str = "pindrop";
const ROTATE_AT_BYTES: u64 = 10 * 1024 * 1024;
const KEEP_ROTATED_FILES: usize = 5;
const PANIC_SNIPPET_MAX_CHARS: usize = 160;

static ACTIVE: OnceCell<ActiveLogging> = OnceCell::new();
static PANIC_HOOK: OnceCell<()> = OnceCell::new();

struct ActiveLogging {
    level: &'static str,
    log_dir: PathBuf,
    _handle: LoggerHandle,
}

/// Initializes logging with level and directory.
///
/// Repeat calls with the active configuration succeed without side effects.
/// An attempt to reconfigure a live logger returns a readable error string
/// and leaves the active configuration in place.
pub fn init_logging(level: &str, log_dir: &str) -> Result<(), String> {
    let level = parse_level(level)?;
    let log_dir = resolve_log_dir(log_dir)?;

    let active = ACTIVE.get_or_try_init(|| start_logging(level, log_dir.clone()))?;

    if active.log_dir != log_dir {
        return Err(format!(
            "logging already writes to `{}`; not switching to `{}`",
            active.log_dir.display(),
            log_dir.display()
        ));
    }
    if active.level != level {
        return Err(format!(
            "logging already runs at level `{}`; not switching to `{}`",
            active.level, level
        ));
    }

    Ok(())
}

/// Returns `(level, log_dir)` once logging is active, `None` before.
pub fn logging_status() -> Option<(&'static str, PathBuf)> {
    ACTIVE
        .get()
        .map(|active| (active.level, active.log_dir.clone()))
}

/// Returns the default log level for the current build mode.
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

fn start_logging(level: &'static str, log_dir: PathBuf) -> Result<ActiveLogging, String> {
    std::fs::create_dir_all(&log_dir)
        .map_err(|err| format!("cannot create log directory `{}`: {err}", log_dir.display()))?;

    let handle = Logger::try_with_str(level)
        .map_err(|err| format!("bad log level `{level}`: {err}"))?
        .log_to_file(
            FileSpec::default()
                .directory(log_dir.as_path())
                .basename(LOG_BASENAME),
        )
        .rotate(
            Criterion::Size(ROTATE_AT_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(KEEP_ROTATED_FILES),
        )
        .append()
        .write_mode(WriteMode::BufferAndFlush)
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .map_err(|err| format!("logger startup failed: {err}"))?;

    install_panic_capture();

    info!(
        "event=core_init module=core status=ok platform={} version={} level={} log_dir={}",
        std::env::consts::OS,
        env!("CARGO_PKG_VERSION"),
        level,
        log_dir.display()
    );

    Ok(ActiveLogging {
        level,
        log_dir,
        _handle: handle,
    })
}

fn parse_level(level: &str) -> Result<&'static str, String> {
    const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

    let mut wanted = level.trim().to_ascii_lowercase();
    if wanted == "warning" {
        wanted = "warn".to_string();
    }

    LEVELS
        .iter()
        .find(|known| **known == wanted)
        .copied()
        .ok_or_else(|| format!("log level `{level}` is not one of trace, debug, info, warn, error"))
}

fn resolve_log_dir(log_dir: &str) -> Result<PathBuf, String> {
    let trimmed = log_dir.trim();
    if trimmed.is_empty() {
        return Err("log directory is empty".to_string());
    }

    let dir = Path::new(trimmed);
    if dir.is_relative() {
        return Err(format!("log directory must be absolute, got `{trimmed}`"));
    }

    Ok(dir.to_path_buf())
}

fn install_panic_capture() {
    if PANIC_HOOK.set(()).is_err() {
        return;
    }

    let chained = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let location = info.location().map_or_else(
            || "unknown".to_string(),
            |loc| format!("{}:{}", loc.file(), loc.line()),
        );
        // Payloads can carry user-entered text; flatten and bound them before
        // they reach the log file.
        error!(
            "event=panic_captured module=core status=error location={location} payload={}",
            clip_for_log(panic_payload(info), PANIC_SNIPPET_MAX_CHARS)
        );
        chained(info);
    }));
}

fn panic_payload<'a>(info: &'a std::panic::PanicHookInfo<'_>) -> &'a str {
    let payload = info.payload();
    if let Some(text) = payload.downcast_ref::<&str>() {
        text
    } else if let Some(text) = payload.downcast_ref::<String>() {
        text.as_str()
    } else {
        "non-string panic payload"
    }
}

fn clip_for_log(text: &str, max_chars: usize) -> String {
    let flat = text.replace(['\n', '\r'], " ");
    if flat.chars().count() <= max_chars {
        return flat;
    }

    let mut clipped: String = flat.chars().take(max_chars).collect();
    clipped.push_str("...");
    clipped
}
