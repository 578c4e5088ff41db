//! Run-scoped logging context
//!
//! [`init`] builds the tracing subscriber once at process start: a fmt layer
//! writing `timestamp | level | target | message` lines to a size-rotated
//! `webscraping.log` in the output directory, optionally mirrored to the
//! console. It returns a [`LoggingGuard`]; dropping the guard at process end
//! flushes the file writer. No component touches logger state after init.

mod rolling;

pub use rolling::RollingFileWriter;

use std::io;
use std::path::Path;
use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{self, FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Log file name inside the output directory
pub const LOG_FILE_NAME: &str = "webscraping.log";

/// Size cap before the log file rotates
pub const MAX_LOG_BYTES: u64 = 2_000_000;

/// Number of rotated backups kept
pub const LOG_BACKUP_COUNT: usize = 3;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Keeps the log file writer alive for the duration of the run and flushes
/// it on drop.
pub struct LoggingGuard {
    writer: RollingFileWriter,
}

impl Drop for LoggingGuard {
    fn drop(&mut self) {
        let _ = io::Write::flush(&mut self.writer);
    }
}

/// Pipe-separated line format: `timestamp | level | target | message`
#[derive(Clone, Copy)]
struct PipeFormat;

impl<S, N> FormatEvent<S, N> for PipeFormat
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
            "{} | {} | {} | ",
            chrono::Local::now().format(TIMESTAMP_FORMAT),
            metadata.level(),
            metadata.target(),
        )?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Installs the tracing subscriber for this run
///
/// Creates `log_dir` if absent and opens the rolling log file inside it.
/// Must be called at most once per process; the returned guard should live
/// until the end of `main`.
pub fn init(log_dir: &Path, log_to_console: bool) -> io::Result<LoggingGuard> {
    std::fs::create_dir_all(log_dir)?;
    let writer = RollingFileWriter::new(
        log_dir.join(LOG_FILE_NAME),
        MAX_LOG_BYTES,
        LOG_BACKUP_COUNT,
    )?;

    let file_layer = fmt::layer()
        .event_format(PipeFormat)
        .with_ansi(false)
        .with_writer(writer.clone());

    let registry = tracing_subscriber::registry()
        .with(EnvFilter::new("info"))
        .with(file_layer);

    if log_to_console {
        let console_layer = fmt::layer()
            .event_format(PipeFormat)
            .with_writer(io::stdout);
        registry.with(console_layer).init();
    } else {
        registry.init();
    }

    Ok(LoggingGuard { writer })
}
