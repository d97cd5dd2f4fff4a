// src/log.rs
//
// Daily log file, one line per event:
//
//   2021-01-04 09:15:02.113|WARN|get_page_rows|No page exists for ticker LOL!
//
// The third column is the innermost span the event was emitted in (the
// operation that logged it), or the module path outside any span.

use std::{fmt, path::Path, sync::Mutex};

use chrono::Local;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::{
    fmt::{format::Writer, FmtContext, FormatEvent, FormatFields},
    registry::LookupSpan,
};

use crate::{file, Error, Result};

struct PipeFormat;

impl<S, N> FormatEvent<S, N> for PipeFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(&self, ctx: &FmtContext<'_, S, N>, mut writer: Writer<'_>, event: &Event<'_>) -> fmt::Result {
        let meta = event.metadata();
        let op = ctx.lookup_current().map_or(meta.target(), |span| span.name());
        write!(writer, "{}|{}|{}|", Local::now().format("%Y-%m-%d %H:%M:%S%.3f"), meta.level(), op)?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Install the global subscriber, appending to `path`. DEBUG and up.
pub fn init(path: &Path) -> Result<()> {
    let file = file::open_append(path)?;
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(Level::DEBUG)
        .event_format(PipeFormat)
        .try_init()
        .map_err(|e| Error::Logging(e.to_string()))
}
