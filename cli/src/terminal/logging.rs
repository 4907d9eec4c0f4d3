use std::fmt::{self, Write as _};

use colored::*;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::registry::LookupSpan;

use till_common::logging::{STATUS_ERROR, STATUS_INFO, STATUS_SUCCESS, STATUS_WARN};

/// Target of events that carry pre-rendered terminal output.
pub const PRINT_TARGET: &str = "till::print";

pub fn init_logging() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"))
        .add_directive(format!("{PRINT_TARGET}=info").parse()?);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .event_format(TillFormatter)
        .with_writer(std::io::stdout)
        .init();

    Ok(())
}

#[derive(Default)]
struct EventFields {
    message: Option<String>,
    status: Option<String>,
    raw_msg: Option<String>,
    extra: String,
}

impl Visit for EventFields {
    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "status" => self.status = Some(value.to_string()),
            "raw_msg" => self.raw_msg = Some(value.to_string()),
            "message" => self.message = Some(value.to_string()),
            name => {
                let _ = write!(self.extra, " {name}={value}");
            }
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        match field.name() {
            "message" => self.message = Some(format!("{value:?}")),
            name => {
                let _ = write!(self.extra, " {name}={value:?}");
            }
        }
    }
}

pub struct TillFormatter;

impl<S, N> FormatEvent<S, N> for TillFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();
        let mut fields = EventFields::default();
        event.record(&mut fields);

        if meta.target() == PRINT_TARGET {
            return writeln!(writer, "{}", fields.raw_msg.unwrap_or_default());
        }

        let (symbol, color_func): (&str, fn(ColoredString) -> ColoredString) =
            match fields.status.as_deref() {
                Some(STATUS_SUCCESS) => ("[+]", |s| s.green().bold()),
                Some(STATUS_INFO) => ("[*]", |s| s.blue().bold()),
                Some(STATUS_WARN) => ("[!]", |s| s.yellow().bold()),
                Some(STATUS_ERROR) => ("[-]", |s| s.red().bold()),
                _ => match *meta.level() {
                    Level::TRACE => ("[ ]", |s| s.dimmed()),
                    Level::DEBUG => ("[?]", |s| s.blue()),
                    Level::INFO => ("[*]", |s| s.blue().bold()),
                    Level::WARN => ("[!]", |s| s.yellow().bold()),
                    Level::ERROR => ("[-]", |s| s.red().bold()),
                },
            };

        write!(writer, "{} ", color_func(symbol.into()))?;
        write!(writer, "{}", fields.message.unwrap_or_default())?;
        if !fields.extra.is_empty() {
            write!(writer, "{}", fields.extra.dimmed())?;
        }

        writeln!(writer)
    }
}
