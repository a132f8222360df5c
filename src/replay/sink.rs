//! Output sink for classified inputs
//!
//! Classified inputs arrive over a channel and are written by a single task,
//! in order, as JSON lines or colored text.

use clap::ValueEnum;
use colored::Colorize;
use std::io::{self, Write};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

use super::ClassifiedInput;

/// Record format on the output stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One JSON object per line
    Json,
    /// Aligned, colored text
    Pretty,
}

/// Spawn the task that drains `rx` into `out`
///
/// The task ends once every sender is dropped. It yields the number of
/// records written and the writer.
pub fn spawn_sink<W>(
    mut rx: mpsc::UnboundedReceiver<ClassifiedInput>,
    format: OutputFormat,
    mut out: W,
) -> JoinHandle<io::Result<(usize, W)>>
where
    W: Write + Send + 'static,
{
    tokio::spawn(async move {
        debug!("Output sink started ({:?})", format);

        let mut written = 0;
        while let Some(record) = rx.recv().await {
            write_record(&mut out, format, &record)?;
            written += 1;
        }

        out.flush()?;
        debug!("Output sink stopped after {} records", written);

        Ok::<_, io::Error>((written, out))
    })
}

fn write_record<W: Write>(out: &mut W, format: OutputFormat, record: &ClassifiedInput) -> io::Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, record)?;
            writeln!(out)
        }
        OutputFormat::Pretty => writeln!(
            out,
            "{:>4}  {:<16} {}",
            record.index,
            record.source.dimmed(),
            record.input.as_str().green().bold()
        ),
    }
}
