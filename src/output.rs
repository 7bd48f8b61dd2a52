use std::io::Write;

use crate::config::OutputFormat;
use crate::error::Result;
use crate::reassemble::Record;

/// Writes emitted records, one per line.
pub struct RecordWriter<W: Write> {
    out: W,
    format: OutputFormat,
    written: usize,
}

impl<W: Write> RecordWriter<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self {
            out,
            format,
            written: 0,
        }
    }

    /// `line` is a normalized record as produced by the reassembler.
    pub fn write(&mut self, line: &str) -> Result<()> {
        match self.format {
            OutputFormat::Delimited => writeln!(self.out, "{line}")?,
            OutputFormat::JsonLines => {
                let Some(record) = Record::parse(line) else {
                    log::warn!("Skipping record that does not split into fields: {line:?}");
                    return Ok(());
                };
                serde_json::to_writer(&mut self.out, &record)?;
                writeln!(self.out)?;
            }
        }
        self.written += 1;
        Ok(())
    }

    pub fn written(&self) -> usize {
        self.written
    }

    pub fn finish(mut self) -> Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}
