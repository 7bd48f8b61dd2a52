//! Call-sign roster extraction for the Bundesnetzagentur amateur-radio list.
//!
//! The roster is published as a PDF. [`run`] downloads it (or reads a local
//! copy), extracts the layout text page by page and writes every record as
//! one `;`-separated line.

pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod logging;
pub mod output;
pub mod reassemble;

use std::io::Write;

pub use config::{Config, OutputFormat, Source};
pub use error::{Error, Result};
pub use reassemble::{Reassembler, Record, Status};

use crate::extract::RosterDocument;
use crate::output::RecordWriter;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// False when the download failed and nothing was processed.
    pub downloaded: bool,
    pub pages: usize,
    pub records: usize,
}

async fn load_document(config: &Config) -> Result<Option<Vec<u8>>> {
    match &config.source {
        Source::Url(url) => {
            let client = fetch::build_client(&config.user_agent)?;
            Ok(fetch::fetch_document(&client, url).await)
        }
        Source::File(path) => {
            let bytes = std::fs::read(path).map_err(|source| Error::ReadInput {
                path: path.clone(),
                source,
            })?;
            Ok(Some(bytes))
        }
    }
}

/// Writes the records of every page to `out`, in document order.
///
/// Pages are extracted one at a time and their records written before the
/// next page is touched, so a failure partway through keeps what was
/// already printed.
pub fn process_document<W: Write>(
    bytes: &[u8],
    out: W,
    format: OutputFormat,
) -> Result<RunSummary> {
    let doc = RosterDocument::load(bytes)?;
    log::debug!("Document has {} pages", doc.page_count());
    write_pages(doc.pages(), out, format)
}

/// Reassembles and writes each page as it is yielded. Stops at the first
/// page that fails, after flushing the records of the pages before it.
pub fn write_pages<W, I>(pages: I, out: W, format: OutputFormat) -> Result<RunSummary>
where
    W: Write,
    I: IntoIterator<Item = Result<String>>,
{
    let mut writer = RecordWriter::new(out, format);
    let mut count = 0;
    for (idx, text) in pages.into_iter().enumerate() {
        let text = match text {
            Ok(text) => text,
            Err(err) => {
                log::error!("Extraction failed on page {}: {err}", idx + 1);
                writer.finish()?;
                return Err(err);
            }
        };

        let records = reassemble::reassemble_page(&text);
        log::debug!("Page {}: {} records", idx + 1, records.len());
        for record in &records {
            writer.write(record)?;
        }
        count += 1;
    }

    let records = writer.written();
    writer.finish()?;
    Ok(RunSummary {
        downloaded: true,
        pages: count,
        records,
    })
}

/// One full pass: obtain the document, then extract and print its records.
///
/// A failed download is logged and yields an empty summary. A document
/// that forbids text extraction is an error.
pub async fn run<W: Write>(config: &Config, out: W) -> Result<RunSummary> {
    let Some(bytes) = load_document(config).await? else {
        return Ok(RunSummary::default());
    };

    let summary = process_document(&bytes, out, config.format)?;
    log::info!(
        "Processed {} pages, emitted {} records",
        summary.pages,
        summary.records
    );
    Ok(summary)
}
