//! Page text extraction.
//!
//! Layout reconstruction is left to `pdf-extract`; this module only checks
//! that the document allows text access and hands back one string per page.

use lopdf::{Document, Object, Permissions};
use pdf_extract::PlainTextOutput;

use crate::error::{Error, Result};

/// Fails with [`Error::ExtractionNotAllowed`] when the document's security
/// handler withholds the extraction permission.
///
/// Documents opened with the empty user password carry their permissions in
/// the decoded encryption state; otherwise the `/P` entry of the trailer's
/// `/Encrypt` dictionary is consulted.
pub fn check_extractable(doc: &Document) -> Result<()> {
    if let Some(state) = &doc.encryption_state {
        if !state.permissions().contains(Permissions::COPYABLE) {
            return Err(Error::ExtractionNotAllowed);
        }
    }

    let encrypt = match doc.trailer.get(b"Encrypt") {
        Ok(obj) => obj,
        Err(_) => return Ok(()),
    };

    let dict = match encrypt {
        Object::Reference(id) => doc.get_dictionary(*id)?,
        Object::Dictionary(dict) => dict,
        _ => return Err(Error::PdfParse("malformed /Encrypt entry".to_string())),
    };

    let permissions = dict.get(b"P").and_then(|p| p.as_i64())?;
    if (permissions & Permissions::COPYABLE.bits() as i64) == 0 {
        return Err(Error::ExtractionNotAllowed);
    }
    Ok(())
}

/// A loaded roster whose text may be extracted.
pub struct RosterDocument {
    doc: Document,
}

impl RosterDocument {
    /// Parses `bytes` and fails fast if text extraction is not permitted.
    pub fn load(bytes: &[u8]) -> Result<Self> {
        let doc = Document::load_mem(bytes)?;
        check_extractable(&doc)?;
        Ok(Self { doc })
    }

    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Layout text of one page; `page_num` is 1-based.
    pub fn page_text(&self, page_num: u32) -> Result<String> {
        let mut text = String::new();
        {
            let mut output = PlainTextOutput::new(&mut text);
            pdf_extract::output_doc_page(&self.doc, &mut output, page_num)?;
        }
        Ok(text)
    }

    /// Page texts in document order, each extracted on demand.
    pub fn pages(&self) -> impl Iterator<Item = Result<String>> + '_ {
        self.doc
            .get_pages()
            .into_keys()
            .map(|page_num| self.page_text(page_num))
    }
}

/// Returns the layout text of every page, in document order.
pub fn extract_pages(bytes: &[u8]) -> Result<Vec<String>> {
    let doc = RosterDocument::load(bytes)?;
    let pages = doc.pages().collect::<Result<Vec<_>>>()?;
    log::debug!("Extracted text from {} pages", pages.len());
    Ok(pages)
}
