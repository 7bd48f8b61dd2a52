//! Reassembly of roster records from layout text.
//!
//! Layout extraction wraps a single record over several physical lines and
//! mixes running headers ("Liste der ...") and footers ("Seite ...") into
//! the flow. Lines are folded into a buffer that is only emitted once the
//! next record start, a section header or the end of the page shows that
//! the record is complete.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

// The `|` inside the class is literal; kept as the roster has always been
// matched this way.
static RECORD_START: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(D[A-D|F-R][0-9][A-Z]{1,3}),\s(A|E),").expect("record pattern is valid")
});

// The same record start after `normalize`. A separator only becomes `;`
// where the source had a plain space after the comma; any other whitespace
// (or none, after the status) leaves the comma in place.
static NORMALIZED_RECORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(D[A-D|F-R][0-9][A-Z]{1,3})(?:;|,\s)(A|E)(?:[;,](.*))?$")
        .expect("normalized record pattern is valid")
});

const SECTION_HEADER: &str = "Liste der";
const PAGE_FOOTER: &str = "Seite";

pub fn is_record_start(line: &str) -> bool {
    RECORD_START.is_match(line)
}

/// Turns the source's `", "` separators into `;`.
pub fn normalize(line: &str) -> String {
    // The second pass collapses "; " left behind where a field itself
    // started with a space.
    line.replace(", ", ";").replace("; ", ";")
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum State {
    /// Start of page; plain lines are ignored until a record start or footer.
    Idle,
    /// Plain non-blank lines are appended to the buffer.
    Accumulating(String),
    /// Inside a section header; plain lines are ignored until a footer.
    Suppressed,
}

#[derive(Debug)]
pub struct Reassembler {
    state: State,
}

impl Default for Reassembler {
    fn default() -> Self {
        Self::new()
    }
}

impl Reassembler {
    pub fn new() -> Self {
        Self { state: State::Idle }
    }

    /// Feeds one line and returns the record it completed, if any.
    pub fn push_line(&mut self, line: &str) -> Option<String> {
        if is_record_start(line) {
            let done = self.take_buffer();
            self.state = State::Accumulating(line.to_string());
            return done;
        }

        if line.contains(SECTION_HEADER) {
            let done = self.take_buffer();
            log::trace!("Section header, suppressing: {line:?}");
            self.state = State::Suppressed;
            return done;
        }

        if line.contains(PAGE_FOOTER) {
            if !matches!(self.state, State::Accumulating(_)) {
                log::trace!("Page footer, resuming: {line:?}");
                self.state = State::Accumulating(String::new());
            }
            return None;
        }

        if let State::Accumulating(buf) = &mut self.state {
            if !line.trim().is_empty() {
                buf.push_str(line);
            }
        }
        None
    }

    /// Flushes whatever is buffered and resets for the next page.
    pub fn finish_page(&mut self) -> Option<String> {
        let done = self.take_buffer();
        self.state = State::Idle;
        done
    }

    fn take_buffer(&mut self) -> Option<String> {
        let State::Accumulating(buf) = &mut self.state else {
            return None;
        };
        let buf = std::mem::take(buf);
        if buf.is_empty() {
            return None;
        }
        if is_record_start(&buf) {
            Some(normalize(&buf))
        } else {
            log::debug!("Dropping unrecognised text: {buf:?}");
            None
        }
    }
}

/// Reassembles the records of a single page. No state survives the page.
pub fn reassemble_page(text: &str) -> Vec<String> {
    let mut reassembler = Reassembler::new();
    let mut records: Vec<String> = text
        .lines()
        .filter_map(|line| reassembler.push_line(line))
        .collect();
    records.extend(reassembler.finish_page());
    records
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Status {
    A,
    E,
}

/// Parsed view of an emitted line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    pub callsign: String,
    pub status: Status,
    pub fields: Vec<String>,
}

impl Record {
    /// Splits a normalized line. Returns `None` for anything that did not
    /// come out of [`normalize`] on a record start.
    pub fn parse(normalized: &str) -> Option<Self> {
        let caps = NORMALIZED_RECORD.captures(normalized)?;
        let status = match &caps[2] {
            "A" => Status::A,
            _ => Status::E,
        };
        let fields = caps
            .get(3)
            .map(|rest| rest.as_str().split(';').map(str::to_string).collect())
            .unwrap_or_default();
        Some(Self {
            callsign: caps[1].to_string(),
            status,
            fields,
        })
    }
}
