// tabulog - core/sheet.rs
//
// Row/output assembly: the five-column sheet writer and its row counter.
//
// Rows are written raw, with no CSV quoting or escaping. Column integrity
// relies entirely on the upstream comma-to-semicolon substitution in the
// cleaning cascade, so the writer must never be handed text containing a
// literal comma.

use crate::core::model::Record;
use crate::util::constants;
use std::io::{self, Write};

/// Writes five-column rows and tracks the 1-based row counter used to
/// build each row's relative-reference formula.
#[derive(Debug)]
pub struct SheetWriter<W: Write> {
    out: W,
    /// Row number the next written row will occupy. Starts at 1; every
    /// physical row (seed rows included) consumes exactly one increment.
    next_row: u64,
}

impl<W: Write> SheetWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out, next_row: 1 }
    }

    /// Write the two fixed rows that precede any input: the column header,
    /// then the base-time row with a literal `0` in the "Seconds since"
    /// column for the analyst to replace later.
    pub fn write_seed_rows(&mut self) -> io::Result<()> {
        self.write_row(&constants::COLUMN_HEADERS)?;
        self.write_row(&["", constants::BASE_TIME_SEED, "", "", ""])
    }

    /// Write one parsed-record row. The "Seconds since" cell is the formula
    /// `=A<row>-B2` referencing the row being written.
    pub fn write_record(&mut self, record: &Record) -> io::Result<()> {
        let time = record.time_seconds.to_string();
        let formula = format!("=A{}-{}", self.next_row, constants::BASE_TIME_CELL);
        let flag = if record.error {
            constants::ERROR_FLAG
        } else {
            ""
        };
        self.write_row(&[&time, &formula, flag, &record.body, ""])
    }

    /// Write a main-body placeholder row holding only a footnote
    /// back-reference marker.
    pub fn write_reference(&mut self, marker: &str) -> io::Result<()> {
        self.write_row(&["", "", "", "", marker])
    }

    /// Write one relocated footnote row: text in the Notes column only.
    pub fn write_note(&mut self, text: &str) -> io::Result<()> {
        self.write_row(&["", "", "", "", text])
    }

    /// Rows written so far, seed rows included.
    pub fn rows_written(&self) -> u64 {
        self.next_row - 1
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    /// Consume the writer, returning the underlying sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_row(&mut self, fields: &[&str; 5]) -> io::Result<()> {
        writeln!(
            self.out,
            "{},{},{},{},{}",
            fields[0], fields[1], fields[2], fields[3], fields[4]
        )?;
        self.next_row += 1;
        Ok(())
    }
}
