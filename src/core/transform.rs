// tabulog - core/transform.rs
//
// The single forward pass: clean each line, match its timestamp prefix,
// drive the footnote state machine, and assemble output rows.
//
// Core layer: accepts Read/Write trait objects, never touches the
// filesystem directly. Unmatched lines are not failures; they degrade into
// footnote blocks, so the only error surface here is I/O.

use crate::core::clean;
use crate::core::model::{FootnoteBlock, PassState, Record, TransformSummary};
use crate::core::sheet::SheetWriter;
use crate::core::stamp;
use std::io::{self, BufRead, Write};

/// Run the whole transformation: `input` lines in, five-column rows out.
///
/// Emits the two seed rows, then one row per timestamped record and one
/// placeholder row per footnote block, then relocates every footnote block
/// (marker line first) to the end of the output in discovery order.
pub fn transform<R: BufRead, W: Write>(input: R, output: W) -> io::Result<TransformSummary> {
    let mut sheet = SheetWriter::new(output);
    let mut state = PassState::InBody;
    let mut blocks: Vec<FootnoteBlock> = Vec::new();
    let mut summary = TransformSummary::default();

    sheet.write_seed_rows()?;

    for line in input.lines() {
        let line = line?;
        summary.lines_read += 1;

        let cleaned = clean::clean(&line);

        if let Some(stamp) = stamp::match_line(&cleaned.text) {
            // A timestamped record always closes any open footnote block.
            state = PassState::InBody;
            sheet.write_record(&Record {
                time_seconds: stamp.time_seconds,
                error: cleaned.error,
                body: stamp.body,
            })?;
            summary.records += 1;
        } else {
            match state {
                PassState::InBody => {
                    // First unmatched line of a new run: open a block, leave
                    // its marker in the main body.
                    state = PassState::InFootnote;
                    let block = FootnoteBlock::open(blocks.len() + 1, cleaned.text);
                    sheet.write_reference(&block.marker())?;
                    blocks.push(block);
                }
                PassState::InFootnote => {
                    // Continuation of the open block; no main-body row.
                    if let Some(block) = blocks.last_mut() {
                        block.lines.push(cleaned.text);
                    }
                }
            }
        }
    }

    // Main body complete. Relocate the accumulated footnote blocks, each
    // one led by its own marker line.
    for block in &blocks {
        sheet.write_note(&block.marker())?;
        for line in &block.lines {
            sheet.write_note(line)?;
        }
    }
    sheet.flush()?;

    summary.footnote_blocks = blocks.len() as u64;
    summary.rows_written = sheet.rows_written();

    tracing::debug!(
        lines = summary.lines_read,
        records = summary.records,
        footnotes = summary.footnote_blocks,
        rows = summary.rows_written,
        "Transform pass complete"
    );

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(input: &str) -> (String, TransformSummary) {
        let mut out = Vec::new();
        let summary = transform(Cursor::new(input), &mut out).unwrap();
        (String::from_utf8(out).unwrap(), summary)
    }

    const SEED: &str = "Seconds,Seconds since,Error,Body,Notes\n,0,,,\n";

    #[test]
    fn test_empty_input_emits_only_seed_rows() {
        let (out, summary) = run("");
        assert_eq!(out, SEED);
        assert_eq!(summary.lines_read, 0);
        assert_eq!(summary.rows_written, 2);
    }

    #[test]
    fn test_single_shape1_record() {
        let (out, summary) = run(" [2024-01-01 10:02:03.123456789] Pump started, warning\n");
        assert_eq!(out, format!("{SEED}123.12,=A3-B2,,Pump started; warning,\n"));
        assert_eq!(summary.records, 1);
        assert_eq!(summary.footnote_blocks, 0);
    }

    /// Stripping a leading ERROR tag leaves exactly the single space that
    /// Shape 1 requires, so `[ERROR] [stamp] body` parses as a flagged record.
    #[test]
    fn test_error_tagged_record_gets_flag() {
        let input = "[ERROR] [2024-01-01 10:02:03.123456] Valve stuck\n";
        let (out, summary) = run(input);
        assert_eq!(out, format!("{SEED}123.12,=A3-B2,E,Valve stuck,\n"));
        assert_eq!(summary.records, 1);
    }

    /// An ERROR tag in front of a Shape 2 stamp leaves a leading space that
    /// neither shape accepts, so the line falls through to a footnote.
    #[test]
    fn test_error_tag_before_shape2_degrades_to_footnote() {
        let input = "[ERROR] [2024-01-01T10:02:03-05:00] Valve closed\n";
        let (out, _) = run(input);
        assert_eq!(
            out,
            format!(
                "{SEED},,,,<<Footnote 1>>\n\
                 ,,,,<<Footnote 1>>\n\
                 ,,,, [2024-01-01T10:02:03-05:00] Valve closed\n"
            )
        );
    }

    /// Two consecutive unmatched lines form one block with one marker row.
    #[test]
    fn test_footnote_block_accumulation() {
        let input = " [2024-01-01 10:02:03.000000] ok\n\
                     stack line one\n\
                     stack line two\n";
        let (out, summary) = run(input);
        assert_eq!(
            out,
            format!(
                "{SEED}123,=A3-B2,,ok,\n\
                 ,,,,<<Footnote 1>>\n\
                 ,,,,<<Footnote 1>>\n\
                 ,,,,stack line one\n\
                 ,,,,stack line two\n"
            )
        );
        assert_eq!(summary.footnote_blocks, 1);
        assert_eq!(summary.records, 1);
        assert_eq!(summary.lines_read, 3);
        // Seed rows + record + placeholder + 3 relocated rows.
        assert_eq!(summary.rows_written, 7);
    }

    /// A record between two unmatched runs splits them into two blocks with
    /// strictly increasing indices.
    #[test]
    fn test_footnote_indices_increase_across_blocks() {
        let input = "first orphan\n\
                     [2024-01-01T10:02:03+00:00] event\n\
                     second orphan\n";
        let (out, summary) = run(input);
        assert_eq!(
            out,
            format!(
                "{SEED},,,,<<Footnote 1>>\n\
                 123,=A4-B2,,event,\n\
                 ,,,,<<Footnote 2>>\n\
                 ,,,,<<Footnote 1>>\n\
                 ,,,,first orphan\n\
                 ,,,,<<Footnote 2>>\n\
                 ,,,,second orphan\n"
            )
        );
        assert_eq!(summary.footnote_blocks, 2);
    }

    /// Footnote continuations consume no row number: the record after a
    /// multi-line block references the row right after the placeholder.
    #[test]
    fn test_continuation_lines_do_not_advance_row_counter() {
        let input = "orphan one\n\
                     orphan two\n\
                     orphan three\n\
                     [2024-01-01T00:05:00-08:00] resumed\n";
        let (out, _) = run(input);
        let lines: Vec<&str> = out.lines().collect();
        // Row 3 is the placeholder; the record is row 4 despite three
        // unmatched lines preceding it.
        assert_eq!(lines[2], ",,,,<<Footnote 1>>");
        assert_eq!(lines[3], "300,=A4-B2,,resumed,");
    }

    /// Cleaning feeds matching: a colour-coded, comma-bearing line still
    /// parses once the cascade has run.
    #[test]
    fn test_cleaning_applies_before_matching() {
        let input = " [2024-01-01 10:02:03.456789] \u{1b}[0mPump started, warning\u{1b}[0m\n";
        let (out, _) = run(input);
        assert_eq!(out, format!("{SEED}123.45,=A3-B2,,Pump started; warning,\n"));
    }
}
