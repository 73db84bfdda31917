// tabulog - core/model.rs
//
// Core data model types. Pure data definitions with no I/O.
// These types are the shared vocabulary across the transform pass.

/// A single timestamped log event, normalised from either recognised
/// timestamp shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Seconds within the hour: minutes*60 + seconds, plus the truncated
    /// two-digit fraction when the source shape carried one.
    pub time_seconds: f64,

    /// Whether the line opened with a bracketed ERROR tag.
    pub error: bool,

    /// Remaining text after the timestamp, post-cleaning.
    pub body: String,
}

/// A maximal run of consecutive lines that matched neither timestamp shape.
///
/// Blocks are numbered 1-based in discovery order and relocated to the end
/// of the output; a marker row is left in the main body where the block
/// began.
#[derive(Debug, Clone, PartialEq)]
pub struct FootnoteBlock {
    /// 1-based sequence index, monotonically increasing, never reused.
    pub index: usize,

    /// Constituent lines, post-cleaning, in source order.
    pub lines: Vec<String>,
}

impl FootnoteBlock {
    /// Open a new block seeded with its first unmatched line.
    pub fn open(index: usize, first_line: String) -> Self {
        Self {
            index,
            lines: vec![first_line],
        }
    }

    /// Back-reference text written both in the main body and as the first
    /// notes row of the relocated block.
    pub fn marker(&self) -> String {
        format!("<<Footnote {}>>", self.index)
    }
}

/// Where the per-line step currently is: emitting main-body rows, or
/// accumulating lines into an open footnote block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PassState {
    /// The previous line was a timestamped record (or nothing yet).
    #[default]
    InBody,

    /// The previous line went into the currently open footnote block.
    InFootnote,
}

/// Counters for a completed transform pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransformSummary {
    /// Input lines consumed.
    pub lines_read: u64,

    /// Lines that matched a timestamp shape.
    pub records: u64,

    /// Footnote blocks opened.
    pub footnote_blocks: u64,

    /// Output rows written, seed rows included.
    pub rows_written: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_footnote_marker_text() {
        let block = FootnoteBlock::open(3, "stack trace line".to_string());
        assert_eq!(block.marker(), "<<Footnote 3>>");
        assert_eq!(block.lines, vec!["stack trace line".to_string()]);
    }

    #[test]
    fn test_pass_state_starts_in_body() {
        assert_eq!(PassState::default(), PassState::InBody);
    }
}
