// tabulog - core/clean.rs
//
// Text-cleaning cascade applied to every raw line before timestamp matching,
// plus detection of the leading [ERROR] severity tag.
//
// The cascade runs in a fixed order; several steps exist to undo terminal
// colouring and severity labels that the source logger interleaves with the
// timestamps. Order matters: commas are swapped for semicolons before any
// pattern removal so the output columns can never be split by log content.

use regex::Regex;
use std::sync::OnceLock;

/// A raw line after the cleaning cascade, with the error flag captured
/// before the leading ERROR tag was stripped.
#[derive(Debug, Clone, PartialEq)]
pub struct CleanedLine {
    pub text: String,
    pub error: bool,
}

/// Compiled patterns for the cascade, built once on first use.
struct Cascade {
    /// Residual bracketed ANSI colour code, e.g. `[0m` or `[1;31m`.
    ///
    /// The ESC byte itself is deleted in an earlier step, so this pattern
    /// deliberately matches the escape-less remainder. Keep it that way:
    /// stripping `\x1b` first and then the bare bracketed code is the
    /// documented behaviour of the cascade.
    meta: Regex,

    /// Bracketed INFO tag with optional internal whitespace.
    info_tag: Regex,

    /// Bracketed WARN tag with optional internal whitespace.
    warn_tag: Regex,

    /// Bracketed ERROR tag anchored at the start of the line. Only a
    /// leading tag sets the error flag; a mid-line `[ERROR]` is left alone.
    error_tag: Regex,
}

static CASCADE: OnceLock<Cascade> = OnceLock::new();

fn cascade() -> &'static Cascade {
    CASCADE.get_or_init(|| {
        // Pattern validity is covered by the unit tests below, so a mistake
        // here shows up as a failing test rather than a runtime panic.
        fn re(pat: &str) -> Regex {
            Regex::new(pat).expect("clean cascade: invalid regex")
        }
        Cascade {
            meta: re(r"\[[0-9;]*m"),
            info_tag: re(r"\[\s*INFO\s*\]"),
            warn_tag: re(r"\[\s*WARN\s*\]"),
            error_tag: re(r"^\[\s*ERROR\s*\]"),
        }
    })
}

/// Run the full cascade over one raw line.
///
/// Steps, in order:
///   1. delete every ESC control byte (0x1B);
///   2. replace every literal comma with a semicolon;
///   3. delete residual bracketed ANSI colour codes;
///   4. delete bracketed INFO tags;
///   5. delete any remaining literal `INFO`;
///   6. delete bracketed WARN tags;
///   7. if the line now starts with a bracketed ERROR tag, set the error
///      flag and strip that tag.
pub fn clean(raw: &str) -> CleanedLine {
    let c = cascade();

    let mut text = raw.replace('\u{1b}', "");
    text = text.replace(',', ";");
    text = c.meta.replace_all(&text, "").into_owned();
    text = c.info_tag.replace_all(&text, "").into_owned();
    text = text.replace("INFO", "");
    text = c.warn_tag.replace_all(&text, "").into_owned();

    let error = c.error_tag.is_match(&text);
    if error {
        text = c.error_tag.replace(&text, "").into_owned();
    }

    CleanedLine { text, error }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_bytes_removed() {
        let cleaned = clean("\u{1b}[0mpump online\u{1b}");
        assert_eq!(cleaned.text, "pump online");
        assert!(!cleaned.error);
    }

    #[test]
    fn test_commas_become_semicolons() {
        let cleaned = clean("valve open, pressure nominal, temp 40C");
        assert_eq!(cleaned.text, "valve open; pressure nominal; temp 40C");
    }

    /// The colour-code pattern matches even without a leading ESC byte,
    /// because the ESC was already deleted by the time the pattern runs.
    #[test]
    fn test_bare_colour_code_removed() {
        let cleaned = clean("before [1;31m after [0m end");
        assert_eq!(cleaned.text, "before  after  end");
    }

    #[test]
    fn test_info_tag_and_word_removed() {
        assert_eq!(clean("[INFO] startup").text, " startup");
        assert_eq!(clean("[ INFO ] startup").text, " startup");
        // The plain-word pass also fires inside larger words.
        assert_eq!(clean("INFORMATIVE note").text, "RMATIVE note");
    }

    #[test]
    fn test_warn_tag_removed() {
        assert_eq!(clean("[WARN] pressure high").text, " pressure high");
        assert_eq!(clean("[ WARN ] pressure high").text, " pressure high");
    }

    #[test]
    fn test_leading_error_tag_sets_flag_and_is_stripped() {
        let cleaned = clean("[ERROR] coolant loss");
        assert!(cleaned.error);
        assert_eq!(cleaned.text, " coolant loss");

        let spaced = clean("[ ERROR ] coolant loss");
        assert!(spaced.error);
        assert_eq!(spaced.text, " coolant loss");
    }

    /// A mid-line ERROR tag neither sets the flag nor is removed.
    #[test]
    fn test_mid_line_error_tag_ignored() {
        let cleaned = clean("pump said [ERROR] once");
        assert!(!cleaned.error);
        assert_eq!(cleaned.text, "pump said [ERROR] once");
    }

    /// Worked example from the tool's documentation: comma swap happens
    /// inside the body text of a timestamped line too.
    #[test]
    fn test_cleaning_preserves_timestamp_prefix() {
        let cleaned = clean(" [2024-01-01 10:02:03.123456789] Pump started, warning");
        assert_eq!(
            cleaned.text,
            " [2024-01-01 10:02:03.123456789] Pump started; warning"
        );
        assert!(!cleaned.error);
    }
}
