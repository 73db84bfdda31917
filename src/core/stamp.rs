// tabulog - core/stamp.rs
//
// Recognition of the two timestamp shapes the source logs mix together,
// and conversion of a matched prefix into seconds-within-the-hour.
//
// Shapes are tried in order and are mutually exclusive; a line that matches
// neither is not a timestamped record (the transform turns it into a
// footnote line instead).

use regex::Regex;
use std::sync::OnceLock;

/// A matched timestamp prefix: the computed time value plus the remainder
/// of the line.
#[derive(Debug, Clone, PartialEq)]
pub struct Stamp {
    /// minutes*60 + seconds, plus hundredths when the shape carried a
    /// sub-second group.
    pub time_seconds: f64,

    /// Text after the closing bracket and separating space.
    pub body: String,
}

struct Shapes {
    /// Shape 1: ` [YYYY-MM-DD HH:MM:SS.ffffff]` with a 6- or 9-digit
    /// fraction, preceded by exactly one whitespace character.
    /// 1: date | 2: hour | 3: minute | 4: second | 5: fraction | 6: body
    shape1: Regex,

    /// Shape 2: `[YYYY-MM-DDTHH:MM:SS±HH:MM]` with a UTC offset that is
    /// matched but discarded.
    /// 1: date | 2: hour | 3: minute | 4: second | 5: body
    shape2: Regex,
}

static SHAPES: OnceLock<Shapes> = OnceLock::new();

fn shapes() -> &'static Shapes {
    SHAPES.get_or_init(|| {
        fn re(pat: &str) -> Regex {
            Regex::new(pat).expect("stamp shapes: invalid regex")
        }
        Shapes {
            shape1: re(r"^\s\[(\d{4}-\d{2}-\d{2})\s(\d{2}):(\d{2}):(\d{2})\.(\d{6}|\d{9})\]\s(.*)"),
            shape2: re(r"^\[(\d{4}-\d{2}-\d{2})T(\d{2}):(\d{2}):(\d{2})[+-]\d{2}:\d{2}\]\s(.*)"),
        }
    })
}

/// Match a cleaned line's prefix against the two timestamp shapes.
///
/// Shape 1 is tried first; if it matches, Shape 2 is never consulted.
/// Returns `None` when the line is not a timestamped record.
pub fn match_line(line: &str) -> Option<Stamp> {
    let s = shapes();

    if let Some(caps) = s.shape1.captures(line) {
        let minutes: f64 = caps.get(3)?.as_str().parse().ok()?;
        let seconds: f64 = caps.get(4)?.as_str().parse().ok()?;
        // Only the first two fraction digits count, as hundredths,
        // truncated. A 6-digit and a 9-digit group are handled identically.
        let hundredths: f64 = caps.get(5)?.as_str()[..2].parse().ok()?;
        return Some(Stamp {
            time_seconds: minutes * 60.0 + seconds + hundredths / 100.0,
            body: caps.get(6)?.as_str().to_string(),
        });
    }

    if let Some(caps) = s.shape2.captures(line) {
        let minutes: f64 = caps.get(3)?.as_str().parse().ok()?;
        let seconds: f64 = caps.get(4)?.as_str().parse().ok()?;
        return Some(Stamp {
            time_seconds: minutes * 60.0 + seconds,
            body: caps.get(5)?.as_str().to_string(),
        });
    }

    None
}
