//! Line classification for the splitter.
//!
//! Classification is a pure function of the current fence state and one
//! raw line; the caller carries the fence state and updates it on every
//! [`LineClass::FenceToggle`].

use std::sync::LazyLock;

use regex::Regex;

use crate::config::MAX_HEADER_LEVEL;

/// Header pattern: leading `#` run, at least one whitespace, then text.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static HEADER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#+)\s+(.+)$").expect("valid regex"));

/// Classification of a single raw line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// Opening or closing delimiter of a fenced code block.
    FenceToggle,

    /// A structural header at `level` 1-5 with its trimmed text.
    Header { level: u8, text: &'a str },

    /// Anything else, including blank lines and header-like syntax
    /// inside fenced code.
    Body(&'a str),
}

/// Classify one line given the current fence state.
///
/// While `inside_code_block` is true every non-fence line is body text,
/// so `#` inside fenced code never becomes structural. Header runs of
/// more than [`MAX_HEADER_LEVEL`] markers, `#` without a following
/// space, and `#` without text all degrade to body text rather than
/// failing.
#[must_use]
pub fn classify(inside_code_block: bool, line: &str) -> LineClass<'_> {
    let stripped = line.trim_start();
    if stripped.starts_with("```") || stripped.starts_with("~~~") {
        return LineClass::FenceToggle;
    }

    if inside_code_block {
        return LineClass::Body(line);
    }

    if let Some(caps) = HEADER_PATTERN.captures(line) {
        let marks = caps[1].len();
        if marks <= MAX_HEADER_LEVEL {
            if let Some(text) = caps.get(2) {
                let text = text.as_str().trim();
                if !text.is_empty() {
                    #[allow(clippy::cast_possible_truncation)] // marks <= 5
                    return LineClass::Header {
                        level: marks as u8,
                        text,
                    };
                }
            }
        }
    }

    LineClass::Body(line)
}
