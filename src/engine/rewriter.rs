#![forbid(unsafe_code)]

//! Colour rewriting over a block of text
//!
//! The rewriter makes a single forward pass over the input: spans that do not
//! match the colour search pattern are copied verbatim, each match span is
//! replaced by its classified result, and the scan resumes after the
//! replacement. Inserted replacements are never rescanned, so a replacement
//! that itself looks like a colour cannot be picked up again.

use crate::color::Direction;
use crate::color::grayscale;
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Search pattern: `#` plus six hex digits
///
/// Channel equality is deliberately not part of the search. Hex-shaped
/// substrings like `#1a2b3c` are matched here and rejected during
/// classification, consuming one match without altering the text.
static COLOR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("#[0-9a-fA-F]{6}").expect("colour search pattern is valid"));

/// Outcome of classifying one matched literal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorDecision {
    /// Grayscale and selected by the direction; replaced by the inverted form
    Inverted { from: String, to: String },
    /// Grayscale, but excluded by the direction policy
    Ignored { literal: String },
    /// Hex-shaped but not grayscale; passed through byte-for-byte
    NonColor { literal: String },
}

impl ColorDecision {
    /// The text that replaces the matched span (the original literal unless
    /// the decision is an inversion)
    pub fn replacement(&self) -> &str {
        match self {
            ColorDecision::Inverted { to, .. } => to,
            ColorDecision::Ignored { literal } | ColorDecision::NonColor { literal } => literal,
        }
    }

    /// The literal as it appeared in the input
    pub fn original(&self) -> &str {
        match self {
            ColorDecision::Inverted { from, .. } => from,
            ColorDecision::Ignored { literal } | ColorDecision::NonColor { literal } => literal,
        }
    }

    /// Whether this decision changes the text
    pub fn changed(&self) -> bool {
        matches!(self, ColorDecision::Inverted { .. })
    }
}

/// Result of rewriting one block of text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteOutcome {
    /// The rewritten text
    pub text: String,
    /// One decision per distinct matched literal, in first-occurrence order
    pub decisions: Vec<ColorDecision>,
}

impl RewriteOutcome {
    /// Whether any literal was actually inverted
    pub fn changed(&self) -> bool {
        self.decisions.iter().any(ColorDecision::changed)
    }
}

/// Rewrites grayscale colour literals in text under a fixed direction
#[derive(Debug, Clone, Copy)]
pub struct Rewriter {
    direction: Direction,
}

impl Rewriter {
    /// Creates a rewriter for the given direction
    pub fn new(direction: Direction) -> Self {
        Rewriter { direction }
    }

    /// Classifies a single literal without touching any surrounding text
    pub fn classify(&self, literal: &str) -> ColorDecision {
        match grayscale::parse(literal) {
            Some(gray) if self.direction.should_invert(gray) => ColorDecision::Inverted {
                from: literal.to_string(),
                to: grayscale::format(grayscale::invert(gray)),
            },
            Some(_) => ColorDecision::Ignored {
                literal: literal.to_string(),
            },
            None => ColorDecision::NonColor {
                literal: literal.to_string(),
            },
        }
    }

    /// Rewrites every colour literal in `text`
    ///
    /// Every distinct matched substring is classified exactly once, even when
    /// it occurs multiple times; all of its occurrences receive the same
    /// replacement. Distinctness is on the exact matched text, so `#AAAAAA`
    /// and `#aaaaaa` are classified separately.
    pub fn rewrite(&self, text: &str) -> RewriteOutcome {
        let mut out = String::with_capacity(text.len());
        let mut decisions: Vec<ColorDecision> = Vec::new();
        let mut seen: HashMap<&str, usize> = HashMap::new();
        let mut cursor = 0;

        for m in COLOR_PATTERN.find_iter(text) {
            out.push_str(&text[cursor..m.start()]);

            let index = *seen.entry(m.as_str()).or_insert_with(|| {
                decisions.push(self.classify(m.as_str()));
                decisions.len() - 1
            });
            out.push_str(decisions[index].replacement());

            cursor = m.end();
        }
        out.push_str(&text[cursor..]);

        RewriteOutcome {
            text: out,
            decisions,
        }
    }
}
