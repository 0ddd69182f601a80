//! Contextual verification of typographic punctuation.
//!
//! This is the core of the tool: per-character rules that classify whether a
//! given occurrence of a typographic character is plausibly correct, based
//! only on the characters immediately surrounding it. The rules are
//! heuristics tuned for prose manuscripts; they flag for human review, they
//! do not prove misuse.
//!
//! Rule dispatch goes through [`PunctKind`] so the rule set is closed and
//! total: [`verify`] answers for exactly the seven kinds and signals
//! [`GalleyError::UnsupportedCharacter`] for anything else.

use crate::error::{GalleyError, Result};

/// En dash, `–`.
pub const EN_DASH: char = '\u{2013}';
/// Em dash, `—`.
pub const EM_DASH: char = '\u{2014}';
/// Left single quotation mark, `‘`.
pub const LEFT_SINGLE_QUOTE: char = '\u{2018}';
/// Right single quotation mark, `’`.
pub const RIGHT_SINGLE_QUOTE: char = '\u{2019}';
/// Left double quotation mark, `“`.
pub const LEFT_DOUBLE_QUOTE: char = '\u{201C}';
/// Right double quotation mark, `”`.
pub const RIGHT_DOUBLE_QUOTE: char = '\u{201D}';
/// Horizontal ellipsis, `…`.
pub const ELLIPSIS: char = '\u{2026}';

/// Sentence punctuation that may legitimately precede a closing quote.
const PUNCTUATION: [char; 6] = ['.', ',', '?', '!', EM_DASH, ELLIPSIS];

/// The seven typographic characters with a defined verification rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctKind {
    EnDash,
    EmDash,
    LeftSingleQuote,
    RightSingleQuote,
    LeftDoubleQuote,
    RightDoubleQuote,
    Ellipsis,
}

impl PunctKind {
    /// Map a character to its rule kind, if one is defined.
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            EN_DASH => Some(PunctKind::EnDash),
            EM_DASH => Some(PunctKind::EmDash),
            LEFT_SINGLE_QUOTE => Some(PunctKind::LeftSingleQuote),
            RIGHT_SINGLE_QUOTE => Some(PunctKind::RightSingleQuote),
            LEFT_DOUBLE_QUOTE => Some(PunctKind::LeftDoubleQuote),
            RIGHT_DOUBLE_QUOTE => Some(PunctKind::RightDoubleQuote),
            ELLIPSIS => Some(PunctKind::Ellipsis),
            _ => None,
        }
    }

    /// The character this kind verifies.
    pub fn as_char(&self) -> char {
        match self {
            PunctKind::EnDash => EN_DASH,
            PunctKind::EmDash => EM_DASH,
            PunctKind::LeftSingleQuote => LEFT_SINGLE_QUOTE,
            PunctKind::RightSingleQuote => RIGHT_SINGLE_QUOTE,
            PunctKind::LeftDoubleQuote => LEFT_DOUBLE_QUOTE,
            PunctKind::RightDoubleQuote => RIGHT_DOUBLE_QUOTE,
            PunctKind::Ellipsis => ELLIPSIS,
        }
    }
}

/// Decide whether `character` is plausibly correct between `left_context`
/// and `right_context`.
///
/// Defined only for the seven [`PunctKind`] characters; any other input is
/// an [`GalleyError::UnsupportedCharacter`]. The caller must treat that as
/// "cannot verify, flag for human review" rather than aborting.
pub fn verify(character: char, left_context: &str, right_context: &str) -> Result<bool> {
    let kind = PunctKind::from_char(character)
        .ok_or(GalleyError::UnsupportedCharacter(character))?;

    Ok(match kind {
        PunctKind::Ellipsis => verify_ellipsis(left_context, right_context),
        PunctKind::EmDash => verify_em_dash(left_context, right_context),
        PunctKind::EnDash => verify_en_dash(left_context, right_context),
        PunctKind::LeftSingleQuote | PunctKind::LeftDoubleQuote => {
            verify_left_quote(left_context, right_context)
        }
        PunctKind::RightSingleQuote => verify_right_single_quote(left_context, right_context),
        PunctKind::RightDoubleQuote => verify_right_double_quote(left_context, right_context),
    })
}

fn is_punctuation(ch: char) -> bool {
    PUNCTUATION.contains(&ch)
}

/// Last two chars of the left context, space-padded at line start.
/// Returned as (second-to-last, last), i.e. (two back, adjacent).
fn left_window(left_context: &str) -> (char, char) {
    let mut iter = left_context.chars().rev();
    let adjacent = iter.next().unwrap_or(' ');
    let two_back = iter.next().unwrap_or(' ');
    (two_back, adjacent)
}

/// First two chars of the right context, space-padded at line end.
/// Returned as (adjacent, two ahead).
fn right_window(right_context: &str) -> (char, char) {
    let mut iter = right_context.chars();
    let adjacent = iter.next().unwrap_or(' ');
    let two_ahead = iter.next().unwrap_or(' ');
    (adjacent, two_ahead)
}

/// Ellipsis is accepted when enclosed in a literal bracket pair, at a word
/// boundary on both sides, or against a quotation mark with a word boundary
/// on the other side.
fn verify_ellipsis(left_context: &str, right_context: &str) -> bool {
    let (l2, l1) = left_window(left_context);
    let (r1, r2) = right_window(right_context);

    (l1 == '[' && r1 == ']')
        || (l2.is_alphabetic() && l1.is_whitespace() && r1.is_whitespace() && r2.is_alphabetic())
        || (l2.is_alphabetic()
            && l1.is_whitespace()
            && (r1 == RIGHT_DOUBLE_QUOTE || r1 == RIGHT_SINGLE_QUOTE))
        || ((l1 == LEFT_DOUBLE_QUOTE || l1 == LEFT_SINGLE_QUOTE)
            && r1.is_whitespace()
            && r2.is_alphabetic())
}

/// Em dash must join two letters directly. An em dash at a line boundary has
/// nothing to join and is unverified.
fn verify_em_dash(left_context: &str, right_context: &str) -> bool {
    match (left_context.chars().next_back(), right_context.chars().next()) {
        (Some(l), Some(r)) => l.is_alphabetic() && r.is_alphabetic(),
        _ => false,
    }
}

/// En dash joins two words either directly or across single spaces.
/// Range usage ("pages 10–20") is knowingly not modeled by this rule.
fn verify_en_dash(left_context: &str, right_context: &str) -> bool {
    let (l2, l1) = left_window(left_context);
    let (r1, r2) = right_window(right_context);

    (l1.is_alphabetic() && r1.is_alphabetic())
        || (l2.is_alphabetic() && l1.is_whitespace() && r1.is_whitespace() && r2.is_alphabetic())
}

/// Opening quotes want whitespace before and a letter after; at line start
/// the whitespace requirement is waived.
fn verify_left_quote(left_context: &str, right_context: &str) -> bool {
    match (left_context.chars().next_back(), right_context.chars().next()) {
        (Some(l), Some(r)) => l.is_whitespace() && r.is_alphabetic(),
        (None, Some(r)) => r.is_alphabetic(),
        (_, None) => false,
    }
}

/// Closing single quote: letter or sentence punctuation before and
/// whitespace after, or letters on both sides (contraction apostrophe).
fn verify_right_single_quote(left_context: &str, right_context: &str) -> bool {
    match (left_context.chars().next_back(), right_context.chars().next()) {
        (Some(l), Some(r)) => {
            ((l.is_alphabetic() || is_punctuation(l)) && r.is_whitespace())
                || (l.is_alphabetic() && r.is_alphabetic())
        }
        (Some(l), None) => l.is_alphabetic() || is_punctuation(l),
        (None, _) => false,
    }
}

/// Closing double quote: letter or sentence punctuation before, whitespace
/// after (or line end).
fn verify_right_double_quote(left_context: &str, right_context: &str) -> bool {
    match (left_context.chars().next_back(), right_context.chars().next()) {
        (Some(l), Some(r)) => (l.is_alphabetic() || is_punctuation(l)) && r.is_whitespace(),
        (Some(l), None) => l.is_alphabetic() || is_punctuation(l),
        (None, _) => false,
    }
}
