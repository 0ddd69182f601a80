//! Literal-ellipsis check: period sequences that should have been converted
//! to the single ellipsis glyph.

/// Doubled periods, most often a typo.
const TWO_PERIODS: &str = "..";
/// A literal three-period ellipsis.
const UNPADDED: &str = "...";
/// A space-padded three-period ellipsis.
const PADDED: &str = ". . .";

/// Return the sorted, de-duplicated 1-based numbers of lines containing any
/// un-converted period sequence.
pub fn check_periods(lines: &[String]) -> Vec<usize> {
    lines
        .iter()
        .enumerate()
        .filter(|(_, line)| {
            line.contains(TWO_PERIODS) || line.contains(UNPADDED) || line.contains(PADDED)
        })
        .map(|(index, _)| index + 1)
        .collect()
}
