//! Bounded string excerpts for error messages.

/// Marker substituted for elided content.
const ELLIPSIS: &str = "...";

/// Don't bother eliding when fewer than this many chars would be dropped.
const EDGE_THRESHOLD: usize = 3;

/// Produce an excerpt of `text` covering the char range `[from, to)`,
/// replacing elided leading/trailing content with `...`.
///
/// When `from` is within [`EDGE_THRESHOLD`] chars of the start, the excerpt
/// begins at the start with no leading marker; symmetrically for `to` and
/// the end. Indices are char positions, not byte offsets.
///
/// Callers must ensure `from <= to <= text.chars().count()`; the function
/// does not defend against out-of-range indices.
pub fn ellipsize(from: usize, to: usize, text: &str) -> String {
    let len = text.chars().count();

    let (start, head) = if from <= EDGE_THRESHOLD {
        (0, "")
    } else {
        (from, ELLIPSIS)
    };
    let (end, tail) = if to + EDGE_THRESHOLD >= len {
        (len, "")
    } else {
        (to, ELLIPSIS)
    };

    let middle: String = text.chars().skip(start).take(end - start).collect();
    format!("{head}{middle}{tail}")
}
