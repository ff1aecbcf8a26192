//! GitHub emoji shortcode substitution.

/// Shortcodes and their Unicode replacements, applied in this order.
///
/// No shortcode occurs inside another, so the order only matters for
/// determinism.
const SHORTCODES: &[(&str, &str)] = &[
    (":thumbsup:", "\u{1f44d}"),
    (":+1:", "\u{1f44d}"),
    (":thumbsdown:", "\u{1f44e}"),
    (":-1:", "\u{1f44e}"),
    (":heart:", "\u{2764}\u{fe0f}"),
    (":smile:", "\u{1f604}"),
    (":laugh:", "\u{1f604}"),
    (":tada:", "\u{1f389}"),
    (":hooray:", "\u{1f389}"),
    (":confused:", "\u{1f615}"),
    (":rocket:", "\u{1f680}"),
    (":eyes:", "\u{1f440}"),
];

/// Replaces every known shortcode in `text` with its emoji.
///
/// This is plain substring replacement; unknown shortcodes are left as-is.
///
/// # Examples
///
/// ```
/// use issue2md::export::replace_shortcodes;
///
/// assert_eq!(
///     replace_shortcodes("Thanks :thumbsup: for this :heart:"),
///     "Thanks \u{1f44d} for this \u{2764}\u{fe0f}"
/// );
/// ```
#[must_use]
pub fn replace_shortcodes(text: &str) -> String {
    SHORTCODES
        .iter()
        .fold(text.to_owned(), |acc, (shortcode, emoji)| {
            if acc.contains(shortcode) {
                acc.replace(shortcode, emoji)
            } else {
                acc
            }
        })
}
