//! Text normalization for transaction descriptions.

/// Normalize a raw transaction description into its canonical form.
///
/// Lowercases the input, drops every character that is not a lowercase
/// ASCII letter or whitespace, collapses whitespace runs to a single
/// space, and trims the ends. Digits and punctuation ("Bought milk for
/// 40!", "Rice!!!") carry no category signal in this corpus and are
/// removed entirely.
///
/// The function is pure and idempotent after the first pass:
/// `normalize(normalize(s)) == normalize(s)` for any input.
///
/// # Examples
///
/// ```
/// use drachma::analysis::normalize;
///
/// assert_eq!(normalize("Bought Rice!!!"), "bought rice");
/// assert_eq!(normalize("  Paid   shop rent "), "paid shop rent");
/// assert_eq!(normalize(""), "");
/// ```
pub fn normalize(text: &str) -> String {
    let filtered: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_whitespace())
        .collect();

    filtered.split_whitespace().collect::<Vec<_>>().join(" ")
}
