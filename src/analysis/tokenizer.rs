//! Whitespace tokenization of normalized text.

/// Split normalized text into tokens on whitespace.
///
/// Expects input that already went through
/// [`normalize`](crate::analysis::normalize); tokens are returned in
/// document order.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace().map(|word| word.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize() {
        let tokens = tokenize("bought milk for");
        assert_eq!(tokens, vec!["bought", "milk", "for"]);
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ").is_empty());
    }
}
