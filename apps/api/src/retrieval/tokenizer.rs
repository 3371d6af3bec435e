/// Tokens shorter than this are dropped ("a", "I", single digits).
const MIN_TOKEN_CHARS: usize = 2;

/// Splits text into lowercase word tokens.
///
/// A token is a maximal run of alphanumeric characters or `_`, kept only when it is
/// at least two characters long. Order and duplicates are preserved; term counting
/// happens in the vectorizer.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|token| token.chars().count() >= MIN_TOKEN_CHARS)
        .map(str::to_lowercase)
        .collect()
}
