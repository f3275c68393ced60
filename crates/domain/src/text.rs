//! Text formatting helpers for provider free text

/// Capitalize the first letter of every space-separated word
///
/// Words are split on single spaces so repeated spaces survive the round
/// trip; only the first character of each word changes.
///
/// ```
/// use domain::capitalize_words;
///
/// assert_eq!(capitalize_words("light rain"), "Light Rain");
/// assert_eq!(capitalize_words(""), "");
/// ```
#[must_use]
pub fn capitalize_words(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    text.split(' ')
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
