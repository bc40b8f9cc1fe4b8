//! Text normalization and five-letter block display.

/// Letters per display block.
pub const BLOCK_LEN: usize = 5;

/// Filler appended to a short final block.
pub const FILLER: char = 'X';

/// Uppercases `text` and strips all whitespace. No validation is done.
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Normalizes `text`, splits it into groups of five and fills the last
/// group with `X`. Groups are separated by single spaces; empty input
/// gives an empty string.
///
/// # Examples
///
/// ```
/// use pontifex::utils::text::block_format;
///
/// assert_eq!(block_format("DRINKYOUROVALTINE"), "DRINK YOURO VALTI NEXXX");
/// assert_eq!(block_format(""), "");
/// ```
pub fn block_format(text: &str) -> String {
    let mut letters: Vec<char> = normalize(text).chars().collect();
    let short = letters.len() % BLOCK_LEN;
    if short != 0 {
        letters.resize(letters.len() + BLOCK_LEN - short, FILLER);
    }
    letters
        .chunks(BLOCK_LEN)
        .map(|block| block.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}
