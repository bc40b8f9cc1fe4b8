//! Fixed bijection between the letters A-Z and the numbers 1-26.

use crate::error::SolitaireError;

/// Letters indexed by `number - 1`.
const LETTERS: [char; 26] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Maps a letter (either case) to its number, `A = 1` through `Z = 26`.
///
/// # Errors
/// Returns [`SolitaireError::InvalidLetter`] for anything outside A-Z.
pub fn letter_to_number(letter: char) -> Result<u8, SolitaireError> {
    let upper = letter.to_ascii_uppercase();
    LETTERS
        .iter()
        .position(|&l| l == upper)
        .map(|index| index as u8 + 1)
        .ok_or(SolitaireError::InvalidLetter(letter))
}

/// Maps a number in `1..=26` back to its letter.
///
/// # Errors
/// Returns [`SolitaireError::InvalidNumber`] for anything outside 1..=26.
pub fn number_to_letter(number: u8) -> Result<char, SolitaireError> {
    match number {
        1..=26 => Ok(LETTERS[number as usize - 1]),
        _ => Err(SolitaireError::InvalidNumber(number)),
    }
}
