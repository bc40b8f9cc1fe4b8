//! KeystreamGenerator: the Solitaire keystream state machine.
//!
//! Each draw runs one composite permutation of the deck and reads an output
//! card through the top card's value. When that lookup lands on a joker the
//! draw is repeated from the already-mutated deck; nothing is rolled back.

use tracing::trace;

use crate::card::{Card, Joker};
use crate::deck::Deck;

/// Outcome of a single attempt at drawing a keystream value.
enum Draw {
    Value(u8),
    JokerInOutput,
}

/// Keystream generator owning its deck for the whole session.
///
/// # Examples
///
/// ```
/// use pontifex::{Deck, KeystreamGenerator};
///
/// let mut keystream = KeystreamGenerator::new(Deck::unkeyed());
/// assert_eq!(keystream.next_value(), 4);
/// assert_eq!(keystream.next_value(), 49);
/// ```
#[derive(Debug, Clone)]
pub struct KeystreamGenerator {
    deck: Deck,
}

impl KeystreamGenerator {
    /// Takes exclusive ownership of `deck`.
    pub fn new(deck: Deck) -> Self {
        KeystreamGenerator { deck }
    }

    /// Current deck state.
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Mutable access for keying passes that interleave extra cuts.
    pub(crate) fn deck_mut(&mut self) -> &mut Deck {
        &mut self.deck
    }

    /// Releases the deck.
    pub fn into_deck(self) -> Deck {
        self.deck
    }

    /// Runs the composite permutation without producing output:
    /// JokerA down one, JokerB down two, triple cut, then a count cut by
    /// the bottom card's value.
    pub fn step(&mut self) {
        self.deck.move_joker_down(Joker::A, Joker::A.offset());
        self.deck.move_joker_down(Joker::B, Joker::B.offset());
        self.deck.triple_cut();
        let count = self.deck.bottom().value() as usize;
        self.deck.count_cut(count);
    }

    /// Counts down the top card's value and reads the card below.
    fn output_card(&self) -> Option<Card> {
        let top = self.deck.top().value() as usize;
        self.deck.card_at(top)
    }

    fn attempt(&mut self) -> Draw {
        self.step();
        match self.output_card() {
            Some(card) if !card.is_joker() => Draw::Value(card.value()),
            _ => Draw::JokerInOutput,
        }
    }

    /// Draws the next keystream value in `1..=52`.
    ///
    /// Callers reduce it modulo 26 when combining with a letter.
    pub fn next_value(&mut self) -> u8 {
        let mut attempt = 1u32;
        loop {
            match self.attempt() {
                Draw::Value(value) => return value,
                Draw::JokerInOutput => {
                    trace!(attempt, "joker in output position, repeating step");
                    attempt += 1;
                }
            }
        }
    }
}

impl Iterator for KeystreamGenerator {
    type Item = u8;

    /// Never returns `None`.
    fn next(&mut self) -> Option<u8> {
        Some(self.next_value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_ten_values_unkeyed() {
        let keystream = KeystreamGenerator::new(Deck::unkeyed());
        let values: Vec<u8> = keystream.take(10).collect();
        assert_eq!(values, [4, 49, 10, 24, 8, 51, 44, 6, 4, 33]);
    }

    #[test]
    fn test_first_step_unkeyed() {
        let mut keystream = KeystreamGenerator::new(Deck::unkeyed());
        keystream.step();
        let deck = keystream.deck();
        // JokerB wraps to second, the triple cut sends AC to the bottom,
        // and the count cut of 1 tucks JokerB above it.
        assert_eq!(deck.top().to_string(), "2C");
        assert_eq!(deck.bottom().to_string(), "AC");
        assert_eq!(deck.card_at(51), Some(Card::Joker(Joker::A)));
        assert_eq!(deck.card_at(52), Some(Card::Joker(Joker::B)));
    }

    #[test]
    fn test_joker_hit_repeats_step_without_rollback() {
        let mut keystream = KeystreamGenerator::new(Deck::unkeyed());
        for _ in 0..3 {
            keystream.next_value();
        }

        // The fourth draw lands on a joker once before yielding 24.
        let mut manual = keystream.clone();
        manual.step();
        assert!(manual.output_card().is_some_and(|c| c.is_joker()));
        manual.step();
        assert_eq!(manual.output_card().map(|c| c.value()), Some(24));

        assert_eq!(keystream.next_value(), 24);
        assert_eq!(keystream.deck(), manual.deck());
    }

    #[test]
    fn test_values_stay_in_range() {
        let keystream = KeystreamGenerator::new(Deck::unkeyed());
        for value in keystream.take(1000) {
            assert!((1..=52).contains(&value), "value {} out of range", value);
        }
    }

    #[test]
    fn test_into_deck_returns_mutated_state() {
        let mut keystream = KeystreamGenerator::new(Deck::unkeyed());
        keystream.next_value();
        let deck = keystream.into_deck();
        assert_ne!(deck, Deck::unkeyed());
        assert_eq!(deck.len(), 54);
    }
}
