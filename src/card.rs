//! Card universe of the Solitaire deck.
//!
//! The deck holds the 52 standard cards plus two distinguishable jokers.
//! Every card has a fixed numeric value used by the keystream algorithm:
//! standard cards count in bridge order (Clubs 1-13, Diamonds 14-26,
//! Hearts 27-39, Spades 40-52) and both jokers count as 53.

use std::fmt;
use std::str::FromStr;

use crate::error::SolitaireError;

/// Number of cards in a complete Solitaire deck.
pub const DECK_SIZE: usize = 54;

/// Value shared by both jokers.
pub const JOKER_VALUE: u8 = 53;

/// Card suits in bridge order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    /// All suits in bridge order.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Amount added to the rank value of a card of this suit.
    pub const fn offset(self) -> u8 {
        match self {
            Suit::Clubs => 0,
            Suit::Diamonds => 13,
            Suit::Hearts => 26,
            Suit::Spades => 39,
        }
    }

    const fn letter(self) -> char {
        match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        }
    }

    fn from_letter(letter: char) -> Option<Suit> {
        match letter.to_ascii_uppercase() {
            'C' => Some(Suit::Clubs),
            'D' => Some(Suit::Diamonds),
            'H' => Some(Suit::Hearts),
            'S' => Some(Suit::Spades),
            _ => None,
        }
    }
}

/// Card ranks, Ace low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    /// All ranks from Ace to King.
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Face value of the rank, 1 (Ace) through 13 (King).
    pub const fn value(self) -> u8 {
        self as u8 + 1
    }

    const fn name(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }

    fn from_name(name: &str) -> Option<Rank> {
        Rank::ALL
            .into_iter()
            .find(|rank| rank.name().eq_ignore_ascii_case(name))
    }
}

/// The two jokers. They share a value but move by different offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Joker {
    A,
    B,
}

impl Joker {
    /// How many places the joker moves down in one keystream step.
    pub const fn offset(self) -> usize {
        match self {
            Joker::A => 1,
            Joker::B => 2,
        }
    }
}

/// One of the 54 cards of a Solitaire deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Card {
    Standard { rank: Rank, suit: Suit },
    Joker(Joker),
}

impl Card {
    /// Builds a standard card.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Card::Standard { rank, suit }
    }

    /// Numeric value of the card: 1..=52 for standard cards, 53 for jokers.
    pub const fn value(self) -> u8 {
        match self {
            Card::Standard { rank, suit } => rank.value() + suit.offset(),
            Card::Joker(_) => JOKER_VALUE,
        }
    }

    /// Returns `true` for either joker.
    pub const fn is_joker(self) -> bool {
        matches!(self, Card::Joker(_))
    }

    /// The identity ordering: suits in bridge order, Ace to King within
    /// each suit, then JokerA and JokerB.
    pub fn unkeyed() -> [Card; DECK_SIZE] {
        let mut cards = [Card::Joker(Joker::A); DECK_SIZE];
        let standard = Suit::ALL
            .into_iter()
            .flat_map(|suit| Rank::ALL.into_iter().map(move |rank| Card::new(rank, suit)));
        for (slot, card) in cards.iter_mut().zip(standard) {
            *slot = card;
        }
        cards[DECK_SIZE - 1] = Card::Joker(Joker::B);
        cards
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Card::Standard { rank, suit } => write!(f, "{}{}", rank.name(), suit.letter()),
            Card::Joker(Joker::A) => write!(f, "JokerA"),
            Card::Joker(Joker::B) => write!(f, "JokerB"),
        }
    }
}

impl FromStr for Card {
    type Err = SolitaireError;

    /// Parses names such as `AC`, `10D`, `qs`, `JokerA`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SolitaireError::InvalidCard(s.to_string());
        if s.eq_ignore_ascii_case("JokerA") {
            return Ok(Card::Joker(Joker::A));
        }
        if s.eq_ignore_ascii_case("JokerB") {
            return Ok(Card::Joker(Joker::B));
        }
        let mut chars = s.chars();
        let suit = chars.next_back().and_then(Suit::from_letter).ok_or_else(invalid)?;
        let rank = Rank::from_name(chars.as_str()).ok_or_else(invalid)?;
        Ok(Card::new(rank, suit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn card(name: &str) -> Card {
        name.parse().unwrap()
    }

    #[test]
    fn test_card_values() {
        assert_eq!(card("AC").value(), 1);
        assert_eq!(card("2D").value(), 2 + 13);
        assert_eq!(card("3H").value(), 3 + 26);
        assert_eq!(card("4S").value(), 4 + 39);
        assert_eq!(card("10D").value(), 10 + 13);
        assert_eq!(card("JH").value(), 11 + 26);
        assert_eq!(card("QS").value(), 12 + 39);
        assert_eq!(card("KC").value(), 13);
        assert_eq!(card("KS").value(), 52);
        assert_eq!(card("JokerA").value(), 53);
        assert_eq!(card("JokerB").value(), 53);
    }

    #[test]
    fn test_standard_values_unique_in_range() {
        let values: HashSet<u8> = Card::unkeyed()
            .iter()
            .filter(|c| !c.is_joker())
            .map(|c| c.value())
            .collect();
        assert_eq!(values.len(), 52);
        assert!(values.iter().all(|v| (1..=52).contains(v)));
    }

    #[test]
    fn test_unkeyed_order() {
        let cards = Card::unkeyed();
        assert_eq!(cards[0], card("AC"));
        assert_eq!(cards[12], card("KC"));
        assert_eq!(cards[13], card("AD"));
        assert_eq!(cards[51], card("KS"));
        assert_eq!(cards[52], Card::Joker(Joker::A));
        assert_eq!(cards[53], Card::Joker(Joker::B));
        for (i, c) in cards.iter().take(52).enumerate() {
            assert_eq!(c.value() as usize, i + 1);
        }
    }

    #[test]
    fn test_display_parse_roundtrip_all_cards() {
        for c in Card::unkeyed() {
            assert_eq!(card(&c.to_string()), c);
        }
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(card("qh"), Card::new(Rank::Queen, Suit::Hearts));
        assert_eq!(card("jokerb"), Card::Joker(Joker::B));
    }

    #[test]
    fn test_parse_rejects_unknown_names() {
        for name in ["", "C", "1C", "11H", "AX", "Joker", "JokerC", "10"] {
            assert_eq!(
                name.parse::<Card>(),
                Err(SolitaireError::InvalidCard(name.to_string())),
                "'{}' should not parse",
                name
            );
        }
    }

    #[test]
    fn test_joker_offsets() {
        assert_eq!(Joker::A.offset(), 1);
        assert_eq!(Joker::B.offset(), 2);
    }
}
