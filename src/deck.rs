//! Deck construction.
//!
//! The full deck is every integer in 3..=35, 33 cards. At deal time the
//! 33 values are shuffled uniformly, nine are withheld from play
//! unseen, one becomes the face-up card, and the remaining 23 form the
//! draw pile.
//!
//! The counts are checked after every deal. A violation is a builder
//! bug, not a user-triggerable condition, so it panics rather than
//! producing a corrupt deck.

use im::Vector;

use crate::core::GameRng;

/// Lowest card value in the deck.
pub const CARD_MIN: u8 = 3;
/// Highest card value in the deck.
pub const CARD_MAX: u8 = 35;
/// Total distinct card values.
pub const TOTAL_CARDS: usize = 33;
/// Cards withheld from play every game.
pub const REMOVED_CARDS: usize = 9;
/// Cards that actually enter play (draw pile + face-up card).
pub const CARDS_IN_PLAY: usize = TOTAL_CARDS - REMOVED_CARDS;

/// Result of shuffling and splitting the full deck.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deal {
    /// Face-down draw pile, drawn from the end.
    pub deck: Vector<u8>,
    /// The first face-up card.
    pub current_card: Option<u8>,
    /// The nine cards that sit out the whole game.
    pub removed_cards: Vector<u8>,
}

/// Shuffle the 33-card deck and split it into draw pile, face-up card,
/// and removed cards.
///
/// # Panics
///
/// Panics if the resulting counts are wrong, which would indicate a
/// logic bug in the builder itself.
#[must_use]
pub fn build_deck(rng: &mut GameRng) -> Deal {
    let mut cards: Vec<u8> = (CARD_MIN..=CARD_MAX).collect();
    assert_eq!(cards.len(), TOTAL_CARDS, "wrong initial card count");

    rng.shuffle(&mut cards);

    let removed_cards: Vector<u8> = cards[..REMOVED_CARDS].iter().copied().collect();
    let mut in_play = cards.split_off(REMOVED_CARDS);
    let current_card = in_play.pop();
    let deck: Vector<u8> = in_play.into_iter().collect();

    let total = deck.len() + removed_cards.len() + usize::from(current_card.is_some());
    assert_eq!(total, TOTAL_CARDS, "invalid card distribution");
    assert_eq!(removed_cards.len(), REMOVED_CARDS, "wrong removed card count");
    assert_eq!(deck.len(), CARDS_IN_PLAY - 1, "wrong draw pile size");

    Deal {
        deck,
        current_card,
        removed_cards,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deal_counts() {
        let mut rng = GameRng::new(42);
        let deal = build_deck(&mut rng);

        assert_eq!(deal.deck.len(), 23);
        assert_eq!(deal.removed_cards.len(), 9);
        assert!(deal.current_card.is_some());
    }

    #[test]
    fn test_deal_covers_full_range() {
        let mut rng = GameRng::new(7);
        let deal = build_deck(&mut rng);

        let mut all: Vec<u8> = deal
            .deck
            .iter()
            .copied()
            .chain(deal.removed_cards.iter().copied())
            .chain(deal.current_card)
            .collect();
        all.sort_unstable();

        let expected: Vec<u8> = (CARD_MIN..=CARD_MAX).collect();
        assert_eq!(all, expected);
    }

    #[test]
    fn test_deal_is_seed_deterministic() {
        let deal1 = build_deck(&mut GameRng::new(99));
        let deal2 = build_deck(&mut GameRng::new(99));

        assert_eq!(deal1, deal2);
    }

    #[test]
    fn test_different_seeds_deal_differently() {
        let deal1 = build_deck(&mut GameRng::new(1));
        let deal2 = build_deck(&mut GameRng::new(2));

        assert_ne!(deal1, deal2);
    }
}
