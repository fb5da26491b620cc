use rand::Rng;

use crate::core::card::{Card, Suit, Value};

/// Draw one card uniformly at random from the 52-card space.
///
/// The value and the suit are chosen independently, so this is
/// sampling with replacement. There is no deck behind it and no
/// state between calls beyond the rng itself; the same card can
/// come back on the very next draw.
///
/// The rng is an explicit argument so that callers can pass a
/// seeded generator for repeatable draws, or `rand::rng()` when
/// they just want entropy.
///
/// # Examples
/// ```
/// use handkind::core::sample_card;
///
/// let mut rng = rand::rng();
/// let card = sample_card(&mut rng);
/// println!("dealt {card}");
/// ```
pub fn sample_card(rng: &mut impl Rng) -> Card {
    let value = Value::from_u8(rng.random_range(0..13));
    let suit = Suit::suits()[rng.random_range(0..4)];
    Card::new(value, suit)
}

/// Draw a five card hand, one independent `sample_card` per slot.
///
/// Because the draws are with replacement the hand can contain
/// duplicate cards, up to five copies of the same one.
pub fn sample_hand(rng: &mut impl Rng) -> [Card; 5] {
    std::array::from_fn(|_| sample_card(rng))
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_draws_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let card = sample_card(&mut rng);
            assert!(Value::values().contains(&card.value));
            assert!(Suit::suits().contains(&card.suit));
        }
    }

    #[test]
    fn test_every_card_reachable() {
        // 10_000 draws over a 52 card space should see every card.
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen: HashSet<Card> = HashSet::new();
        for _ in 0..10_000 {
            seen.insert(sample_card(&mut rng));
        }
        assert_eq!(52, seen.len());
    }

    #[test]
    fn test_same_seed_same_draws() {
        let hand_one = sample_hand(&mut StdRng::seed_from_u64(99));
        let hand_two = sample_hand(&mut StdRng::seed_from_u64(99));
        assert_eq!(hand_one, hand_two);
    }

    #[test]
    fn test_hand_is_five_cards() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(5, sample_hand(&mut rng).len());
    }
}
