#[cfg(test)]
mod tests {
    use crate::randomizer::{FastRandomizer, PieceRandomizer, Randomizer, SequenceRandomizer};

    #[test]
    fn test_sequence_replays_and_wraps() {
        let mut randomizer = SequenceRandomizer::new(vec![3, 1, 6]);
        let picks: Vec<usize> = (0..6).map(|_| randomizer.pick(7)).collect();
        assert_eq!(picks, vec![3, 1, 6, 3, 1, 6]);
    }

    #[test]
    fn test_sequence_reduces_modulo_n() {
        let mut randomizer = SequenceRandomizer::new(vec![9]);
        assert_eq!(randomizer.pick(7), 2);
        assert_eq!(randomizer.pick(4), 1);
    }

    #[test]
    fn test_empty_sequence_picks_first() {
        let mut randomizer = SequenceRandomizer::new(Vec::new());
        assert_eq!(randomizer.pick(7), 0);
    }

    #[test]
    fn test_fast_randomizer_stays_in_range() {
        let mut randomizer = FastRandomizer::new();
        let mut seen = [false; 7];
        for _ in 0..1000 {
            let pick = randomizer.pick(7);
            assert!(pick < 7);
            seen[pick] = true;
        }
        // A thousand uniform draws cover all seven values
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_seeded_randomizer_is_repeatable() {
        let mut a = FastRandomizer::with_seed(42);
        let mut b = FastRandomizer::with_seed(42);
        for _ in 0..50 {
            assert_eq!(a.pick(7), b.pick(7));
        }
    }

    #[test]
    fn test_piece_randomizer_delegates() {
        let mut randomizer = PieceRandomizer::new(SequenceRandomizer::new(vec![5]));
        assert_eq!(randomizer.pick(7), 5);
    }
}
