//! Public order numbers: 8 symbols drawn uniformly from `[A-Z0-9]`.

pub const ORDER_NUMBER_LEN: usize = 8;
pub const ORDER_NUMBER_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Draw a fresh order number from `rng`.
pub fn generate(rng: &mut fastrand::Rng) -> String {
    (0..ORDER_NUMBER_LEN)
        .map(|_| ORDER_NUMBER_ALPHABET[rng.usize(..ORDER_NUMBER_ALPHABET.len())] as char)
        .collect()
}

/// True when `candidate` has the shape of a generated order number.
pub fn is_well_formed(candidate: &str) -> bool {
    candidate.len() == ORDER_NUMBER_LEN
        && candidate.bytes().all(|b| ORDER_NUMBER_ALPHABET.contains(&b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_numbers_are_well_formed() {
        let mut rng = fastrand::Rng::new();
        for _ in 0..500 {
            let number = generate(&mut rng);
            assert!(is_well_formed(&number), "bad order number {}", number);
        }
    }

    #[test]
    fn test_seeded_generation_is_deterministic() {
        let a = generate(&mut fastrand::Rng::with_seed(7));
        let b = generate(&mut fastrand::Rng::with_seed(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_is_well_formed_rejects_lowercase_and_length() {
        assert!(!is_well_formed("ab12cd34"));
        assert!(!is_well_formed("AB12CD3"));
        assert!(!is_well_formed("AB12CD34X"));
        assert!(is_well_formed("AB12CD34"));
    }
}
