use rand::{rngs::OsRng, RngCore};
use serde::{Deserialize, Serialize};

pub const LETTERS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = "!#$%&()*+";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountRange {
    pub min: usize,
    pub max: usize,
}

impl CountRange {
    pub fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    pub fn is_valid(&self) -> bool {
        self.min <= self.max
    }

    fn draw(&self, rng: &mut impl RngCore) -> usize {
        // Widened so the span cannot overflow when the bounds sit at the
        // extremes of usize.
        let span = (self.max - self.min) as u128 + 1;
        self.min + ((rng.next_u32() as u128) % span) as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordPolicy {
    pub letters: CountRange,
    pub digits: CountRange,
    pub symbols: CountRange,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            letters: CountRange::new(8, 10),
            digits: CountRange::new(2, 4),
            symbols: CountRange::new(2, 4),
        }
    }
}

impl PasswordPolicy {
    pub fn generate(&self) -> String {
        self.generate_with(&mut OsRng)
    }

    pub fn generate_with(&self, rng: &mut impl RngCore) -> String {
        let mut chars: Vec<char> = Vec::new();

        for (alphabet, range) in [
            (LETTERS, self.letters),
            (DIGITS, self.digits),
            (SYMBOLS, self.symbols),
        ] {
            let pool: Vec<char> = alphabet.chars().collect();
            let count = range.draw(rng);

            for _ in 0..count {
                let idx = (rng.next_u32() as usize) % pool.len();
                chars.push(pool[idx]);
            }
        }

        for i in (1..chars.len()).rev() {
            let j = (rng.next_u32() as usize) % (i + 1);
            chars.swap(i, j);
        }

        chars.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn class_counts(password: &str) -> (usize, usize, usize) {
        let mut letters = 0;
        let mut digits = 0;
        let mut symbols = 0;

        for c in password.chars() {
            if LETTERS.contains(c) {
                letters += 1;
            } else if DIGITS.contains(c) {
                digits += 1;
            } else if SYMBOLS.contains(c) {
                symbols += 1;
            } else {
                panic!("character {:?} outside every configured alphabet", c);
            }
        }

        (letters, digits, symbols)
    }

    #[test]
    fn default_policy_draws_each_class_within_its_range() {
        let policy = PasswordPolicy::default();
        let mut rng = StdRng::seed_from_u64(1);

        for _ in 0..200 {
            let password = policy.generate_with(&mut rng);
            let (letters, digits, symbols) = class_counts(&password);

            assert!((8..=10).contains(&letters), "letters: {}", letters);
            assert!((2..=4).contains(&digits), "digits: {}", digits);
            assert!((2..=4).contains(&symbols), "symbols: {}", symbols);
            assert_eq!(password.chars().count(), letters + digits + symbols);
            assert!((12..=18).contains(&password.chars().count()));
        }
    }

    #[test]
    fn same_seed_gives_the_same_password() {
        let policy = PasswordPolicy::default();

        let first = policy.generate_with(&mut StdRng::seed_from_u64(42));
        let second = policy.generate_with(&mut StdRng::seed_from_u64(42));

        assert_eq!(first, second);
    }

    #[test]
    fn different_seeds_give_different_passwords() {
        let policy = PasswordPolicy::default();

        let first = policy.generate_with(&mut StdRng::seed_from_u64(1));
        let second = policy.generate_with(&mut StdRng::seed_from_u64(2));

        assert_ne!(first, second);
    }

    #[test]
    fn degenerate_ranges_fix_the_length_exactly() {
        let policy = PasswordPolicy {
            letters: CountRange::new(3, 3),
            digits: CountRange::new(1, 1),
            symbols: CountRange::new(0, 0),
        };
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..50 {
            let password = policy.generate_with(&mut rng);
            let (letters, digits, symbols) = class_counts(&password);

            assert_eq!(letters, 3);
            assert_eq!(digits, 1);
            assert_eq!(symbols, 0);
            assert_eq!(password.chars().count(), 4);
        }
    }

    #[test]
    fn draw_handles_extreme_bounds_without_panicking() {
        let mut rng = StdRng::seed_from_u64(3);

        let n = CountRange::new(5, usize::MAX).draw(&mut rng);
        assert!(n >= 5);

        let n = CountRange::new(usize::MAX, usize::MAX).draw(&mut rng);
        assert_eq!(n, usize::MAX);
    }

    #[test]
    fn count_range_validity() {
        assert!(CountRange::new(2, 4).is_valid());
        assert!(CountRange::new(3, 3).is_valid());
        assert!(!CountRange::new(5, 2).is_valid());
    }
}
