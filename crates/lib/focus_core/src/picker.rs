//! "Pick one of N" — the only source of non-determinism in response selection.

use rand::Rng;

/// Chooses an index into a non-empty candidate list.
///
/// Implementations must return a value in `0..len`. `len` is never zero.
pub trait Picker: Send + Sync {
    fn pick(&self, len: usize) -> usize;
}

/// Uniform choice backed by the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngPicker;

impl Picker for ThreadRngPicker {
    fn pick(&self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }
}

/// Always picks the same index (wrapped to the list length).
///
/// Useful wherever a reproducible response is needed, mainly tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixedPicker(pub usize);

impl Picker for FixedPicker {
    fn pick(&self, len: usize) -> usize {
        self.0 % len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thread_rng_picker_stays_in_range() {
        let picker = ThreadRngPicker;
        for len in 1..10 {
            for _ in 0..50 {
                assert!(picker.pick(len) < len);
            }
        }
    }

    #[test]
    fn thread_rng_picker_single_candidate() {
        assert_eq!(ThreadRngPicker.pick(1), 0);
    }

    #[test]
    fn fixed_picker_wraps() {
        assert_eq!(FixedPicker(0).pick(3), 0);
        assert_eq!(FixedPicker(2).pick(3), 2);
        assert_eq!(FixedPicker(4).pick(3), 1);
    }
}
