//! Fixed-width bit pattern with in-place increment and decrement.
//!
//! Bit `0` is the least significant. The width never changes after construction,
//! and [`BitPattern::decrement`] saturates at zero instead of wrapping, so walking
//! a range downwards never needs to rebuild the binary representation of a value.

use std::fmt::{Debug, Display, Formatter};

#[derive(Clone, Eq, PartialEq, Hash)]
pub struct BitPattern {
    bits: Vec<bool>,
}

// Constructors
impl BitPattern {
    /// All bits set: the value `2^width - 1`.
    pub fn ones(width: usize) -> Self {
        Self { bits: vec![true; width] }
    }

    /// All bits clear: the value `0`.
    pub fn zeros(width: usize) -> Self {
        Self { bits: vec![false; width] }
    }
}

// Getters
impl BitPattern {
    /// Width of the pattern.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Returns true for a zero-width pattern.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn get(&self, index: usize) -> bool {
        self.bits[index]
    }

    /// Iterates over bits from least to most significant.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = bool> + ExactSizeIterator + '_ {
        self.bits.iter().copied()
    }

    /// Numeric value of the pattern.
    ///
    /// Only meaningful for widths up to 64 bits.
    pub fn value(&self) -> u64 {
        debug_assert!(self.len() <= 64);
        self.bits
            .iter()
            .rev()
            .fold(0, |acc, &bit| (acc << 1) | bit as u64)
    }

    /// Returns true iff every bit is clear.
    pub fn is_zero(&self) -> bool {
        self.bits.iter().all(|&bit| !bit)
    }
}

// Operations
impl BitPattern {
    /// Subtracts one in place, saturating at zero.
    pub fn decrement(&mut self) {
        if self.is_zero() {
            return;
        }
        if self.bits[0] {
            self.bits[0] = false;
            return;
        }
        // Borrow from the lowest set bit; everything below it becomes set.
        if let Some(pos) = self.bits.iter().position(|&bit| bit) {
            self.bits[pos] = false;
            for bit in &mut self.bits[..pos] {
                *bit = true;
            }
        }
    }

    /// Adds one in place.
    ///
    /// The carry out of the most significant bit is dropped, so the all-ones
    /// pattern wraps to all-zeros.
    pub fn increment(&mut self) {
        for bit in self.bits.iter_mut() {
            if !*bit {
                *bit = true;
                return;
            }
            *bit = false; // carry
        }
    }
}

impl Display for BitPattern {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[ ")?;
        for bit in self.bits.iter().rev() {
            write!(f, "{} ", *bit as u8)?;
        }
        write!(f, "]")
    }
}

impl Debug for BitPattern {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    fn bits(pattern: &BitPattern) -> Vec<bool> {
        pattern.iter().collect()
    }

    #[test]
    fn test_ones_and_zeros() {
        let ones = BitPattern::ones(4);
        assert_eq!(ones.len(), 4);
        assert_eq!(ones.value(), 15);
        assert!(!ones.is_zero());

        let zeros = BitPattern::zeros(4);
        assert_eq!(zeros.value(), 0);
        assert!(zeros.is_zero());
    }

    #[test]
    fn test_empty() {
        let p = BitPattern::ones(0);
        assert!(p.is_empty());
        assert!(p.is_zero());
        assert_eq!(p.value(), 0);
    }

    #[test]
    fn test_decrement_sequence() {
        // MSB-first notation in comments: 11 -> 10 -> 01 -> 00
        let mut p = BitPattern::ones(2);
        assert_eq!(bits(&p), [true, true]);
        p.decrement();
        assert_eq!(bits(&p), [false, true]);
        p.decrement();
        assert_eq!(bits(&p), [true, false]);
        p.decrement();
        assert_eq!(bits(&p), [false, false]);
    }

    #[test]
    fn test_decrement_borrow() {
        let mut p = BitPattern::zeros(4);
        p.increment(); // 0001
        for _ in 0..7 {
            p.increment();
        }
        assert_eq!(p.value(), 8); // 1000
        p.decrement();
        assert_eq!(p.value(), 7);
        assert_eq!(bits(&p), [true, true, true, false]);
    }

    #[test]
    fn test_decrement_down_to_zero_saturates() {
        for k in 0..=8 {
            let n = 1u64 << k;
            let mut p = BitPattern::ones(k);
            for expected in (0..n).rev() {
                assert_eq!(p.value(), expected);
                p.decrement();
            }
            assert!(p.is_zero());
            // One more decrement is a no-op.
            p.decrement();
            assert!(p.is_zero());
            assert_eq!(p.len(), k);
        }
    }

    #[test]
    fn test_increment_counts_up() {
        let mut p = BitPattern::zeros(5);
        for expected in 0..32 {
            assert_eq!(p.value(), expected);
            p.increment();
        }
        // Carry out of the top bit is dropped.
        assert!(p.is_zero());
    }

    #[test]
    fn test_increment_undoes_decrement() {
        let mut p = BitPattern::ones(6);
        while !p.is_zero() {
            let before = p.clone();
            p.decrement();
            let mut restored = p.clone();
            restored.increment();
            assert_eq!(restored, before);
        }
    }

    #[test]
    fn test_display() {
        let mut p = BitPattern::ones(3);
        p.decrement();
        assert_eq!(p.to_string(), "[ 1 1 0 ]");
        assert_eq!(BitPattern::zeros(0).to_string(), "[ ]");
    }
}
