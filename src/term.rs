//! Product terms of the decoder and their VHDL rendering.
//!
//! Each output `i` of an `n:log2(n)` decoder is driven by the conjunction of all
//! `k` input bits, each taken plain or complemented according to bit `j` of `i`:
//!
//! ```text
//! output(2) <= input(1) and not input(0);
//! ```

use std::fmt::{Display, Formatter};

use crate::config::Padding;
use crate::pattern::BitPattern;

/// A single input bit or its complement.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Literal {
    input: usize,
    negated: bool,
}

impl Literal {
    pub const fn positive(input: usize) -> Self {
        Self { input, negated: false }
    }

    pub const fn negative(input: usize) -> Self {
        Self { input, negated: true }
    }

    pub const fn input(&self) -> usize {
        self.input
    }

    pub const fn is_negated(&self) -> bool {
        self.negated
    }

    /// Value of this literal when the decoder input carries `code`.
    pub fn eval(&self, code: u64) -> bool {
        let bit = self.input < 64 && (code >> self.input) & 1 != 0;
        bit != self.negated
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.negated {
            write!(f, "not ")?;
        }
        write!(f, "input({})", self.input)
    }
}

/// The assignment driving one decoder output.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Term {
    output: u64,
    /// Most significant input first.
    literals: Vec<Literal>,
}

impl Term {
    /// VHDL constant used for the empty conjunction (zero-width input).
    pub const TRUE: &'static str = "'1'";

    /// Builds the term for output `output` from the bit pattern of the same value.
    pub fn from_pattern(output: u64, pattern: &BitPattern) -> Self {
        let literals = pattern
            .iter()
            .enumerate()
            .rev()
            .map(|(j, bit)| if bit { Literal::positive(j) } else { Literal::negative(j) })
            .collect();
        Self { output, literals }
    }

    pub fn output(&self) -> u64 {
        self.output
    }

    pub fn literals(&self) -> &[Literal] {
        &self.literals
    }

    /// Value of the conjunction when the decoder input carries `code`.
    pub fn eval(&self, code: u64) -> bool {
        self.literals.iter().all(|lit| lit.eval(code))
    }

    /// Renders the full assignment line, padded so that the arrows line up
    /// for every output up to `max_index`.
    pub fn render(&self, max_index: u64, padding: Padding) -> String {
        let pad = pad_width(self.output, max_index, padding);
        format!("output({}){} <= {};", self.output, " ".repeat(pad), self.conjunction())
    }

    fn conjunction(&self) -> String {
        if self.literals.is_empty() {
            return Self::TRUE.to_string();
        }
        self.literals
            .iter()
            .map(|lit| lit.to_string())
            .collect::<Vec<_>>()
            .join(" and ")
    }
}

/// Number of decimal digits of `x` (`digits(0) == 1`).
pub fn digits(x: u64) -> usize {
    x.checked_ilog10().map_or(1, |d| d as usize + 1)
}

/// Number of spaces inserted between `output(index)` and the arrow.
pub fn pad_width(index: u64, max_index: u64, padding: Padding) -> usize {
    match padding {
        Padding::Legacy if index == 0 => 1,
        _ => digits(max_index).saturating_sub(digits(index)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    fn pattern_of(width: usize, value: u64) -> BitPattern {
        let mut p = BitPattern::zeros(width);
        for _ in 0..value {
            p.increment();
        }
        p
    }

    #[test]
    fn test_literal_display() {
        assert_eq!(Literal::positive(3).to_string(), "input(3)");
        assert_eq!(Literal::negative(0).to_string(), "not input(0)");
    }

    #[test]
    fn test_literal_eval() {
        assert!(Literal::positive(1).eval(0b10));
        assert!(!Literal::positive(1).eval(0b01));
        assert!(Literal::negative(1).eval(0b01));
        assert!(!Literal::negative(0).eval(0b01));
    }

    #[test]
    fn test_from_pattern_msb_first() {
        let term = Term::from_pattern(6, &pattern_of(3, 6));
        assert_eq!(term.output(), 6);
        assert_eq!(
            term.literals(),
            &[Literal::positive(2), Literal::positive(1), Literal::negative(0)]
        );
    }

    #[test]
    fn test_render_n4() {
        let lines: Vec<String> = (0..4)
            .rev()
            .map(|i| Term::from_pattern(i, &pattern_of(2, i)).render(3, Padding::Legacy))
            .collect();
        assert_eq!(
            lines,
            [
                "output(3) <= input(1) and input(0);",
                "output(2) <= input(1) and not input(0);",
                "output(1) <= not input(1) and input(0);",
                "output(0)  <= not input(1) and not input(0);",
            ]
        );
    }

    #[test]
    fn test_render_aligned_drops_zero_quirk() {
        let term = Term::from_pattern(0, &pattern_of(2, 0));
        assert_eq!(term.render(3, Padding::Aligned), "output(0) <= not input(1) and not input(0);");
    }

    #[test]
    fn test_render_empty_conjunction() {
        let term = Term::from_pattern(0, &BitPattern::ones(0));
        assert!(term.literals().is_empty());
        assert!(term.eval(0));
        assert_eq!(term.render(0, Padding::Legacy), "output(0)  <= '1';");
        assert_eq!(term.render(0, Padding::Aligned), "output(0) <= '1';");
    }

    #[test]
    fn test_one_hot() {
        let k = 4;
        let n = 1u64 << k;
        for i in 0..n {
            let term = Term::from_pattern(i, &pattern_of(k, i));
            for code in 0..n {
                assert_eq!(term.eval(code), code == i, "term {} on code {}", i, code);
            }
        }
    }

    #[test]
    fn test_digits() {
        assert_eq!(digits(0), 1);
        assert_eq!(digits(9), 1);
        assert_eq!(digits(10), 2);
        assert_eq!(digits(511), 3);
        assert_eq!(digits(u64::MAX), 20);
    }

    #[test]
    fn test_pad_width_n16() {
        for i in 0..16 {
            let legacy = pad_width(i, 15, Padding::Legacy);
            let aligned = pad_width(i, 15, Padding::Aligned);
            let expected = if i < 10 { 1 } else { 0 };
            assert_eq!(legacy, expected, "legacy padding of {}", i);
            assert_eq!(aligned, expected, "aligned padding of {}", i);
        }
    }

    #[test]
    fn test_pad_width_n512() {
        assert_eq!(pad_width(511, 511, Padding::Legacy), 0);
        assert_eq!(pad_width(42, 511, Padding::Legacy), 1);
        assert_eq!(pad_width(7, 511, Padding::Legacy), 2);
        assert_eq!(pad_width(0, 511, Padding::Legacy), 1);
        assert_eq!(pad_width(0, 511, Padding::Aligned), 2);
    }
}
