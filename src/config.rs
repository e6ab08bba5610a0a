//! Decoder parameters.
//!
//! The output width `n` is validated once, here, so that everything downstream
//! can rely on `n` being a power of two and `k = log2(n)` being exact.

use crate::error::{Error, Result};

/// Suffix of the generated artifact name.
pub const FILE_ENDING: &str = "_sld.vhd";

/// Padding rule used to align the `<=` arrows of the generated assignments.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub enum Padding {
    /// Historical layout: index 0 always gets exactly one space,
    /// other indices are padded up to the digit count of `n - 1`.
    #[default]
    Legacy,
    /// Pad every index up to the digit count of `n - 1`.
    Aligned,
}

/// Immutable configuration of one decoder.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct DecoderConfig {
    outputs: u64,
    padding: Padding,
}

impl DecoderConfig {
    /// Creates a configuration for an `outputs`-to-`log2(outputs)` decoder.
    ///
    /// Fails with [`Error::InvalidWidth`] if `outputs` is zero or not a power of two.
    pub fn new(outputs: u64) -> Result<Self> {
        if !outputs.is_power_of_two() {
            return Err(Error::InvalidWidth(outputs));
        }
        Ok(Self {
            outputs,
            padding: Padding::default(),
        })
    }

    pub fn with_padding(self, padding: Padding) -> Self {
        Self { padding, ..self }
    }
}

// Getters
impl DecoderConfig {
    /// Output width `n`.
    pub const fn outputs(&self) -> u64 {
        self.outputs
    }

    /// Input width `k = log2(n)`.
    pub const fn input_width(&self) -> usize {
        self.outputs.trailing_zeros() as usize
    }

    /// Largest output index, `n - 1`.
    pub const fn max_index(&self) -> u64 {
        self.outputs - 1
    }

    pub const fn padding(&self) -> Padding {
        self.padding
    }

    pub fn entity_name(&self) -> String {
        format!("decoder_{}", self.outputs)
    }

    pub fn file_name(&self) -> String {
        format!("{}{}", self.entity_name(), FILE_ENDING)
    }
}
