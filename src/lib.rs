//! # sld-gen: single-level decoder generator
//!
//! **`sld-gen`** writes a VHDL entity implementing an `n`-to-`log2(n)` binary decoder:
//! given a `log2(n)`-bit input code, exactly one of the `n` outputs is asserted,
//! the one whose index equals the code.
//!
//! Every output is driven by a full product term over all input bits, no
//! minimization is attempted:
//!
//! ```text
//! output(3) <= input(1) and input(0);
//! output(2) <= input(1) and not input(0);
//! output(1) <= not input(1) and input(0);
//! output(0)  <= not input(1) and not input(0);
//! ```
//!
//! ## Basic Usage
//!
//! ```rust
//! use sld_gen::config::DecoderConfig;
//! use sld_gen::generator::Generator;
//! use sld_gen::sink::MemorySink;
//!
//! let config = DecoderConfig::new(8).unwrap();
//! let mut sink = MemorySink::new();
//! Generator::new(config).write_to(&mut sink).unwrap();
//!
//! assert_eq!(sink.lines()[0], "library IEEE;");
//! assert_eq!(sink.lines().last().unwrap(), "end;");
//! ```
//!
//! ## Core Components
//!
//! - **[`pattern`]**: fixed-width bit pattern with in-place decrement/increment.
//! - **[`term`]**: product terms and their rendering as VHDL assignments.
//! - **[`generator`]**: walks outputs from `n - 1` down to `0` and assembles the document.
//! - **[`cost`]**: transistor-count estimates for single-level and tree decoders.

pub mod config;
pub mod cost;
pub mod error;
pub mod generator;
pub mod pattern;
pub mod sink;
pub mod term;
pub mod vhdl;
