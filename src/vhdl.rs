//! Fixed VHDL text surrounding the decoder equations.
//!
//! A generated document has the following shape (for `n = 4`):
//!
//! ```text
//! library IEEE;
//! use IEEE.std_logic_1164.all;
//! ...
//! entity decoder_4 is
//! generic(
//!   g_n:      integer := 4;  -- Output length is n
//!   g_log2n:  integer := 2   -- Base 2 Logarithm of output length n; i.e., input length
//! );
//! port(...);
//! end decoder_4;
//!
//! architecture behavioral of decoder_4 is
//!
//! begin
//! ...
//! output(3) <= input(1) and input(0);
//! ...
//!
//!
//! end;
//! ```

use std::fmt::{Display, Formatter};

use crate::config::DecoderConfig;

/// Library and use clauses shared by every generated file.
pub fn preamble() -> Vec<String> {
    [
        "library IEEE;",
        "use IEEE.std_logic_1164.all;",
        "use IEEE.numeric_std.all;",
        "use IEEE.std_logic_unsigned.all;",
        "",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

/// Entity declaration with the `g_n`/`g_log2n` generics and the two ports.
pub fn entity(config: &DecoderConfig) -> Vec<String> {
    let name = config.entity_name();
    vec![
        format!("entity {} is", name),
        "generic(".to_string(),
        format!("  g_n:      integer := {};  -- Output length is n", config.outputs()),
        format!(
            "  g_log2n:  integer := {}   -- Base 2 Logarithm of output length n; i.e., input length",
            config.input_width()
        ),
        ");".to_string(),
        "port(".to_string(),
        "  input: in std_logic_vector(g_log2n - 1 downto 0); -- value to decode".to_string(),
        "  output: out std_logic_vector(g_n - 1 downto 0) -- decoded result".to_string(),
        ");".to_string(),
        format!("end {};", name),
        String::new(),
    ]
}

/// Opening of the architecture body, up to the first assignment.
pub fn architecture_header(config: &DecoderConfig) -> Vec<String> {
    vec![
        format!("architecture behavioral of {} is", config.entity_name()),
        String::new(),
        "begin".to_string(),
        "-- Decoding corresponds to binary representation of given portions of shift".to_string(),
        String::new(),
    ]
}

/// Closing of the architecture body.
pub fn closing() -> Vec<String> {
    vec![String::new(), String::new(), "end;".to_string()]
}

/// A complete generated file, as an ordered list of lines.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Document {
    lines: Vec<String>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl Extend<String> for Document {
    fn extend<T: IntoIterator<Item = String>>(&mut self, iter: T) {
        self.lines.extend(iter);
    }
}

/// Lines are separated by `\n`; there is no trailing newline after `end;`.
impl Display for Document {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", line)?;
        }
        Ok(())
    }
}
