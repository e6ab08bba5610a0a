//! Enumeration of decoder terms and assembly of the generated document.
//!
//! Outputs are visited from `n - 1` down to `0`. A single [`BitPattern`] starts at
//! all-ones and is decremented in lockstep with the output index, so at the start
//! of iteration `i` the pattern holds exactly `i` and the literals of the term can
//! be read straight off it.
//!
//! # Examples
//!
//! ```
//! use sld_gen::config::DecoderConfig;
//! use sld_gen::generator::Generator;
//!
//! let config = DecoderConfig::new(4).unwrap();
//! let lines = Generator::new(config).body_lines().collect::<Vec<_>>();
//! assert_eq!(lines[0], "output(3) <= input(1) and input(0);");
//! assert_eq!(lines[3], "output(0)  <= not input(1) and not input(0);");
//! ```

use std::path::{Path, PathBuf};

use log::{debug, info, trace};

use crate::config::DecoderConfig;
use crate::error::Result;
use crate::pattern::BitPattern;
use crate::sink::{FileSink, TextSink};
use crate::term::Term;
use crate::vhdl::{self, Document};

/// Iterator over the decoder terms in descending output order.
#[derive(Debug, Clone)]
pub struct Terms {
    pattern: BitPattern,
    /// Index of the next term, `None` once output 0 has been yielded.
    next: Option<u64>,
}

impl Terms {
    fn new(config: &DecoderConfig) -> Self {
        Self {
            pattern: BitPattern::ones(config.input_width()),
            next: Some(config.max_index()),
        }
    }
}

impl Iterator for Terms {
    type Item = Term;

    fn next(&mut self) -> Option<Self::Item> {
        let i = self.next?;
        debug_assert_eq!(self.pattern.value(), i, "pattern out of step with output index");
        trace!("output({}) pattern = {}", i, self.pattern);

        let term = Term::from_pattern(i, &self.pattern);
        // Decrementing past zero is a no-op, so the last step needs no special case.
        self.pattern.decrement();
        self.next = i.checked_sub(1);
        Some(term)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.next {
            Some(i) => match usize::try_from(i).ok().and_then(|i| i.checked_add(1)) {
                Some(len) => (len, Some(len)),
                None => (usize::MAX, None),
            },
            None => (0, Some(0)),
        }
    }
}

/// Drives the enumeration for one decoder configuration.
#[derive(Debug, Clone)]
pub struct Generator {
    config: DecoderConfig,
}

impl Generator {
    pub fn new(config: DecoderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    pub fn terms(&self) -> Terms {
        Terms::new(&self.config)
    }

    /// Rendered assignment lines, one per output, from `n - 1` down to `0`.
    pub fn body_lines(&self) -> impl Iterator<Item = String> + '_ {
        let max_index = self.config.max_index();
        let padding = self.config.padding();
        self.terms().map(move |term| term.render(max_index, padding))
    }

    fn header_lines(&self) -> impl Iterator<Item = String> {
        vhdl::preamble()
            .into_iter()
            .chain(vhdl::entity(&self.config))
            .chain(vhdl::architecture_header(&self.config))
    }

    /// Assembles the complete document in memory.
    pub fn document(&self) -> Document {
        let mut doc = Document::new();
        doc.extend(self.header_lines());
        doc.extend(self.body_lines());
        doc.extend(vhdl::closing());
        doc
    }

    /// Streams the complete document into `sink`, then finalizes it.
    pub fn write_to(&self, sink: &mut impl TextSink) -> Result<()> {
        debug!(
            "generating {} (n = {}, k = {})",
            self.config.entity_name(),
            self.config.outputs(),
            self.config.input_width()
        );
        for line in self.header_lines() {
            sink.append_line(&line)?;
        }
        for line in self.body_lines() {
            sink.append_line(&line)?;
        }
        for line in vhdl::closing() {
            sink.append_line(&line)?;
        }
        sink.finalize()
    }
}

/// Writes the decoder into `dir`, under its derived file name.
///
/// Returns the path of the written file.
pub fn generate_file(config: DecoderConfig, dir: impl AsRef<Path>) -> Result<PathBuf> {
    let path = dir.as_ref().join(config.file_name());
    info!("Creating {}", path.display());
    let mut sink = FileSink::create(&path)?;
    Generator::new(config).write_to(&mut sink)?;
    info!("Created {}", path.display());
    Ok(path)
}
