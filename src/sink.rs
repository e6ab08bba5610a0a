//! Destinations for generated text.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::debug;

use crate::error::Result;

/// Receives the generated document line by line.
pub trait TextSink {
    fn append_line(&mut self, line: &str) -> Result<()>;

    /// Flushes whatever was appended. No lines may be appended afterwards.
    fn finalize(&mut self) -> Result<()>;
}

/// Collects lines in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Vec<String>,
    finalized: bool,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl TextSink for MemorySink {
    fn append_line(&mut self, line: &str) -> Result<()> {
        debug_assert!(!self.finalized);
        self.lines.push(line.to_string());
        Ok(())
    }

    fn finalize(&mut self) -> Result<()> {
        self.finalized = true;
        Ok(())
    }
}

/// Writes newline-separated lines to any [`Write`].
///
/// The last line is not followed by a newline.
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    writer: W,
    lines: usize,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, lines: 0 }
    }

    /// Number of lines appended so far.
    pub fn lines(&self) -> usize {
        self.lines
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> TextSink for WriterSink<W> {
    fn append_line(&mut self, line: &str) -> Result<()> {
        if self.lines > 0 {
            self.writer.write_all(b"\n")?;
        }
        self.writer.write_all(line.as_bytes())?;
        self.lines += 1;
        Ok(())
    }

    fn finalize(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

pub type FileSink = WriterSink<BufWriter<File>>;

impl FileSink {
    /// Creates (or truncates) the file at `path`.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("opening {}", path.display());
        let file = File::create(path)?;
        Ok(WriterSink::new(BufWriter::new(file)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io;

    use crate::error::Error;

    #[test]
    fn test_memory_sink() {
        let mut sink = MemorySink::new();
        sink.append_line("a").unwrap();
        sink.append_line("").unwrap();
        sink.finalize().unwrap();
        assert!(sink.is_finalized());
        assert_eq!(sink.into_lines(), ["a", ""]);
    }

    #[test]
    fn test_writer_sink_separators() {
        let mut sink = WriterSink::new(Vec::new());
        for line in ["x", "", "", "end;"] {
            sink.append_line(line).unwrap();
        }
        sink.finalize().unwrap();
        assert_eq!(sink.lines(), 4);
        assert_eq!(sink.into_inner(), b"x\n\n\nend;");
    }

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_writer_sink_failure() {
        let mut sink = WriterSink::new(Broken);
        let res = sink.append_line("x");
        assert!(matches!(res, Err(Error::Io(_))));
    }

    #[test]
    fn test_file_sink_missing_dir() {
        let path = std::env::temp_dir()
            .join("sld-gen-no-such-dir")
            .join("nested")
            .join("out.vhd");
        assert!(matches!(FileSink::create(path), Err(Error::Io(_))));
    }
}
