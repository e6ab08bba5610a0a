use std::fmt::{Display, Formatter};
use std::io;

/// Error type for decoder generation.
#[derive(Debug)]
pub enum Error {
    /// Output width is not a positive power of two (or does not fit the index range).
    InvalidWidth(u64),
    /// The text sink could not be opened or written.
    Io(io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io(e)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidWidth(n) => write!(f, "output width must be a positive power of two, got {}", n),
            Error::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::InvalidWidth(_) => None,
            Error::Io(e) => Some(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_width() {
        let e = Error::InvalidWidth(12);
        assert_eq!(e.to_string(), "output width must be a positive power of two, got 12");
    }

    #[test]
    fn test_from_io() {
        let e: Error = io::Error::new(io::ErrorKind::PermissionDenied, "nope").into();
        assert!(matches!(e, Error::Io(_)));
        assert!(std::error::Error::source(&e).is_some());
    }
}
