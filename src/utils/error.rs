use std::error::Error;
use std::fmt;
use std::io;

/// Common result type for mdtoc operations
pub type BoxResult<T> = Result<T, Box<dyn Error>>;

/// Error types for TOC generation
#[derive(Debug)]
pub enum MdtocError {
    /// IO error wrapper
    Io(io::Error),
    /// The scan finished without a single TOC entry
    NoHeadings,
}

impl fmt::Display for MdtocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MdtocError::Io(err) => write!(f, "IO error: {}", err),
            MdtocError::NoHeadings => {
                write!(f, "no heading line detected in the given markdown")
            }
        }
    }
}

impl Error for MdtocError {}

impl From<io::Error> for MdtocError {
    fn from(err: io::Error) -> Self {
        MdtocError::Io(err)
    }
}
