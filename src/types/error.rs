use core::fmt;
use derive_more::From;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, From)]
pub enum Error {
    /// a table row whose cell count does not match the header
    MalformedTable {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// heading rank outside the supported 1..=3 range
    UnsupportedHeadingLevel(u8),
    #[from]
    Script(serde_json::Error),
    #[from]
    Package(zip::result::ZipError),
    #[from]
    Save(std::io::Error),
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::MalformedTable {
                row,
                expected,
                found,
            } => write!(
                f,
                "malformed table: row {row} has {found} cells, header has {expected}"
            ),
            Error::UnsupportedHeadingLevel(level) => {
                write!(f, "unsupported heading level {level} (supported: 1-3)")
            }
            Error::Script(e) => write!(f, "invalid section script: {e}"),
            Error::Package(e) => write!(f, "package assembly failed: {e}"),
            Error::Save(e) => write!(f, "could not write document: {e}"),
        }
    }
}
