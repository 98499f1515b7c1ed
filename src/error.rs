use read_fonts::ReadError;

/// Errors produced while reading font data.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The data is neither a font nor a font collection.
    #[error("failed to read font data: {0}")]
    Read(#[from] ReadError),
}
