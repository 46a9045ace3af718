/// Errors from board construction and input preprocessing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BishopError {
    /// Hex input was not valid hex or had an odd length.
    InvalidEncoding(String),
    /// The grid is too small to hold a border, or has too many cells.
    InvalidDimensions { width: u32, height: u32 },
}

impl std::fmt::Display for BishopError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidEncoding(msg) => write!(f, "invalid encoding: {msg}"),
            Self::InvalidDimensions { width, height } => {
                write!(
                    f,
                    "invalid dimensions {width}x{height} (need width >= {}, height >= {} \
                     and at most u32::MAX cells)",
                    crate::types::MIN_WIDTH,
                    crate::types::MIN_HEIGHT
                )
            }
        }
    }
}

impl std::error::Error for BishopError {}
