/// Geometry error type.
#[derive(Debug)]
pub enum GeoError {
    /// A component sequence was shorter than the three coordinates required.
    TooFewComponents{found: usize},
    /// StringOnly error.
    StringOnly(String),
}
impl std::fmt::Display for GeoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeoError::TooFewComponents{found} => write!(f, "- Expected 3 components, found {}", found),
            GeoError::StringOnly(error) => write!(f, "- {}", error),
        }
    }
}
impl std::error::Error for GeoError {}
impl From<String> for GeoError {
    fn from(error: String) -> Self {
        GeoError::StringOnly(error)
    }
}

/// Result type for the `geo_3d` module.
pub type GeoResult<T> = std::result::Result<T, GeoError>;

/// Create a `GeoError::StringOnly` from a string.
pub fn err_str<T>(error_str: &str) -> GeoResult<T> {
    Err(GeoError::StringOnly(error_str.to_string()))
}
