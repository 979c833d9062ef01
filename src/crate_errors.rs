use crate::{
    args,
    geo_3d,
    io,
};

/// Error-type enum for the `affine3d` crate.
/// Wraps the errors of each module, plus plain messages.
#[derive(Debug)]
pub enum Affine3dError {
    ArgError(args::ArgError),
    GeoError(geo_3d::GeoError),
    IoError(io::IoError),
    StringOnly(String),
}
impl std::fmt::Display for Affine3dError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Affine3dError::ArgError(error) => write!(f, "! ARGUMENT ERROR:\n{}", error),
            Affine3dError::GeoError(error) => write!(f, "! GEOMETRY ERROR:\n{}", error),
            Affine3dError::IoError(error) => write!(f, "! IO ERROR:\n{}", error),
            Affine3dError::StringOnly(error) => write!(f, "! AFFINE3D ERROR:\n- {}", error),
        }
    }
}
impl From<String> for Affine3dError {
    fn from(error: String) -> Self {
        Affine3dError::StringOnly(error)
    }
}
impl From<args::ArgError> for Affine3dError {
    fn from(error: args::ArgError) -> Self {
        Affine3dError::ArgError(error)
    }
}
impl From<geo_3d::GeoError> for Affine3dError {
    fn from(error: geo_3d::GeoError) -> Self {
        Affine3dError::GeoError(error)
    }
}
impl From<io::IoError> for Affine3dError {
    fn from(error: io::IoError) -> Self {
        Affine3dError::IoError(error)
    }
}

/// Result type for the `affine3d` crate.
pub type Affine3dResult<T> = std::result::Result<T, Affine3dError>;

