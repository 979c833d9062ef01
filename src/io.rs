use serde::{Serialize, Deserialize};
use strum::IntoEnumIterator;

use crate::args::Format;
use crate::geo_3d::Point3d;

/// What went wrong while moving point data through a file or a string.
#[derive(Debug)]
pub enum IoErrorKind {
    /// The file could not be opened or read.
    Unreadable(std::io::Error),
    /// The contents do not describe the expected data in the given format.
    Malformed{format: Format, message: String},
    /// A value could not be written in the given format.
    Unwritable{format: Format, message: String},
    /// The path's extension names no structured format.
    UnknownExtension{supported: Vec<&'static str>},
    /// The format has no generic serialization.
    NotStructured(Format),
}
impl std::fmt::Display for IoErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IoErrorKind::Unreadable(error) => write!(f, "could not read file ({})", error),
            IoErrorKind::Malformed{format, message} => write!(f, "not a valid {} point file:\n{}", format, message),
            IoErrorKind::Unwritable{format, message} => write!(f, "could not write {} output: {}", format, message),
            IoErrorKind::UnknownExtension{supported} => write!(f, "unrecognized extension, expected one of: {}", supported.join(", ")),
            IoErrorKind::NotStructured(format) => write!(f, "{} output is only written through a render hook", format),
        }
    }
}

/// Data file error, tagged with the path it concerns when there is one.
#[derive(Debug)]
pub struct IoError {
    pub path: Option<String>,
    pub kind: IoErrorKind,
}
impl IoError {
    fn at(path: &str, kind: IoErrorKind) -> Self {
        IoError{path: Some(path.to_string()), kind}
    }

    fn detached(kind: IoErrorKind) -> Self {
        IoError{path: None, kind}
    }
}
impl std::fmt::Display for IoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.path {
            Some(path) => write!(f, "{}: {}", path, self.kind),
            None => write!(f, "{}", self.kind),
        }
    }
}

pub type IoResult<T> = std::result::Result<T, IoError>;

/// A list of points, as stored in point cloud files.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PointCloud {
    pub points: Vec<Point3d>,
}

/// Open a file, keeping its path on failure.
pub fn open(path: &str) -> IoResult<std::fs::File> {
    std::fs::File::open(path).map_err(|error| IoError::at(path, IoErrorKind::Unreadable(error)))
}

/// Read a whole file, keeping its path on failure.
pub fn read_to_string(path: &str) -> IoResult<String> {
    std::fs::read_to_string(path).map_err(|error| IoError::at(path, IoErrorKind::Unreadable(error)))
}

/// Read a data file in any of the structured formats, chosen by extension.
pub fn read_data_file<T>(path: &str) -> IoResult<T>
where T: serde::de::DeserializeOwned
{
    log::debug!("Reading data file {}", path);
    let malformed = |format: Format, message: String| IoError::at(path, IoErrorKind::Malformed{format, message});
    match Format::from_path(path) {
        Some(Format::Json) => serde_json::from_reader(open(path)?)
            .map_err(|error| malformed(Format::Json, error.to_string())),
        Some(Format::Toml) => toml::from_str(&read_to_string(path)?)
            .map_err(|error| malformed(Format::Toml, error.to_string())),
        Some(Format::Yaml) => serde_yaml::from_reader(open(path)?)
            .map_err(|error| malformed(Format::Yaml, error.to_string())),
        _ => {
            let supported = Format::iter()
                .filter(|format| format.is_structured())
                .flat_map(|format| format.extensions().iter().copied())
                .collect::<Vec<_>>();
            Err(IoError::at(path, IoErrorKind::UnknownExtension{supported}))
        },
    }
}

/// Read a point cloud file (`{points: [...]}`).
pub fn read_point_cloud(path: &str) -> IoResult<PointCloud> {
    read_data_file(path)
}

/// Render a value in a structured text format.
/// `Format::Obj` has no generic serialization and is rejected.
pub fn to_format_string<T: Serialize>(value: &T, format: Format) -> IoResult<String> {
    let unwritable = |message: String| IoError::detached(IoErrorKind::Unwritable{format, message});
    match format {
        Format::Yaml => serde_yaml::to_string(value)
            .map_err(|error| unwritable(error.to_string())),
        Format::Json => serde_json::to_string_pretty(value)
            .map(|s| s + "\n")
            .map_err(|error| unwritable(error.to_string())),
        Format::Toml => toml::to_string_pretty(value)
            .map_err(|error| unwritable(error.to_string())),
        Format::Obj => Err(IoError::detached(IoErrorKind::NotStructured(format))),
    }
}
