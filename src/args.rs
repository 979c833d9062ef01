use clap::{
    Args,
    Parser,
    Subcommand,
    ValueEnum,
};
use strum::{
    Display,
    EnumIter,
    IntoEnumIterator,
};

use crate::geo_3d::Point3d;

mod proc_errors;
pub use proc_errors::{
    ArgError,
    ProcResult,
    err_str,
};

/// Affine geometry toolkit for points and vectors in 3-space.
#[derive(Debug, Parser)]
#[command(name = "affine3d")]
pub struct Affine3dCli {
    #[clap(subcommand)]
    pub command: Command,
}

/// Parser for the subcommands of the affine3d binary using clap.
#[derive(Debug, Subcommand)]
pub enum Command {
    #[command(name = "sample")]
    /// Sample random unit vectors, uniformly distributed over the sphere.
    Sample(SampleArgs),

    #[command(name = "combo")]
    /// Compute the iterated affine combination of a starting point with target points.
    Combo(ComboArgs),

    #[command(name = "bbox")]
    /// Compute the axis-aligned bounding box of a point cloud file.
    Bbox(BboxArgs),
}

/// Output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, EnumIter, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Format {
    Yaml,
    Json,
    Toml,
    /// Wavefront OBJ `v` / `vn` lines.
    Obj,
}
impl Format {
    /// File extensions associated with the format.
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Format::Yaml => &["yaml", "yml"],
            Format::Json => &["json"],
            Format::Toml => &["toml"],
            Format::Obj => &["obj"],
        }
    }

    /// Whether values of any serializable type can be written in this format.
    pub fn is_structured(&self) -> bool {
        !matches!(self, Format::Obj)
    }

    /// Guess the format from a file path's extension.
    pub fn from_path(path: &str) -> Option<Format> {
        let extension = std::path::Path::new(path).extension()?.to_str()?;
        Format::iter().find(|format| format.extensions().contains(&extension))
    }
}

/// Output arguments, used in all commands. Compiled with clap.
#[derive(Debug, Args)]
pub struct OutputArgs {
    #[arg(short, long, value_enum, default_value_t = Format::Yaml)]
    /// Output format.
    pub format: Format,
}

/// Compiled arguments for the sample command. Compiled with clap.
#[derive(Debug, Args)]
pub struct SampleArgs {
    #[arg(short = 'n', long, default_value_t = 1)]
    /// Number of vectors to sample.
    pub count: usize,

    #[arg(short, long)]
    /// Seed for a reproducible sequence (thread-local generator if omitted).
    pub seed: Option<u64>,

    #[command(flatten)]
    pub output: OutputArgs,
}
impl SampleArgs {
    /// Check the argument values clap cannot check on its own.
    pub fn validate(&self) -> ProcResult<()> {
        if self.count == 0 {
            return err_str("Sample count must be at least 1");
        }
        Ok(())
    }
}

/// Compiled arguments for the combo command. Compiled with clap.
#[derive(Debug, Args)]
pub struct ComboArgs {
    #[arg(long, allow_hyphen_values = true)]
    /// Starting point, as `x,y,z`.
    pub from: Point3d,

    #[arg(long = "to", allow_hyphen_values = true)]
    /// Target point, as `x,y,z`. Repeat for each term.
    pub targets: Vec<Point3d>,

    #[arg(long = "scalar", allow_hyphen_values = true)]
    /// Fraction of the way to move toward the matching target. Repeat for each term.
    pub scalars: Vec<f64>,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Compiled arguments for the bbox command. Compiled with clap.
#[derive(Debug, Args)]
pub struct BboxArgs {
    #[arg(short, long = "input")]
    /// Path to the point cloud file (.json, .toml, .yaml/.yml).
    pub input_path: String,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Parse the command line arguments, exiting with clap's message on failure.
pub fn parse_cli_args() -> Affine3dCli {
    Affine3dCli::parse()
}

/// Parse arguments from an iterator, returning clap's error instead of exiting.
pub fn parse_cli_args_from<I, T>(args: I) -> ProcResult<Affine3dCli>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Ok(Affine3dCli::try_parse_from(args)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_from_path() {
        assert_eq!(Format::from_path("cloud.yml"), Some(Format::Yaml));
        assert_eq!(Format::from_path("dir.v2/cloud.json"), Some(Format::Json));
        assert_eq!(Format::from_path("cloud.toml"), Some(Format::Toml));
        assert_eq!(Format::from_path("mesh.obj"), Some(Format::Obj));
        assert_eq!(Format::from_path("cloud.csv"), None);
        assert_eq!(Format::from_path("json"), None);
    }

    #[test]
    fn format_names() {
        let names = Format::iter().map(|format| format.to_string()).collect::<Vec<_>>();
        assert_eq!(names, vec!["yaml", "json", "toml", "obj"]);
    }

    #[test]
    fn parse_sample() {
        let cli = parse_cli_args_from(["affine3d", "sample", "-n", "5", "--seed", "7", "-f", "json"]).unwrap();
        match cli.command {
            Command::Sample(sample_args) => {
                assert_eq!(sample_args.count, 5);
                assert_eq!(sample_args.seed, Some(7));
                assert_eq!(sample_args.output.format, Format::Json);
            },
            other => panic!("Unexpected command: {:?}", other),
        }
    }

    #[test]
    fn parse_combo_with_negative_values() {
        let cli = parse_cli_args_from([
            "affine3d", "combo",
            "--from", "-1,0,2",
            "--to", "3,-4,0", "--scalar", "-0.5",
            "--to", "0,0,0", "--scalar", "0.25",
        ]).unwrap();
        match cli.command {
            Command::Combo(combo_args) => {
                assert_eq!(combo_args.from, Point3d::new(-1.0, 0.0, 2.0));
                assert_eq!(combo_args.targets, vec![Point3d::new(3.0, -4.0, 0.0), Point3d::ORIGIN]);
                assert_eq!(combo_args.scalars, vec![-0.5, 0.25]);
                assert_eq!(combo_args.output.format, Format::Yaml);
            },
            other => panic!("Unexpected command: {:?}", other),
        }
    }

    #[test]
    fn parse_rejects_bad_point() {
        let result = parse_cli_args_from(["affine3d", "combo", "--from", "1,2"]);
        assert!(matches!(result, Err(ArgError::ClapError(_))));
    }

    #[test]
    fn zero_count_is_invalid() {
        let cli = parse_cli_args_from(["affine3d", "sample", "--count", "0"]).unwrap();
        match cli.command {
            Command::Sample(sample_args) => assert!(sample_args.validate().is_err()),
            other => panic!("Unexpected command: {:?}", other),
        }
    }
}
