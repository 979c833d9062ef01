pub mod geo_3d;
pub mod hooks;
pub mod args;
pub mod io;
mod crate_errors;

use itertools::{EitherOrBoth, Itertools};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;

use geo_3d::{Point3d, Vector3d};
use hooks::{HookChoice, LogHook, TextHook};

pub use crate_errors::{
    Affine3dError,
    Affine3dResult,
};

/// Output of the `sample` command.
#[derive(Debug, Serialize)]
pub struct SampleOutput {
    pub vectors: Vec<Vector3d>,
}

/// Output of the `combo` command.
#[derive(Debug, Serialize)]
pub struct ComboOutput {
    pub point: Point3d,
}

/// Output of the `bbox` command.
#[derive(Debug, Serialize)]
pub struct BboxOutput {
    pub count: usize,
    pub min: Point3d,
    pub max: Point3d,
}

/// Run a parsed command line.
/// Returns the text to print, or an `Err`.
pub fn run(cli: args::Affine3dCli) -> Affine3dResult<String> {
    match cli.command {
        args::Command::Sample(sample_args) => sample(&sample_args),
        args::Command::Combo(combo_args) => combo(&combo_args),
        args::Command::Bbox(bbox_args) => bbox(&bbox_args),
    }
}

/// Sample random unit vectors.
fn sample(sample_args: &args::SampleArgs) -> Affine3dResult<String> {
    sample_args.validate()?;
    log::debug!("Sampling {} unit vectors (seed: {:?})", sample_args.count, sample_args.seed);

    let vectors = match sample_args.seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            (0..sample_args.count).map(|_| Vector3d::random_unit_with(&mut rng)).collect::<Vec<_>>()
        },
        None => (0..sample_args.count).map(|_| Vector3d::random_unit()).collect::<Vec<_>>(),
    };

    render(&SampleOutput{vectors}, sample_args.output.format, |output, hook| {
        for vector in output.vectors.iter() {
            vector.emit_normal(hook);
        }
    })
}

/// Fold the affine combination over the given targets.
fn combo(combo_args: &args::ComboArgs) -> Affine3dResult<String> {
    let unmatched = combo_args.scalars.iter()
        .zip_longest(combo_args.targets.iter())
        .filter(|pair| !matches!(pair, EitherOrBoth::Both(_, _)))
        .count();
    if unmatched > 0 {
        log::warn!(
            "{} scalars and {} targets given; ignoring the last {} unmatched",
            combo_args.scalars.len(), combo_args.targets.len(), unmatched
        );
    }

    let point = combo_args.from.combos(&combo_args.scalars, &combo_args.targets);
    log::debug!("Combination from {} over {} terms: {}", combo_args.from, combo_args.scalars.len().min(combo_args.targets.len()), point);

    render(&ComboOutput{point}, combo_args.output.format, |output, hook| {
        output.point.emit_vertex(hook);
    })
}

/// Bound the points of a point cloud file.
fn bbox(bbox_args: &args::BboxArgs) -> Affine3dResult<String> {
    let cloud = io::read_point_cloud(&bbox_args.input_path)?;
    log::debug!("Loaded {} points from {}", cloud.points.len(), bbox_args.input_path);

    let (min, max) = geo_3d::bounding_box(&cloud.points)?;
    render(&BboxOutput{count: cloud.points.len(), min, max}, bbox_args.output.format, |output, hook| {
        output.min.emit_vertex(hook);
        output.max.emit_vertex(hook);
    })
}

/// Render a command's output.
/// OBJ output is whatever `emit` sends through a `TextHook`;
/// structured formats serialize `output`, tracing the emitted geometry through a `LogHook`.
fn render<T, F>(output: &T, format: args::Format, emit: F) -> Affine3dResult<String>
where
    T: Serialize,
    F: Fn(&T, &mut HookChoice),
{
    let mut hook: HookChoice = match format {
        args::Format::Obj => TextHook::new().into(),
        _ => LogHook.into(),
    };
    emit(output, &mut hook);

    match hook {
        HookChoice::Text(text) => Ok(text.into_string()),
        _ => Ok(io::to_format_string(output, format)?),
    }
}
