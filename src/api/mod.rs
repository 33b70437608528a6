//! High-level library API: build the square and round masters from a source
//! image, export every output size, and pack the containers. The CLI is a thin
//! wrapper over [`generate_icon_set`].
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::core::params::IconSetParams;
use crate::core::processing::enhance::build_master;
use crate::core::processing::mask::round_variant;
use crate::core::processing::resize::resize_from_master;
use crate::error::{Error, Result};
use crate::io::writers::write_png;
use crate::io::{Packager, load_normalized};
use crate::types::{IconSizes, SquareImage, Variant};

/// The two masters every output is derived from.
#[derive(Debug, Clone)]
pub struct Masters {
    pub square: SquareImage,
    pub round: SquareImage,
}

impl Masters {
    pub fn get(&self, variant: Variant) -> &SquareImage {
        match variant {
            Variant::Square => &self.square,
            Variant::Round => &self.round,
        }
    }
}

/// Files produced for one variant.
#[derive(Debug, Clone, Default)]
pub struct VariantOutputs {
    /// `(size, path)` for every PNG, ascending by size
    pub pngs: Vec<(u32, PathBuf)>,
    /// PNGs that go into the container, ascending by size
    pub container_inputs: Vec<PathBuf>,
    /// Container path, `None` when packaging was skipped
    pub container: Option<PathBuf>,
}

/// Summary of a completed run
#[derive(Debug, Clone)]
pub struct IconSetReport {
    pub output_dir: PathBuf,
    pub sizes: IconSizes,
    pub square: VariantOutputs,
    pub round: VariantOutputs,
}

impl IconSetReport {
    pub fn outputs(&self, variant: Variant) -> &VariantOutputs {
        match variant {
            Variant::Square => &self.square,
            Variant::Round => &self.round,
        }
    }
}

/// Builds both masters from an already normalized source.
pub fn build_masters(source: &SquareImage, target: u32) -> Result<Masters> {
    let square = build_master(source, target)?;
    info!("Masking round master");
    let round = round_variant(&square);
    Ok(Masters { square, round })
}

/// Writes one PNG per `(variant, size)` into `output_dir` and returns the
/// paths, split by variant.
pub fn export_sizes(
    masters: &Masters,
    sizes: &IconSizes,
    container_sizes: &[u32],
    output_dir: &Path,
) -> Result<(VariantOutputs, VariantOutputs)> {
    std::fs::create_dir_all(output_dir).map_err(|e| Error::write(output_dir, e))?;

    let mut square = VariantOutputs::default();
    let mut round = VariantOutputs::default();
    for size in sizes.iter() {
        for variant in Variant::ALL {
            let icon = resize_from_master(masters.get(variant), size)?;
            let path = output_dir.join(variant.png_file_name(size));
            write_png(&path, &icon)?;
            debug!("Wrote {} {}px -> {:?}", variant, size, path);

            let outputs = match variant {
                Variant::Square => &mut square,
                Variant::Round => &mut round,
            };
            if container_sizes.contains(&size) {
                outputs.container_inputs.push(path.clone());
            }
            outputs.pngs.push((size, path));
        }
    }
    Ok((square, round))
}

/// Runs the whole pipeline: validate, load, build masters, export every
/// size, then pack the square and round containers.
///
/// Fails fast; files written before a failure are left in place.
pub fn generate_icon_set(params: &IconSetParams) -> Result<IconSetReport> {
    params.validate()?;
    let input = std::path::absolute(&params.input).map_err(|e| Error::Input {
        path: params.input.clone(),
        reason: e.to_string(),
    })?;
    let output_dir =
        std::path::absolute(&params.output_dir).map_err(|e| Error::write(&params.output_dir, e))?;

    info!("Loading source image {:?}", input);
    let source = load_normalized(&input)?;
    info!("Normalized source to {}x{}", source.side(), source.side());

    let masters = build_masters(&source, params.target)?;
    drop(source);

    let sizes = params.output_sizes();
    info!("Exporting sizes: {}", sizes);
    let (mut square, mut round) =
        export_sizes(&masters, &sizes, &params.container_sizes, &output_dir)?;
    drop(masters);

    let packager = Packager::new(params.packager.clone());
    for (variant, outputs) in [(Variant::Square, &mut square), (Variant::Round, &mut round)] {
        let container = output_dir.join(variant.container_file_name());
        if packager.package(&container, &outputs.container_inputs)? {
            outputs.container = Some(container);
        }
    }

    Ok(IconSetReport {
        output_dir,
        sizes,
        square,
        round,
    })
}
