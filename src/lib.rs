use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use num_traits::Zero;
use quickcheck::{Arbitrary, Gen};

use cli::PotentialConfig;
use params::{ModelParameters, PatchGeometry};
use potentials::build_tables;
use projections::{angular_orientations, project_angular, project_radial, radial_orientations};
use sites::ParticleSymmetry;

pub mod cli;
pub mod consts;
pub mod error;
pub mod io;
pub mod params;
pub mod position;
pub mod potentials;
pub mod projections;
pub mod sites;

// for arbitrary trait
fn f64_in_range(g: &mut Gen, min: f64, max: f64) -> f64 {
    let mut r = f64::INFINITY;
    while !(r.is_normal() || r.is_zero()) {
        let x = f64::arbitrary(g).abs();
        r = x % (max - min) + min;
    }

    assert!(r.is_normal() || r.is_zero());
    assert!(r >= min && r <= max);
    r
}

// for testing
// coarse sampling steps keep the tables small
impl Arbitrary for ModelParameters {
    fn arbitrary(g: &mut Gen) -> Self {
        let ipc_radius = f64_in_range(g, 0.55, 0.8);
        let ecc1 = f64_in_range(g, 0.0, ipc_radius - 0.1);
        let ecc2 = f64_in_range(g, 0.0, ipc_radius - 0.1);

        let mut energies = [0.0; 6];
        for e in energies.iter_mut() {
            *e = f64_in_range(g, -10.0, 10.0);
        }
        let e_min = f64_in_range(g, 0.5, 10.0);

        let fake_hs_coefficient = f64_in_range(g, 1.0, 1000.0);
        let fake_hs_exponent = f64_in_range(g, 2.0, 20.0);
        let sampling_step = f64_in_range(g, 1e-3, 1e-2);
        let cutoff = f64_in_range(g, 1.0, 1e4);

        ModelParameters::new(
            energies,
            e_min,
            PatchGeometry::new(ecc1, ipc_radius - ecc1),
            PatchGeometry::new(ecc2, ipc_radius - ecc2),
            fake_hs_coefficient,
            fake_hs_exponent,
            sampling_step,
            cutoff,
        )
        .expect("generated parameters are consistent")
    }
}

/// Reads the parameters named by `config`, or the defaults when no input is
/// given. Files ending in `.toml` are parsed as toml, anything else as the
/// plain whitespace separated format.
pub fn load_parameters(config: &PotentialConfig) -> Result<ModelParameters> {
    let params = if config.input().is_empty() {
        ModelParameters::default()
    } else {
        let path = Path::new(config.input());
        let contents = fs::read_to_string(path)
            .with_context(|| format!("File {} could not be opened", path.display()))?;
        if path.extension().is_some_and(|ext| ext == "toml") {
            ModelParameters::from_toml_str(&contents)?
        } else {
            ModelParameters::from_legacy_str(&contents)?
        }
    };
    match config.sampling_step() {
        Some(step) => Ok(params.with_sampling_step(step)?),
        None => Ok(params),
    }
}

/// Builds every table and writes the LAMMPS files, the radial and angular
/// slices and the recap.
pub fn run(config: &PotentialConfig) -> Result<()> {
    let params = load_parameters(config)?;
    let symmetry = ParticleSymmetry::detect(&params, config.janus());
    log::info!(
        "Loaded {} particle with radius {} and interaction range {}",
        symmetry,
        params.ipc_radius(),
        params.interaction_range()
    );

    let potentials = build_tables(&params);
    log::info!("Built {} site-site tables", potentials.len());

    io::write_lammps_tables(&potentials, params.cutoff(), config.tables_dir())?;
    let toml = toml::to_string(&params)?;
    fs::write(config.toml(), toml)
        .with_context(|| format!("Unable to write {}", config.toml().display()))?;

    let radial = project_radial(
        &potentials,
        params.interaction_range(),
        &radial_orientations(&params, symmetry),
    );
    io::write_curves(&radial, &config.radial_dir())?;

    let angular = project_angular(&potentials, &params, &angular_orientations(symmetry));
    io::write_curves(&angular, &config.angular_dir())?;

    if config.png() {
        io::write_curves_png(&radial, "Radial potential", &config.radial_png())?;
        io::write_curves_png(&angular, "Angular potential", &config.angular_png())?;
    }

    io::write_recap(&params, symmetry, &potentials, &radial, &config.recap())?;
    log::info!("Wrote recap to {}", config.recap().display());
    Ok(())
}
