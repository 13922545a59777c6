use std::fs;

use approx::assert_relative_eq;
use ipc_potentials::{
    cli::PotentialConfig,
    io::{lammps_rows, write_lammps_tables},
    load_parameters,
    params::ModelParameters,
    potentials::{
        build_tables,
        overlap::{omega, omega_radial_derivative},
    },
    projections::{angular_orientations, project_angular, project_radial, radial_orientations},
    run,
    sites::{ParticleSymmetry, SitePair},
};
use quickcheck_macros::quickcheck;

const TEST_EPSILON: f64 = 0.000001;

const LEGACY_INPUT: &str = "1.0 -2.0 -2.0\n-5.0 -5.0 -5.0\n1.0\n0.22 0.38\n0.22 0.38\n500 15\n0.005 5000\n";

fn site_radii(params: &ModelParameters, pair: SitePair) -> (f64, f64) {
    let (a, b) = pair.sites();
    (params.site_radius(a), params.site_radius(b))
}

#[quickcheck]
fn omega_is_symmetric(params: ModelParameters) -> bool {
    SitePair::ALL.iter().all(|&pair| {
        let (ra, rb) = site_radii(&params, pair);
        (0..80).all(|k| {
            let r = k as f64 * 0.02;
            omega(ra, rb, r) == omega(rb, ra, r)
        })
    })
}

#[quickcheck]
fn omega_vanishes_past_contact(params: ModelParameters) -> bool {
    SitePair::ALL.iter().all(|&pair| {
        let (ra, rb) = site_radii(&params, pair);
        (1..20).all(|k| {
            let r = ra + rb + k as f64 * 0.01;
            omega(ra, rb, r) == 0.0 && omega_radial_derivative(ra, rb, r) == 0.0
        })
    })
}

#[quickcheck]
fn omega_is_flat_when_contained(params: ModelParameters) -> bool {
    SitePair::ALL.iter().all(|&pair| {
        let (ra, rb) = site_radii(&params, pair);
        let inner = (ra - rb).abs();
        let expected = 8.0 * ra.min(rb).powi(3);
        (0..=10).all(|k| {
            let r = inner * k as f64 / 10.0;
            omega(ra, rb, r) == expected && omega_radial_derivative(ra, rb, r) == 0.0
        })
    })
}

// the value is continuous at contact but the slope drops to zero there
#[test]
fn derivative_is_zero_exactly_at_contact() {
    let (ra, rb) = (0.6, 0.38);
    assert_eq!(omega(ra, rb, ra + rb), 0.0);
    assert_eq!(omega_radial_derivative(ra, rb, ra + rb), 0.0);
    assert!(omega_radial_derivative(ra, rb, ra + rb - 1e-3) < 0.0);
    assert_relative_eq!(omega(ra, rb, ra + rb - 1e-9), 0.0, epsilon = TEST_EPSILON);
}

#[quickcheck]
fn tables_have_one_sample_past_the_range(params: ModelParameters) -> bool {
    let potentials = build_tables(&params);
    let expected = (params.interaction_range() / params.sampling_step()) as usize + 2;
    potentials.len() == expected
        && SitePair::ALL
            .iter()
            .all(|&pair| potentials.table(pair).len() == expected)
}

#[quickcheck]
fn rebuilding_tables_is_bit_identical(params: ModelParameters) -> bool {
    let first = build_tables(&params);
    let second = build_tables(&params);
    let same = |a: &[f64], b: &[f64]| {
        a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.to_bits() == y.to_bits())
    };
    same(first.hard_sphere().potentials(), second.hard_sphere().potentials())
        && same(first.hard_sphere().forces(), second.hard_sphere().forces())
        && SitePair::ALL.iter().all(|&pair| {
            same(first.table(pair).potentials(), second.table(pair).potentials())
                && same(first.table(pair).forces(), second.table(pair).forces())
        })
}

#[quickcheck]
fn exported_rows_are_clamped(params: ModelParameters) -> bool {
    let potentials = build_tables(&params);
    let cutoff = params.cutoff();
    SitePair::ALL.iter().all(|&pair| {
        let rows = lammps_rows(&potentials, pair, cutoff);
        rows.len() == potentials.len() - 1
            && rows[0].index == 1
            && rows
                .iter()
                .all(|row| row.potential <= cutoff && row.force >= -cutoff)
            // unclamped forces stay below cutoff once scaled by r
            && rows
                .iter()
                .all(|row| row.force == -cutoff || row.force * row.distance <= cutoff)
            && rows
                .iter()
                .all(|row| row.potential.is_finite() && row.force.is_finite())
    })
}

#[test]
fn core_core_rows_include_the_hard_sphere() {
    let params = ModelParameters::default().with_sampling_step(0.01).unwrap();
    let potentials = build_tables(&params);
    let rows = lammps_rows(&potentials, SitePair::CoreCore, 1e15);
    // r = 0.5, deep inside the fake hard sphere
    let row = rows[49];
    assert_eq!(row.index, 50);
    let expected = potentials.table(SitePair::CoreCore).potentials()[50]
        + potentials.hard_sphere().potentials()[50];
    assert_relative_eq!(row.potential, expected, epsilon = TEST_EPSILON);
    let expected_force = -(potentials.table(SitePair::CoreCore).forces()[50]
        + potentials.hard_sphere().forces()[50]);
    assert_relative_eq!(row.force, expected_force, epsilon = TEST_EPSILON);

    // other pairs never see the hard sphere
    let bs1 = lammps_rows(&potentials, SitePair::CorePatch1, 1e12);
    assert_eq!(
        bs1[49].potential,
        potentials.table(SitePair::CorePatch1).potentials()[50]
    );
}

#[test]
fn repulsive_core_forces_are_capped() {
    let params = ModelParameters::default().with_sampling_step(0.001).unwrap();
    let potentials = build_tables(&params);
    let cutoff = params.cutoff();
    let rows = lammps_rows(&potentials, SitePair::CoreCore, cutoff);
    for idx in [1, 100, 900] {
        let row = rows[idx - 1];
        assert_eq!(row.index, idx);
        assert_eq!(row.potential, cutoff);
        assert_eq!(row.force, -cutoff);
    }
    for row in rows.iter().filter(|row| row.distance < 1.0) {
        assert!(row.force == -cutoff || row.force * row.distance <= cutoff);
    }
    // the overlap tail past the core is left alone
    let tail = rows.iter().find(|row| row.index == 1100).unwrap();
    let raw = potentials.table(SitePair::CoreCore).forces()[1100];
    assert_eq!(tail.force, -raw);
}

#[test]
fn table_files_follow_lammps_layout() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("tables");
    let params = ModelParameters::default().with_sampling_step(0.01).unwrap();
    let potentials = build_tables(&params);
    write_lammps_tables(&potentials, params.cutoff(), &out).unwrap();

    for pair in SitePair::ALL {
        let text = fs::read_to_string(out.join(pair.table_file_name())).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "# potentials for lammps");
        assert_eq!(lines[1], "");
        assert_eq!(lines[2], pair.name());
        assert_eq!(lines[3], format!("N {}", potentials.len() - 1));
        assert_eq!(lines[4], "");
        let rows = &lines[5..];
        assert_eq!(rows.len(), potentials.len() - 1);
        let first: Vec<&str> = rows[0].split('\t').collect();
        assert_eq!(first.len(), 4);
        assert_eq!(first[0], "1");
        assert_eq!(first[1], "1.000000e-02");
    }
}

// reflecting the sweep angle mirrors the configuration and swaps the two
// identical patches
#[test]
fn equatorial_curve_is_mirror_symmetric() {
    let params = ModelParameters::default().with_sampling_step(1e-4).unwrap();
    let symmetry = ParticleSymmetry::detect(&params, false);
    assert_eq!(symmetry, ParticleSymmetry::Symmetric);

    let potentials = build_tables(&params);
    let curves = project_angular(&potentials, &params, &angular_orientations(symmetry));
    let e = curves.iter().find(|c| c.name() == "E").unwrap();
    let points = e.points();
    assert_eq!(points.len(), 72);
    for k in 1..points.len() {
        let (angle, value) = points[k];
        let (mirror_angle, mirror_value) = points[points.len() - k];
        assert_eq!(angle + mirror_angle, 360.0);
        assert_relative_eq!(value, mirror_value, epsilon = 1e-2);
    }
}

#[test]
fn symmetric_particles_collapse_orientations() {
    let params = ModelParameters::default();
    assert_eq!(
        radial_orientations(&params, ParticleSymmetry::detect(&params, false)).len(),
        3
    );
    assert_eq!(angular_orientations(ParticleSymmetry::Symmetric).len(), 2);
    assert_eq!(angular_orientations(ParticleSymmetry::Asymmetric).len(), 3);
    assert_eq!(
        ParticleSymmetry::detect(&params, true),
        ParticleSymmetry::Janus
    );
}

#[quickcheck]
fn radial_curves_never_leave_the_tables(params: ModelParameters) -> bool {
    let potentials = build_tables(&params);
    let orientations = radial_orientations(&params, ParticleSymmetry::Asymmetric);
    let curves = project_radial(&potentials, params.interaction_range(), &orientations);
    curves
        .iter()
        .all(|c| c.points().iter().all(|&(r, v)| r >= 1.0 && v.is_finite()))
}

#[test]
fn run_writes_every_output() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out");
    let mut config = PotentialConfig::new("", out.to_str().unwrap());
    config.set_sampling_step(0.005);
    run(&config).unwrap();

    for pair in SitePair::ALL {
        assert!(config.table(pair).is_file());
    }
    assert!(config.toml().is_file());
    assert!(config.recap().is_file());
    for name in ["EE", "EP", "PP"] {
        assert!(config.radial_dir().join(format!("{}.dat", name)).is_file());
    }
    for name in ["E", "P"] {
        assert!(config.angular_dir().join(format!("{}.dat", name)).is_file());
    }

    let angular = fs::read_to_string(config.angular_dir().join("E.dat")).unwrap();
    assert_eq!(angular.lines().count(), 72);
    assert!(angular.starts_with("0\t"));

    // the dumped parameters can be fed back in
    let dumped = fs::read_to_string(config.toml()).unwrap();
    let params = ModelParameters::from_toml_str(&dumped).unwrap();
    assert_relative_eq!(params.sampling_step(), 0.005, epsilon = TEST_EPSILON);
}

#[test]
fn janus_run_uses_janus_orientations() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("janus");
    let mut config = PotentialConfig::new("", out.to_str().unwrap());
    config.set_sampling_step(0.01);
    config.set_janus(true);
    run(&config).unwrap();
    for name in ["EE", "PP", "EP"] {
        assert!(config.angular_dir().join(format!("{}.dat", name)).is_file());
    }
    assert!(config.radial_dir().join("JANUS_PP.dat").is_file());
}

#[test]
fn legacy_input_file_is_loaded() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.in");
    fs::write(&input, LEGACY_INPUT).unwrap();
    let config = PotentialConfig::new(input.to_str().unwrap(), "unused");
    let params = load_parameters(&config).unwrap();
    assert_relative_eq!(params.sampling_step(), 0.005, epsilon = TEST_EPSILON);
    assert_relative_eq!(params.interaction_range(), 1.2, epsilon = TEST_EPSILON);
}

#[test]
fn inconsistent_geometry_aborts_before_any_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.in");
    fs::write(
        &input,
        LEGACY_INPUT.replacen("0.22 0.38\n0.22 0.38", "0.22 0.38\n0.25 0.38", 1),
    )
    .unwrap();
    let out = dir.path().join("out");
    let config = PotentialConfig::new(input.to_str().unwrap(), out.to_str().unwrap());
    assert!(run(&config).is_err());
    assert!(!out.exists());
}

#[test]
fn missing_input_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("nope.in");
    let config = PotentialConfig::new(input.to_str().unwrap(), "unused");
    assert!(load_parameters(&config).is_err());
}
