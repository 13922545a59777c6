use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::Path,
};

use anyhow::{anyhow, Context, Result};

use crate::{
    params::ModelParameters,
    potentials::SiteSitePotentials,
    projections::{Abscissa, Curve},
    sites::{ParticleSymmetry, SitePair},
};

/// Formats like C's `%.6e`: `1.234560e-05`, `-3.000000e+02`.
pub fn format_sci(x: f64) -> String {
    if x.is_nan() {
        return "nan".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    let s = format!("{:.6e}", x);
    match s.split_once('e') {
        Some((mantissa, exponent)) => {
            let exponent: i32 = exponent.parse().unwrap_or(0);
            let sign = if exponent < 0 { '-' } else { '+' };
            format!("{}e{}{:02}", mantissa, sign, exponent.abs())
        }
        None => s,
    }
}

/// One line of a LAMMPS table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LammpsRow {
    pub index: usize,
    pub distance: f64,
    pub potential: f64,
    pub force: f64,
}

/// Rows for `pair`, index 0 (r = 0) left out.
///
/// Potentials are clamped from above to `cutoff`. The force column is the
/// negated tabulated force, replaced by `-cutoff` once the raw force scaled
/// by `r` drops below `-cutoff`. The core-core rows carry the fake hard
/// sphere on top of the overlap.
pub fn lammps_rows(potentials: &SiteSitePotentials, pair: SitePair, cutoff: f64) -> Vec<LammpsRow> {
    let table = potentials.table(pair);
    let hs = potentials.hard_sphere();
    let step = potentials.sampling_step();

    (1..potentials.len())
        .map(|i| {
            let (mut u, mut f) = (table.potentials()[i], table.forces()[i]);
            if pair == SitePair::CoreCore {
                u += hs.potentials()[i];
                f += hs.forces()[i];
            }
            let distance = i as f64 * step;
            let potential = if u > cutoff { cutoff } else { u };
            let force = if f * distance < -cutoff { -cutoff } else { -f };
            LammpsRow {
                index: i,
                distance,
                potential,
                force,
            }
        })
        .collect()
}

pub fn write_lammps_table<W: Write>(w: &mut W, pair: SitePair, rows: &[LammpsRow]) -> Result<()> {
    write!(w, "# potentials for lammps\n\n{}\nN {}\n\n", pair.name(), rows.len())?;
    for row in rows {
        writeln!(
            w,
            "{}\t{}\t{}\t{}",
            row.index,
            format_sci(row.distance),
            format_sci(row.potential),
            format_sci(row.force)
        )?;
    }
    Ok(())
}

/// Writes `<pair>.table` for all six pairs into `output_dir`.
pub fn write_lammps_tables(
    potentials: &SiteSitePotentials,
    cutoff: f64,
    output_dir: &Path,
) -> Result<()> {
    fs::create_dir_all(output_dir).with_context(|| {
        format!("Problem while creating the directory {}", output_dir.display())
    })?;
    for pair in SitePair::ALL {
        let path = output_dir.join(pair.table_file_name());
        let rows = lammps_rows(potentials, pair, cutoff);
        let mut w = create_file(&path)?;
        write_lammps_table(&mut w, pair, &rows)
            .and_then(|_| w.flush().map_err(Into::into))
            .with_context(|| format!("Unable to write {}", path.display()))?;
        log::info!("Wrote {} rows to {}", rows.len(), path.display());
    }
    Ok(())
}

pub fn write_curve<W: Write>(w: &mut W, curve: &Curve) -> Result<()> {
    for &(x, v) in curve.points() {
        match curve.abscissa() {
            Abscissa::Distance => writeln!(w, "{}\t{}", format_sci(x), format_sci(v))?,
            Abscissa::Degrees => writeln!(w, "{}\t{}", x.round() as i64, format_sci(v))?,
        }
    }
    Ok(())
}

/// One `<name>.dat` file per curve.
pub fn write_curves(curves: &[Curve], dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Problem while creating the directory {}", dir.display()))?;
    for curve in curves {
        let path = dir.join(format!("{}.dat", curve.name()));
        let mut w = create_file(&path)?;
        write_curve(&mut w, curve)
            .and_then(|_| w.flush().map_err(Into::into))
            .with_context(|| format!("Unable to write {}", path.display()))?;
        log::debug!("Wrote {} points to {}", curve.len(), path.display());
    }
    Ok(())
}

pub fn write_curves_png(curves: &[Curve], caption: &str, pathname: &Path) -> Result<()> {
    use plotters::prelude::*;

    let (x_min, x_max) = curves
        .iter()
        .flat_map(|c| c.points().iter().map(|&(x, _)| x))
        .fold((f64::MAX, f64::MIN), |(lo, hi), x| (lo.min(x), hi.max(x)));
    let (y_min, y_max) = curves
        .iter()
        .filter_map(|c| c.value_range())
        .fold((f64::MAX, f64::MIN), |(lo, hi), (a, b)| (lo.min(a), hi.max(b)));
    if x_min > x_max || y_min > y_max {
        return Err(anyhow!("Nothing to plot in {}", pathname.display()));
    }
    // flat curves still need a visible y axis
    let pad = ((y_max - y_min) * 0.05).max(1e-3);

    let root_area = BitMapBackend::new(pathname, (1000, 800)).into_drawing_area();
    root_area.fill(&WHITE).map_err(plot_error)?;

    let mut ctx = ChartBuilder::on(&root_area)
        .set_label_area_size(LabelAreaPosition::Left, 60)
        .set_label_area_size(LabelAreaPosition::Bottom, 40)
        .caption(caption, ("sans-serif", 32))
        .build_cartesian_2d(x_min..x_max, (y_min - pad)..(y_max + pad))
        .map_err(plot_error)?;
    ctx.configure_mesh().draw().map_err(plot_error)?;

    for (idx, curve) in curves.iter().enumerate() {
        let color = Palette99::pick(idx).mix(0.9);
        let points: Vec<(f64, f64)> = curve
            .points()
            .iter()
            .copied()
            .filter(|(_, v)| v.is_finite())
            .collect();
        ctx.draw_series(LineSeries::new(points, color.stroke_width(2)))
            .map_err(plot_error)?
            .label(curve.name())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }
    ctx.configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(plot_error)?;
    root_area.present().map_err(plot_error)?;
    Ok(())
}

/// Human readable summary of a run: inputs, derived geometry and the value
/// of every radial curve at contact.
pub fn write_recap(
    params: &ModelParameters,
    symmetry: ParticleSymmetry,
    potentials: &SiteSitePotentials,
    radial: &[Curve],
    pathname: &Path,
) -> Result<()> {
    let mut w = create_file(pathname)?;
    let body = toml::to_string(params)?;
    writeln!(&mut w, "# input parameters\n{}", body)?;
    writeln!(&mut w, "# derived geometry")?;
    writeln!(&mut w, "particle symmetry: {}", symmetry)?;
    writeln!(&mut w, "ipc radius: {}", params.ipc_radius())?;
    writeln!(&mut w, "interaction range: {}", params.interaction_range())?;
    writeln!(&mut w, "table length: {}", potentials.len())?;
    writeln!(&mut w, "\n# contact values")?;
    for curve in radial {
        match curve.points().first() {
            Some(&(_, v)) => writeln!(&mut w, "{}: {}", curve.name(), format_sci(v))?,
            None => writeln!(&mut w, "{}: -", curve.name())?,
        }
    }
    w.flush()
        .with_context(|| format!("Unable to write {}", pathname.display()))?;
    Ok(())
}

fn create_file(path: &Path) -> Result<BufWriter<File>> {
    let file = File::create(path)
        .with_context(|| format!("Unable to create file {}", path.display()))?;
    Ok(BufWriter::new(file))
}

fn plot_error<E: std::fmt::Display>(e: E) -> anyhow::Error {
    anyhow!("Plotting failed: {}", e)
}
