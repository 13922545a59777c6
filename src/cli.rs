use std::path::{Path, PathBuf};

use clap::Parser;

use crate::sites::SitePair;

/// Tabulates the site-site potentials of an inverse patchy colloid for LAMMPS.
#[derive(Parser, Debug, Clone)]
pub struct PotentialConfig {
    /// Parameter file, either the plain whitespace separated format or toml
    #[arg(long, default_value = "")]
    input: String,
    #[arg(long, default_value = "./out")]
    output_dir: String,
    /// Treat the particle as a Janus particle when choosing plot orientations
    #[arg(long, default_value_t = false)]
    janus: bool,
    /// Also render the radial and angular curves as png
    #[arg(long, default_value_t = false)]
    png: bool,
    /// Override the sampling step of the input file
    #[arg(long)]
    sampling_step: Option<f64>,
}

impl PotentialConfig {
    pub fn new(input: &str, output_dir: &str) -> Self {
        Self {
            input: input.to_string(),
            output_dir: output_dir.to_string(),
            janus: false,
            png: false,
            sampling_step: None,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn output_dir(&self) -> &str {
        &self.output_dir
    }

    pub fn janus(&self) -> bool {
        self.janus
    }

    pub fn set_janus(&mut self, janus: bool) {
        self.janus = janus;
    }

    pub fn png(&self) -> bool {
        self.png
    }

    pub fn sampling_step(&self) -> Option<f64> {
        self.sampling_step
    }

    pub fn set_sampling_step(&mut self, step: f64) {
        self.sampling_step = Some(step);
    }

    pub fn tables_dir(&self) -> &Path {
        Path::new(self.output_dir())
    }

    pub fn table(&self, pair: SitePair) -> PathBuf {
        self.tables_dir().join(pair.table_file_name())
    }

    pub fn toml(&self) -> PathBuf {
        self.tables_dir().join("params.toml")
    }

    pub fn recap(&self) -> PathBuf {
        self.tables_dir().join("recap.txt")
    }

    pub fn radial_dir(&self) -> PathBuf {
        PathBuf::from(format!("{}_radial_plots", self.output_dir()))
    }

    pub fn angular_dir(&self) -> PathBuf {
        PathBuf::from(format!("{}_angular_plots", self.output_dir()))
    }

    pub fn radial_png(&self) -> PathBuf {
        self.radial_dir().join("radial.png")
    }

    pub fn angular_png(&self) -> PathBuf {
        self.angular_dir().join("angular.png")
    }
}
