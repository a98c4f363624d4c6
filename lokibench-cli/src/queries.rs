//! Query catalog printing

use crate::CliError;
use clap::ValueEnum;
use lokibench_metrics::{Annotation, Measurement, PromDuration, catalog};
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum QuerySet {
    Write,
    Read,
    Index,
    Resources,
    All,
}

/// Measurements of `set`; `job` narrows the resources set to one job.
pub fn select(set: QuerySet, window: PromDuration, job: Option<&str>) -> Vec<Measurement> {
    match set {
        QuerySet::Write => catalog::write_path(window),
        QuerySet::Read => catalog::read_path(window),
        QuerySet::Index => catalog::index(window),
        QuerySet::Resources => match job {
            Some(job) => catalog::resources(job, window, Annotation::new(job)),
            None => catalog::COMPONENTS
                .into_iter()
                .flat_map(|(job, annotation)| catalog::resources(job, window, annotation))
                .collect(),
        },
        QuerySet::All => catalog::all(window),
    }
}

pub fn run_queries_command(
    set: QuerySet,
    window: PromDuration,
    job: Option<&str>,
    json: bool,
) -> Result<(), CliError> {
    let measurements = select(set, window, job);
    tracing::debug!(?set, %window, count = measurements.len(), "Selected measurements");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_measurements(&mut out, &measurements, json)
}

fn write_measurements(
    out: &mut impl Write,
    measurements: &[Measurement],
    json: bool,
) -> Result<(), CliError> {
    if json {
        serde_json::to_writer_pretty(&mut *out, measurements)?;
        writeln!(out)?;
        return Ok(());
    }

    for m in measurements {
        writeln!(out, "# {} [{}] ({})", m.name, m.unit, m.annotation)?;
        writeln!(out, "{}", m.query)?;
        writeln!(out)?;
    }
    Ok(())
}
