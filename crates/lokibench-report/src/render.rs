//! README rendering with Handlebars.
//!
//! Templates receive pre-formatted values: `run_count` and a `measurements`
//! list whose items carry `name`, `anchor`, `units`, `minutes` (sample
//! x-axis) and `runs` (`description`, `samples`, `min`, `mean`, `max`,
//! `values`).

use crate::ReportError;
use crate::aggregate::{MeasurementGroup, RunSeries, sample_minutes};
use handlebars::Handlebars;
use serde::Serialize;

/// Template used when none is supplied
pub const DEFAULT_TEMPLATE: &str = include_str!("../templates/README.md.hbs");

const README_TEMPLATE_NAME: &str = "readme";
const MISSING_VALUE: &str = "-";

#[derive(Serialize)]
struct ReadmeContext {
    run_count: usize,
    measurements: Vec<GroupView>,
}

#[derive(Serialize)]
struct GroupView {
    name: String,
    anchor: String,
    units: String,
    minutes: Vec<u64>,
    runs: Vec<RunView>,
}

#[derive(Serialize)]
struct RunView {
    description: String,
    samples: usize,
    min: String,
    mean: String,
    max: String,
    values: Vec<String>,
}

fn format_value(value: f64) -> String {
    format!("{value:.2}")
}

impl From<&RunSeries> for RunView {
    fn from(series: &RunSeries) -> Self {
        let stat = |f: fn(&crate::SeriesStats) -> f64| {
            series
                .stats
                .as_ref()
                .map(|s| format_value(f(s)))
                .unwrap_or_else(|| MISSING_VALUE.to_string())
        };

        Self {
            description: series.description.clone(),
            samples: series.values.len(),
            min: stat(|s| s.min),
            mean: stat(|s| s.mean),
            max: stat(|s| s.max),
            values: series.values.iter().copied().map(format_value).collect(),
        }
    }
}

impl From<&MeasurementGroup> for GroupView {
    fn from(group: &MeasurementGroup) -> Self {
        let longest = group.runs.iter().map(|r| r.values.len()).max().unwrap_or(0);
        Self {
            name: group.name.clone(),
            anchor: heading_anchor(&group.name),
            units: group.units.clone(),
            minutes: sample_minutes(longest),
            runs: group.runs.iter().map(RunView::from).collect(),
        }
    }
}

/// Markdown heading anchor as generated by common renderers.
fn heading_anchor(heading: &str) -> String {
    heading
        .chars()
        .filter_map(|c| match c {
            ' ' => Some('-'),
            c if c.is_alphanumeric() || c == '-' || c == '_' => Some(c.to_ascii_lowercase()),
            _ => None,
        })
        .collect()
}

/// README renderer holding one registered template
pub struct ReadmeRenderer {
    handlebars: Handlebars<'static>,
}

impl ReadmeRenderer {
    /// Renderer using [`DEFAULT_TEMPLATE`]
    pub fn new() -> Result<Self, ReportError> {
        Self::with_template(DEFAULT_TEMPLATE)
    }

    /// Renderer using a caller-supplied template
    pub fn with_template(template: &str) -> Result<Self, ReportError> {
        let mut hbs = Handlebars::new();

        // Markdown output; nothing to HTML-escape.
        hbs.register_escape_fn(handlebars::no_escape);
        hbs.set_strict_mode(true);
        hbs.register_template_string(README_TEMPLATE_NAME, template)?;

        Ok(Self { handlebars: hbs })
    }

    /// Render the README comparing `run_count` runs, one section per group
    pub fn render(
        &self,
        run_count: usize,
        groups: &[MeasurementGroup],
    ) -> Result<String, ReportError> {
        let context = ReadmeContext {
            run_count,
            measurements: groups.iter().map(GroupView::from).collect(),
        };

        Ok(self.handlebars.render(README_TEMPLATE_NAME, &context)?)
    }
}
