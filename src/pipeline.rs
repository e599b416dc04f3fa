//! Load, validate, render and save, in that order.

use crate::analysis::GridStats;
use crate::config::Config;
use crate::data::{load_grid_file, Header};
use crate::logging::StageSpan;
use crate::render::{build_figure, encode_png, save_png, Figure};
use crate::visualization::Presenter;
use crate::Result;
use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// What a pipeline run produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub input: PathBuf,
    pub output: PathBuf,
    pub header: Header,
    pub stats: GridStats,
    pub canvas: (u32, u32),
    pub dpi: u32,
    pub title: String,
    pub png_bytes: usize,
    pub report: Option<PathBuf>,
}

/// JSON sidecar written when `paths.report` is set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub rendered_at: DateTime<Utc>,
    #[serde(flatten)]
    pub summary: RunSummary,
}

/// Summary plus the in-memory figure, for callers that want to display it.
pub struct Rendered {
    pub summary: RunSummary,
    pub figure: Figure,
}

/// Run every step except display.
///
/// Validation happens before any rendering, so a rejected grid leaves the
/// output path untouched.
pub fn render(config: &Config) -> Result<Rendered> {
    let paths = &config.paths;
    config
        .validate()
        .map_err(|errors| anyhow::anyhow!("Invalid configuration: {}", errors.join("; ")))?;

    let stage = StageSpan::new("load");
    let data = stage
        .in_scope(|| load_grid_file(&paths.input))
        .with_context(|| format!("Failed to load grid data from {}", paths.input.display()))?;
    stage.finish();

    let stats = GridStats::from_grid(&data.grid)
        .ok_or_else(|| anyhow::anyhow!("Grid in {} is empty", paths.input.display()))?;
    tracing::info!(
        width = data.header.width,
        height = data.header.height,
        elapsed_s = data.header.elapsed_seconds,
        min = stats.min,
        max = stats.max,
        mean = format!("{:.2}", stats.mean),
        saturated = stats.saturated,
        "Grid loaded"
    );

    let stage = StageSpan::new("build");
    let figure = stage.in_scope(|| build_figure(&data, &stats, &config.figure));
    stage.finish();

    let stage = StageSpan::new("encode");
    let bytes = stage.in_scope(|| encode_png(&figure))?;
    stage.finish();

    save_png(&bytes, &paths.output)?;
    tracing::info!(output = %paths.output.display(), bytes = bytes.len(), "Figure saved");

    let summary = RunSummary {
        input: paths.input.clone(),
        output: paths.output.clone(),
        header: data.header,
        stats,
        canvas: (figure.width(), figure.height()),
        dpi: figure.dpi,
        title: figure.title.clone(),
        png_bytes: bytes.len(),
        report: paths.report.clone(),
    };

    if let Some(report_path) = &paths.report {
        write_report(&summary, report_path)?;
    }

    Ok(Rendered { summary, figure })
}

/// Run the pipeline without displaying anything.
pub fn run(config: &Config) -> Result<RunSummary> {
    render(config).map(|rendered| rendered.summary)
}

/// Run the pipeline, then hand the figure to `presenter`.
///
/// A presenter failure (no display, window refused) is logged and does not
/// fail the run: the figure is already on disk.
pub fn run_and_present(config: &Config, presenter: &dyn Presenter) -> Result<RunSummary> {
    let Rendered { summary, figure } = render(config)?;
    if let Err(e) = presenter.present(&figure) {
        tracing::warn!(presenter = presenter.name(), error = %e, "Could not display figure");
    }
    Ok(summary)
}

fn write_report(summary: &RunSummary, path: &Path) -> Result<()> {
    let report = RunReport {
        rendered_at: Utc::now(),
        summary: summary.clone(),
    };
    let json = serde_json::to_string_pretty(&report)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, json).with_context(|| format!("Failed to write report {}", path.display()))?;
    tracing::debug!(report = %path.display(), "Run report written");
    Ok(())
}
