//! Built-in seed dataset for the dashboard store.
//!
//! The store is constructed once from a static category/widget tree. The
//! built-in fixture mirrors the CNAPP dashboard layout (CSPM, CWPP and
//! registry scan sections). A JSON file with the same shape can replace it
//! via `dashboard.seed_file` in the config.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::{Category, ChartDatum, Dashboard, Widget};

/// Errors that can occur when loading a seed file.
#[derive(Error, Debug)]
pub enum SeedError {
    /// Failed to read the seed file from disk.
    #[error("Failed to read seed file: {path}")]
    Read {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The seed file is not a valid dashboard document.
    #[error("Invalid seed file {path}: {source}")]
    Parse {
        /// Path to the file containing the error.
        path: PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// A chart value or bar total is negative, NaN or infinite.
    #[error("Invalid {field} {value} for widget {widget_id} in {path}: must be finite and non-negative")]
    InvalidValue {
        /// Path to the seed file.
        path: PathBuf,
        /// Widget carrying the value.
        widget_id: String,
        /// `chartData.value` or `total`.
        field: &'static str,
        /// The offending number.
        value: f64,
    },

    /// Two categories share an id.
    #[error("Duplicate category id {category_id:?} in {path}")]
    DuplicateCategory {
        /// Path to the seed file.
        path: PathBuf,
        /// The repeated id.
        category_id: String,
    },
}

/// Returns the built-in dashboard fixture.
pub fn initial_dashboard() -> Dashboard {
    Dashboard::new(vec![
        Category::new(
            "cspm-executive",
            "CSPM Executive Dashboard",
            vec![
                Widget::donut(
                    "widget-1",
                    "Cloud Accounts",
                    "Connected (2)\nNot Connected (2)",
                    vec![
                        ChartDatum::new("Connected", 2, "#5470C6"),
                        ChartDatum::new("Not Connected", 2, "#C4C4C4"),
                    ],
                ),
                Widget::donut(
                    "widget-2",
                    "Cloud Account Risk Assessment",
                    "Failed (1689)\nWarning (681)\nNot available (36)\nPassed (7253)",
                    vec![
                        ChartDatum::new("Failed", 1689, "#C1232B"),
                        ChartDatum::new("Warning", 681, "#FCCE10"),
                        ChartDatum::new("Not available", 36, "#B7B7B7"),
                        ChartDatum::new("Passed", 7253, "#27727B"),
                    ],
                ),
            ],
        ),
        Category::new(
            "cwpp-dashboard",
            "CWPP Dashboard",
            vec![
                Widget::donut(
                    "widget-3",
                    "Top 5 Namespace Specific Alerts",
                    "Top 5 Namespace Specific Alerts",
                    vec![
                        ChartDatum::new("Critical", 45, "#C1232B"),
                        ChartDatum::new("High", 85, "#E87C25"),
                        ChartDatum::new("Medium", 120, "#FCCE10"),
                    ],
                ),
                Widget::donut(
                    "widget-4",
                    "Workload Alerts",
                    "Workload Alerts",
                    vec![
                        ChartDatum::new("Critical", 30, "#C1232B"),
                        ChartDatum::new("High", 65, "#E87C25"),
                        ChartDatum::new("Medium", 85, "#FCCE10"),
                    ],
                ),
            ],
        ),
        Category::new(
            "registry-scan",
            "Registry Scan",
            vec![
                Widget::bar(
                    "widget-5",
                    "Image Risk Assessment",
                    "1470 Total Vulnerabilities",
                    1470,
                    "Total Vulnerabilities",
                    vec![
                        ChartDatum::new("Critical", 9, "#C1232B"),
                        ChartDatum::new("High", 150, "#E87C25"),
                    ],
                ),
                Widget::bar(
                    "widget-6",
                    "Image Security Issues",
                    "2 Total Images",
                    2,
                    "Total Images",
                    vec![
                        ChartDatum::new("Critical", 2, "#C1232B"),
                        ChartDatum::new("High", 2, "#B7B7B7"),
                    ],
                ),
            ],
        ),
    ])
}

/// Loads a dashboard seed from a JSON file.
pub fn load_seed_file(path: &Path) -> Result<Dashboard, SeedError> {
    let content = fs::read_to_string(path).map_err(|e| SeedError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    let dashboard: Dashboard = serde_json::from_str(&content).map_err(|e| SeedError::Parse {
        path: path.to_path_buf(),
        source: e,
    })?;
    validate_seed(path, &dashboard)?;
    tracing::debug!(
        "Loaded seed from {} ({} categories, {} widgets)",
        path.display(),
        dashboard.categories.len(),
        dashboard.widget_count()
    );
    Ok(dashboard)
}

/// Rejects seeds the store cannot hold: repeated category ids, and chart
/// numbers that are negative or not finite.
fn validate_seed(path: &Path, dashboard: &Dashboard) -> Result<(), SeedError> {
    let mut seen = HashSet::new();
    for category in &dashboard.categories {
        if !seen.insert(category.id.as_str()) {
            return Err(SeedError::DuplicateCategory {
                path: path.to_path_buf(),
                category_id: category.id.clone(),
            });
        }
        for widget in &category.widgets {
            let values = widget
                .chart_data
                .iter()
                .flatten()
                .map(|d| ("chartData.value", d.value))
                .chain(widget.total.map(|t| ("total", t)));
            for (field, value) in values {
                if !value.is_finite() || value < 0.0 {
                    return Err(SeedError::InvalidValue {
                        path: path.to_path_buf(),
                        widget_id: widget.id.clone(),
                        field,
                        value,
                    });
                }
            }
        }
    }
    Ok(())
}

/// Resolves the seed for a run: the configured file if any, else the fixture.
pub fn resolve_seed(seed_file: Option<&Path>) -> Result<Dashboard, SeedError> {
    match seed_file {
        Some(path) => load_seed_file(path),
        None => Ok(initial_dashboard()),
    }
}
