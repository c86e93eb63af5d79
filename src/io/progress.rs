//! Single-bar progress display for mosaic generation

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static CELL_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{msg:>9}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} [{{elapsed_precise}}]"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Reports pipeline stages and per-cell placement progress
///
/// Draws to stderr so standard output stays reserved for status lines. A hidden
/// reporter tracks positions without drawing anything.
pub struct ProgressReporter {
    bar: ProgressBar,
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter {
    /// Create a visible progress reporter
    pub fn new() -> Self {
        let bar = ProgressBar::new(0);
        bar.set_style(CELL_STYLE.clone());
        Self { bar }
    }

    /// Create a reporter that draws nothing
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Label the current pipeline stage
    pub fn set_stage(&self, stage: &'static str) {
        self.bar.set_message(stage);
    }

    /// Reset the bar for placing `cells` grid cells
    pub fn start_cells(&self, cells: u64) {
        self.bar.set_length(cells);
        self.bar.set_position(0);
        self.set_stage("Tiling");
    }

    /// Record one placed cell
    pub fn advance(&self) {
        self.bar.inc(1);
    }

    /// Number of cells recorded since the last reset
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Remove the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
