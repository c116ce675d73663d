//! Purge matrix: the presentation-layer table of purge volumes for every
//! ordered pair of a color set.
//!
//! The color collection is owned explicitly by the matrix rather than
//! living in ambient global state; callers pass the colors and the
//! multiplier per computation. Diagonal entries (a color to itself) are
//! `None` - the model is never consulted for them and they render as a
//! "no purge" marker.

use crate::compute_purge_volume;
use crate::error::{PurgeError, Result};
use serde::Serialize;
use tracing::debug;

/// Marker rendered for diagonal (same color) entries.
const NO_PURGE_MARKER: &str = "-";

/// An N×N table of purge volumes for an ordered color set.
#[derive(Debug, Clone, Serialize)]
pub struct PurgeMatrix {
    colors: Vec<String>,
    multiplier: f64,
    /// Row-major cells; `cells[src][dst]`, `None` on the diagonal.
    cells: Vec<Vec<Option<u32>>>,
}

impl PurgeMatrix {
    /// Compute the full matrix for the given colors and multiplier.
    ///
    /// The multiplier must be finite and positive; the color list must be
    /// non-empty. Diagonal entries are skipped, not computed.
    pub fn compute<S: AsRef<str>>(colors: &[S], multiplier: f64) -> Result<Self> {
        if !multiplier.is_finite() || multiplier <= 0.0 {
            return Err(PurgeError::InvalidMultiplier { value: multiplier });
        }
        if colors.is_empty() {
            return Err(PurgeError::NoColors);
        }

        let colors: Vec<String> = colors.iter().map(|c| c.as_ref().to_string()).collect();

        let cells = colors
            .iter()
            .enumerate()
            .map(|(i, src)| {
                colors
                    .iter()
                    .enumerate()
                    .map(|(j, dst)| {
                        (i != j).then(|| compute_purge_volume(src, dst, multiplier))
                    })
                    .collect()
            })
            .collect();

        debug!(
            "Computed {}x{} purge matrix (multiplier {})",
            colors.len(),
            colors.len(),
            multiplier
        );

        Ok(Self {
            colors,
            multiplier,
            cells,
        })
    }

    /// The color tokens, in matrix order.
    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    /// The multiplier the matrix was computed with.
    pub fn multiplier(&self) -> f64 {
        self.multiplier
    }

    /// Purge volume from `colors()[src]` to `colors()[dst]`. `None` on
    /// the diagonal and for out-of-range indices.
    pub fn get(&self, src: usize, dst: usize) -> Option<u32> {
        *self.cells.get(src)?.get(dst)?
    }

    /// Render as an aligned text table, source colors down the rows and
    /// destination colors across the columns.
    pub fn render_table(&self) -> String {
        let corner = "from \\ to";
        // Widths count characters, not bytes; labels may be non-ASCII
        let label_width = self
            .colors
            .iter()
            .map(|c| c.chars().count())
            .max()
            .unwrap_or(0)
            .max(corner.len());
        let col_widths: Vec<usize> = self
            .colors
            .iter()
            .map(|c| c.chars().count().max(3))
            .collect();

        let mut out = String::new();

        out.push_str(&format!("{corner:<label_width$}"));
        for (color, &width) in self.colors.iter().zip(&col_widths) {
            out.push_str(&format!("  {color:>width$}"));
        }
        out.push('\n');

        for (i, src) in self.colors.iter().enumerate() {
            out.push_str(&format!("{src:<label_width$}"));
            for (j, &width) in col_widths.iter().enumerate() {
                let cell = match self.cells[i][j] {
                    Some(vol) => vol.to_string(),
                    None => NO_PURGE_MARKER.to_string(),
                };
                out.push_str(&format!("  {cell:>width$}"));
            }
            out.push('\n');
        }

        out
    }
}
