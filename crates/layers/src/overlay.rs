use foundation::{LatLngBounds, Year};
use timeline::LineSet;
use tracing::{debug, warn};

use crate::canvas::MapCanvas;
use crate::symbology::LineStyle;

#[derive(Debug, Clone, PartialEq)]
pub struct DrawnLayer<L> {
    pub layer: L,
    pub year: Year,
    pub bounds: LatLngBounds,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct RefreshSummary {
    pub removed: usize,
    pub drawn: usize,
    pub failed: usize,
}

/// The set of street layers currently drawn on the map.
///
/// `refresh` and `auto_fit` can be called any number of times in a row; with
/// the same inputs they converge to the same drawn set and viewport.
#[derive(Debug)]
pub struct MapOverlay<L> {
    style: LineStyle,
    drawn: Vec<DrawnLayer<L>>,
}

impl<L> MapOverlay<L> {
    pub fn new(style: LineStyle) -> Self {
        Self {
            style,
            drawn: Vec::new(),
        }
    }

    pub fn style(&self) -> &LineStyle {
        &self.style
    }

    pub fn drawn(&self) -> &[DrawnLayer<L>] {
        &self.drawn
    }

    /// Remove every layer this overlay drew that is still attached to the canvas.
    pub fn clear<C>(&mut self, canvas: &mut C) -> usize
    where
        C: MapCanvas<Layer = L>,
    {
        let mut removed = 0;
        for d in self.drawn.drain(..) {
            if canvas.has_layer(&d.layer) {
                canvas.remove_layer(&d.layer);
                removed += 1;
            }
        }
        removed
    }

    /// Redraw the lines whose year is at or before `cutoff`.
    ///
    /// With no cutoff (empty timeline) the overlay is only cleared.
    pub fn refresh<C>(
        &mut self,
        canvas: &mut C,
        lines: &LineSet,
        cutoff: Option<&Year>,
    ) -> RefreshSummary
    where
        C: MapCanvas<Layer = L>,
    {
        let mut summary = RefreshSummary {
            removed: self.clear(canvas),
            ..RefreshSummary::default()
        };

        let Some(cutoff) = cutoff else {
            return summary;
        };

        for line in lines.up_to_year(cutoff) {
            match canvas.add_layer(line) {
                Ok(layer) => {
                    self.drawn.push(DrawnLayer {
                        layer,
                        year: line.year.clone(),
                        bounds: line.geometry.bounds,
                    });
                    summary.drawn += 1;
                }
                Err(err) => {
                    summary.failed += 1;
                    warn!(street = %line.name, %err, "failed to draw street");
                }
            }
        }

        for d in &self.drawn {
            canvas.set_style(&d.layer, &self.style);
        }

        debug!(
            cutoff = %cutoff,
            drawn = summary.drawn,
            removed = summary.removed,
            "map refreshed"
        );
        summary
    }

    /// Union of the bounds of every drawn layer, seeded from inverted extremes.
    pub fn outer_bounds(&self) -> Option<LatLngBounds> {
        LatLngBounds::union_all(self.drawn.iter().map(|d| &d.bounds))
    }

    /// Fly the viewport to the drawn layers. Leaves the viewport alone when nothing is drawn.
    pub fn auto_fit<C>(&self, canvas: &mut C) -> Option<LatLngBounds>
    where
        C: MapCanvas<Layer = L>,
    {
        let bounds = self.outer_bounds()?;
        canvas.fly_to_bounds(&bounds);
        Some(bounds)
    }
}
