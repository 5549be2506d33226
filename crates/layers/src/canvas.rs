use std::fmt::Display;

use foundation::LatLngBounds;
use timeline::MapLine;

use crate::symbology::LineStyle;

/// The map widget the overlay draws into.
///
/// Implemented over the browser map library by the web viewer; tests use an
/// in-memory canvas.
pub trait MapCanvas {
    type Layer;
    type Error: Display;

    /// Draw `line` as a new layer attached to the canvas.
    fn add_layer(&mut self, line: &MapLine) -> Result<Self::Layer, Self::Error>;

    /// Whether `layer` is still attached. Layers can be detached by the widget itself.
    fn has_layer(&self, layer: &Self::Layer) -> bool;

    fn remove_layer(&mut self, layer: &Self::Layer);

    fn set_style(&mut self, layer: &Self::Layer, style: &LineStyle);

    /// Animate the viewport so `bounds` fills it.
    fn fly_to_bounds(&mut self, bounds: &LatLngBounds);
}
