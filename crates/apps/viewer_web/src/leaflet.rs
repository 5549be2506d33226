//! Leaflet bindings and the [`MapCanvas`] implementation over them.

use foundation::LatLngBounds;
use layers::{LineStyle, MapCanvas};
use serde::Serialize;
use timeline::MapLine;
use wasm_bindgen::prelude::*;

use crate::config::ViewerConfig;
use crate::error::ViewerError;

#[wasm_bindgen]
extern "C" {
    #[derive(Debug, Clone)]
    pub type LeafletMap;

    #[derive(Debug, Clone)]
    pub type LeafletLayer;

    #[wasm_bindgen(catch, js_namespace = L, js_name = map)]
    fn leaflet_map(element_id: &str, options: &JsValue) -> Result<LeafletMap, JsValue>;

    #[wasm_bindgen(catch, js_namespace = L, js_name = tileLayer)]
    fn tile_layer(url_template: &str, options: &JsValue) -> Result<LeafletLayer, JsValue>;

    #[wasm_bindgen(catch, js_namespace = L, js_name = geoJSON)]
    fn geo_json(data: &JsValue) -> Result<LeafletLayer, JsValue>;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to(this: &LeafletLayer, map: &LeafletMap);

    #[wasm_bindgen(method, js_name = setStyle)]
    fn set_style(this: &LeafletLayer, style: &JsValue);

    #[wasm_bindgen(method, js_name = hasLayer)]
    fn has_layer(this: &LeafletMap, layer: &LeafletLayer) -> bool;

    #[wasm_bindgen(method, js_name = removeLayer)]
    fn remove_layer(this: &LeafletMap, layer: &LeafletLayer);

    #[wasm_bindgen(method, js_name = flyToBounds)]
    fn fly_to_bounds(this: &LeafletMap, bounds: &JsValue);
}

#[derive(Serialize)]
struct MapOptions {
    center: [f64; 2],
    zoom: f64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TileOptions<'a> {
    attribution: &'a str,
    min_zoom: u8,
    max_zoom: u8,
}

/// Serialize into plain JS objects and arrays (not `Map`s).
fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, ViewerError> {
    Ok(value.serialize(&serde_wasm_bindgen::Serializer::json_compatible())?)
}

/// Leaflet corner order: `[[north, east], [south, west]]`.
fn bounds_array(bounds: &LatLngBounds) -> [[f64; 2]; 2] {
    [
        [bounds.north_east.lat, bounds.north_east.lng],
        [bounds.south_west.lat, bounds.south_west.lng],
    ]
}

pub struct LeafletCanvas {
    map: LeafletMap,
    style_cache: Option<(LineStyle, JsValue)>,
}

impl LeafletCanvas {
    pub fn init(config: &ViewerConfig) -> Result<Self, ViewerError> {
        let map = leaflet_map(
            &config.map_element_id,
            &to_js(&MapOptions {
                center: config.map_center,
                zoom: config.map_zoom,
            })?,
        )?;

        let tiles = tile_layer(
            &config.tile_url,
            &to_js(&TileOptions {
                attribution: &config.tile_attribution,
                min_zoom: config.tile_min_zoom,
                max_zoom: config.tile_max_zoom,
            })?,
        )?;
        tiles.add_to(&map);

        Ok(Self {
            map,
            style_cache: None,
        })
    }

    fn style_value(&mut self, style: &LineStyle) -> Result<JsValue, ViewerError> {
        if let Some((cached, value)) = &self.style_cache
            && cached == style
        {
            return Ok(value.clone());
        }
        let value = to_js(style)?;
        self.style_cache = Some((style.clone(), value.clone()));
        Ok(value)
    }
}

impl MapCanvas for LeafletCanvas {
    type Layer = LeafletLayer;
    type Error = ViewerError;

    fn add_layer(&mut self, line: &MapLine) -> Result<LeafletLayer, ViewerError> {
        let data = to_js(&line.geometry.geojson)?;
        let layer = geo_json(&data)?;
        layer.add_to(&self.map);
        Ok(layer)
    }

    fn has_layer(&self, layer: &LeafletLayer) -> bool {
        self.map.has_layer(layer)
    }

    fn remove_layer(&mut self, layer: &LeafletLayer) {
        self.map.remove_layer(layer);
    }

    fn set_style(&mut self, layer: &LeafletLayer, style: &LineStyle) {
        match self.style_value(style) {
            Ok(value) => layer.set_style(&value),
            Err(err) => tracing::warn!(%err, "failed to convert line style"),
        }
    }

    fn fly_to_bounds(&mut self, bounds: &LatLngBounds) {
        match to_js(&bounds_array(bounds)) {
            Ok(value) => self.map.fly_to_bounds(&value),
            Err(err) => tracing::warn!(%err, "failed to convert bounds"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::bounds_array;
    use foundation::{LatLng, LatLngBounds};

    #[test]
    fn bounds_are_north_east_then_south_west() {
        let b = LatLngBounds::new(LatLng::new(52.4, 4.95), LatLng::new(52.3, 4.8));
        assert_eq!(bounds_array(&b), [[52.4, 4.95], [52.3, 4.8]]);
    }
}
