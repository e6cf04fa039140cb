//! Leaflet map bridge.
//!
//! SYSTEM CONTEXT
//! ==============
//! Leaflet is loaded as a global `L` by the document shell. The bindings
//! below cover only the handful of calls the donation map needs: create a
//! map, add the OSM tile layer, and keep one layer group of clickable
//! markers. View math and marker extraction are plain Rust so they can be
//! tested natively.

#[cfg(test)]
#[path = "leaflet_test.rs"]
mod leaflet_test;

use domain::{Donation, LonLat};

pub const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const TILE_ATTRIBUTION: &str = "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

pub const DEFAULT_CENTER: (f64, f64) = (22.8046, 86.2029);
pub const DEFAULT_ZOOM: u8 = 13;
pub const FOCUS_ZOOM: u8 = 15;

/// Map center as `(lat, lon)` plus zoom level.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapView {
    pub center: (f64, f64),
    pub zoom: u8,
}

impl Default for MapView {
    fn default() -> Self {
        Self { center: DEFAULT_CENTER, zoom: DEFAULT_ZOOM }
    }
}

impl MapView {
    /// Zoom in on `focus` when given, otherwise the default city view.
    pub fn focused(focus: Option<LonLat>) -> Self {
        focus.map_or_else(Self::default, |p| Self { center: p.lat_lon(), zoom: FOCUS_ZOOM })
    }
}

/// One marker to draw, in Leaflet's `(lat, lon)` order.
#[derive(Clone, Debug, PartialEq)]
pub struct MarkerPoint {
    pub id: String,
    pub lat: f64,
    pub lon: f64,
}

/// Markers for every donation with usable coordinates.
pub fn marker_points(donations: &[Donation]) -> Vec<MarkerPoint> {
    donations
        .iter()
        .filter_map(|d| {
            let (lat, lon) = d.location.coordinates.lat_lon();
            (lat.is_finite() && lon.is_finite()).then(|| MarkerPoint { id: d.id.clone(), lat, lon })
        })
        .collect()
}

#[cfg(feature = "hydrate")]
mod ffi {
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen]
    extern "C" {
        pub type LeafletMap;
        #[wasm_bindgen(js_namespace = L, js_name = map)]
        pub fn create_map(container: &web_sys::HtmlElement) -> LeafletMap;
        #[wasm_bindgen(method, js_name = setView)]
        pub fn set_view(this: &LeafletMap, center: &JsValue, zoom: u8);
        #[wasm_bindgen(method)]
        pub fn remove(this: &LeafletMap);

        pub type TileLayer;
        #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
        pub fn tile_layer(url: &str, options: &JsValue) -> TileLayer;
        #[wasm_bindgen(method, js_name = addTo)]
        pub fn add_to(this: &TileLayer, map: &LeafletMap);

        pub type LayerGroup;
        #[wasm_bindgen(js_namespace = L, js_name = layerGroup)]
        pub fn layer_group() -> LayerGroup;
        #[wasm_bindgen(method, js_name = addTo)]
        pub fn add_to(this: &LayerGroup, map: &LeafletMap);
        #[wasm_bindgen(method, js_name = clearLayers)]
        pub fn clear_layers(this: &LayerGroup);

        pub type Marker;
        #[wasm_bindgen(js_namespace = L, js_name = marker)]
        pub fn marker(lat_lng: &JsValue) -> Marker;
        #[wasm_bindgen(method, js_name = addTo)]
        pub fn add_to(this: &Marker, group: &LayerGroup);
        #[wasm_bindgen(method)]
        pub fn on(this: &Marker, event: &str, handler: &js_sys::Function);
    }

    pub fn lat_lng(lat: f64, lon: f64) -> JsValue {
        js_sys::Array::of2(&JsValue::from_f64(lat), &JsValue::from_f64(lon)).into()
    }
}

/// A live Leaflet map with one marker layer. Removing the view tears the map
/// down and drops the marker click handlers.
#[cfg(feature = "hydrate")]
pub struct LeafletView {
    map: ffi::LeafletMap,
    markers: ffi::LayerGroup,
    handlers: Vec<wasm_bindgen::closure::Closure<dyn FnMut()>>,
}

#[cfg(feature = "hydrate")]
impl LeafletView {
    pub fn mount(container: &web_sys::HtmlElement, view: MapView) -> Self {
        let map = ffi::create_map(container);
        map.set_view(&ffi::lat_lng(view.center.0, view.center.1), view.zoom);

        let options = js_sys::Object::new();
        let _ = js_sys::Reflect::set(&options, &"attribution".into(), &TILE_ATTRIBUTION.into());
        ffi::tile_layer(TILE_URL, &options).add_to(&map);

        let markers = ffi::layer_group();
        markers.add_to(&map);
        Self { map, markers, handlers: Vec::new() }
    }

    pub fn set_view(&self, view: MapView) {
        self.map.set_view(&ffi::lat_lng(view.center.0, view.center.1), view.zoom);
    }

    /// Replace every marker. `on_select` receives the clicked donation id.
    pub fn set_markers<F>(&mut self, points: Vec<MarkerPoint>, on_select: F)
    where
        F: Fn(String) + Clone + 'static,
    {
        use wasm_bindgen::JsCast;

        self.markers.clear_layers();
        self.handlers.clear();
        for point in points {
            let marker = ffi::marker(&ffi::lat_lng(point.lat, point.lon));
            let on_select = on_select.clone();
            let id = point.id;
            let handler = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(move || on_select(id.clone()));
            marker.on("click", handler.as_ref().unchecked_ref());
            marker.add_to(&self.markers);
            self.handlers.push(handler);
        }
    }
}

#[cfg(feature = "hydrate")]
impl Drop for LeafletView {
    fn drop(&mut self) {
        self.map.remove();
    }
}
