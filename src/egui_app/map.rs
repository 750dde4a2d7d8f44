//! Mapping surface adapter.
//!
//! Filters lockers down to those with usable coordinates, centers the view on
//! the plain arithmetic mean of their latitudes and longitudes, and renders a
//! self-contained Leaflet page with one marker per locker.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::shared::locker::Locker;

/// Initial zoom level of the generated page
pub const DEFAULT_ZOOM: u8 = 12;

const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";
const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";

#[derive(Debug, Error)]
pub enum MapError {
    #[error("failed to save map to {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapMarker {
    pub locker_id: String,
    pub status: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapView {
    /// `(latitude, longitude)`
    pub center: (f64, f64),
    pub zoom: u8,
    pub markers: Vec<MapMarker>,
}

/// Result of preparing a map. `NoMappableData` is not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum MapPlan {
    NoMappableData,
    Ready(MapView),
}

pub fn plan_map<'a>(lockers: impl IntoIterator<Item = &'a Locker>) -> MapPlan {
    let markers: Vec<MapMarker> = lockers
        .into_iter()
        .filter_map(|locker| {
            let (latitude, longitude) = locker.coordinates()?;
            Some(MapMarker {
                locker_id: locker.id().to_string(),
                status: locker.status(),
                latitude,
                longitude,
            })
        })
        .collect();

    let points: Vec<(f64, f64)> = markers.iter().map(|m| (m.latitude, m.longitude)).collect();
    match mean_center(&points) {
        Some(center) => {
            tracing::debug!(latitude = center.0, longitude = center.1, "Map centered");
            MapPlan::Ready(MapView {
                center,
                zoom: DEFAULT_ZOOM,
                markers,
            })
        }
        None => MapPlan::NoMappableData,
    }
}

/// Unweighted mean of latitudes and of longitudes
pub fn mean_center(points: &[(f64, f64)]) -> Option<(f64, f64)> {
    if points.is_empty() {
        return None;
    }
    let count = points.len() as f64;
    let (lat_sum, lon_sum) = points
        .iter()
        .fold((0.0, 0.0), |(lat, lon), (p_lat, p_lon)| (lat + p_lat, lon + p_lon));
    Some((lat_sum / count, lon_sum / count))
}

impl MapView {
    pub fn to_html(&self) -> String {
        let mut markers = String::new();
        for marker in &self.markers {
            markers.push_str(&format!(
                "      L.marker([{}, {}]).bindPopup({}).bindTooltip({}).addTo(map);\n",
                marker.latitude,
                marker.longitude,
                js_string(&format!(
                    "Locker ID: {}<br>Status: {}",
                    escape_html(&marker.locker_id),
                    escape_html(&marker.status)
                )),
                js_string(&escape_html(&marker.locker_id)),
            ));
        }

        format!(
            r#"<!DOCTYPE html>
<html>
  <head>
    <meta charset="utf-8" />
    <title>Locker Location</title>
    <link rel="stylesheet" href="{css}" />
    <script src="{js}"></script>
    <style>html, body, #map {{ height: 100%; margin: 0; }}</style>
  </head>
  <body>
    <div id="map"></div>
    <script>
      var map = L.map("map").setView([{lat}, {lon}], {zoom});
      L.tileLayer("{tiles}", {{
        maxZoom: 19,
        attribution: "&copy; OpenStreetMap contributors"
      }}).addTo(map);
{markers}    </script>
  </body>
</html>
"#,
            css = LEAFLET_CSS,
            js = LEAFLET_JS,
            lat = self.center.0,
            lon = self.center.1,
            zoom = self.zoom,
            tiles = TILE_URL,
            markers = markers,
        )
    }

    /// Write the page to `path` and return the path written
    pub fn save(&self, path: &Path) -> Result<PathBuf, MapError> {
        std::fs::write(path, self.to_html()).map_err(|source| MapError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(path.to_path_buf())
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// JSON string literals are valid JavaScript string literals
fn js_string(text: &str) -> String {
    serde_json::Value::String(text.to_string()).to_string()
}
