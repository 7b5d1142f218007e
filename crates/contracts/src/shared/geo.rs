//! Geographic helpers for the map widget
//!
//! Slippy-map (Web Mercator) tile arithmetic: which 256 px tiles surround a
//! point at a given zoom and where each one sits relative to that point.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Tile edge in pixels for standard raster tile servers
pub const TILE_SIZE: f64 = 256.0;

/// Web Mercator is undefined at the poles; tile servers cut off here.
pub const MAX_MERCATOR_LAT: f64 = 85.051_128_78;

/// Deepest zoom the public OSM tile servers render; larger values are clamped.
pub const MAX_ZOOM: u8 = 19;

const SUBDOMAINS: [&str; 3] = ["a", "b", "c"];

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    /// Parse coordinates as shipped by the API ("51.5", "-0.12")
    pub fn parse(latitude: &str, longitude: &str) -> Result<Self, String> {
        let lat = parse_degrees(latitude, "latitude")?;
        let lng = parse_degrees(longitude, "longitude")?;

        if !(-90.0..=90.0).contains(&lat) {
            return Err(format!("Latitude out of range: {}", lat));
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(format!("Longitude out of range: {}", lng));
        }

        Ok(Self { lat, lng })
    }

    /// Absolute pixel position on the world map at `zoom`
    pub fn world_pixel(&self, zoom: u8) -> (f64, f64) {
        let world = TILE_SIZE * f64::from(1u32 << zoom.min(MAX_ZOOM));
        let lat_rad = self
            .lat
            .clamp(-MAX_MERCATOR_LAT, MAX_MERCATOR_LAT)
            .to_radians();

        let x = (self.lng + 180.0) / 360.0 * world;
        let y = (1.0 - (lat_rad.tan() + 1.0 / lat_rad.cos()).ln() / PI) / 2.0 * world;
        (x, y)
    }
}

fn parse_degrees(raw: &str, field: &str) -> Result<f64, String> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|e| format!("Invalid {} '{}': {}", field, raw, e))?;
    if !value.is_finite() {
        return Err(format!("Invalid {} '{}': not a finite number", field, raw));
    }
    Ok(value)
}

/// One tile placed around the center point.
///
/// `offset_x`/`offset_y` are the pixel distance from the center point to the
/// tile's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedTile {
    pub x: u32,
    pub y: u32,
    pub offset_x: f64,
    pub offset_y: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TileLayout {
    pub zoom: u8,
    pub tiles: Vec<PlacedTile>,
}

impl TileLayout {
    /// `cols` x `rows` tiles with the tile containing `point` in the middle.
    ///
    /// Columns wrap around the antimeridian; rows past the poles are dropped.
    pub fn centered(point: GeoPoint, zoom: u8, cols: u32, rows: u32) -> Self {
        let zoom = zoom.min(MAX_ZOOM);
        let (px, py) = point.world_pixel(zoom);
        let tiles_per_side = 1i64 << zoom;

        let center_col = (px / TILE_SIZE).floor() as i64;
        let center_row = (py / TILE_SIZE).floor() as i64;
        let first_col = center_col - i64::from(cols / 2);
        let first_row = center_row - i64::from(rows / 2);

        let mut tiles = Vec::with_capacity((cols * rows) as usize);
        for row in first_row..first_row + i64::from(rows) {
            if row < 0 || row >= tiles_per_side {
                continue;
            }
            for col in first_col..first_col + i64::from(cols) {
                tiles.push(PlacedTile {
                    x: col.rem_euclid(tiles_per_side) as u32,
                    y: row as u32,
                    offset_x: col as f64 * TILE_SIZE - px,
                    offset_y: row as f64 * TILE_SIZE - py,
                });
            }
        }

        Self { zoom, tiles }
    }
}

/// Subdomain for a tile, spread across a/b/c like Leaflet does
pub fn subdomain_for(x: u32, y: u32) -> &'static str {
    SUBDOMAINS[((x + y) % SUBDOMAINS.len() as u32) as usize]
}

/// Fill a `{s}/{z}/{x}/{y}` URL template
pub fn tile_url(template: &str, subdomain: &str, zoom: u8, x: u32, y: u32) -> String {
    template
        .replace("{s}", subdomain)
        .replace("{z}", &zoom.to_string())
        .replace("{x}", &x.to_string())
        .replace("{y}", &y.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const OSM: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";

    #[test]
    fn test_parse_coordinates() {
        let point = GeoPoint::parse("51.5", "-0.12").unwrap();
        assert_eq!(point, GeoPoint { lat: 51.5, lng: -0.12 });

        let padded = GeoPoint::parse(" -69.8246 ", "134.8719").unwrap();
        assert_eq!(padded.lat, -69.8246);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(GeoPoint::parse("north", "0").is_err());
        assert!(GeoPoint::parse("0", "").is_err());
        assert!(GeoPoint::parse("NaN", "0").is_err());
        assert!(GeoPoint::parse("inf", "0").is_err());
        assert!(GeoPoint::parse("91", "0").is_err());
        assert!(GeoPoint::parse("0", "-180.5").is_err());
    }

    #[test]
    fn test_world_pixel_origin() {
        let (x, y) = GeoPoint { lat: 0.0, lng: 0.0 }.world_pixel(1);
        assert!((x - 256.0).abs() < 1e-9);
        assert!((y - 256.0).abs() < 1e-9);
    }

    #[test]
    fn test_london_center_tile() {
        let london = GeoPoint::parse("51.5", "-0.12").unwrap();
        let layout = TileLayout::centered(london, 5, 1, 1);

        assert_eq!(layout.tiles.len(), 1);
        let tile = layout.tiles[0];
        assert_eq!((tile.x, tile.y), (15, 10));
        // the point lies inside its own tile
        assert!(tile.offset_x <= 0.0 && tile.offset_x > -TILE_SIZE);
        assert!(tile.offset_y <= 0.0 && tile.offset_y > -TILE_SIZE);
    }

    #[test]
    fn test_grid_wraps_antimeridian() {
        let fiji = GeoPoint { lat: -17.7, lng: 179.9 };
        let layout = TileLayout::centered(fiji, 2, 3, 1);

        let xs: Vec<u32> = layout.tiles.iter().map(|t| t.x).collect();
        assert_eq!(xs, vec![2, 3, 0]);
        // placement keeps going east even though x wrapped
        assert!(layout.tiles[2].offset_x > layout.tiles[1].offset_x);
    }

    #[test]
    fn test_grid_drops_rows_past_pole() {
        let north = GeoPoint { lat: 85.0, lng: 0.0 };
        let layout = TileLayout::centered(north, 1, 3, 3);

        assert!(layout.tiles.iter().all(|t| t.y < 2));
        assert_eq!(layout.tiles.len(), 6);
    }

    #[test]
    fn test_zoom_beyond_tile_server_max_is_clamped() {
        let london = GeoPoint { lat: 51.5, lng: -0.12 };

        assert_eq!(london.world_pixel(32), london.world_pixel(MAX_ZOOM));
        assert_eq!(london.world_pixel(u8::MAX), london.world_pixel(MAX_ZOOM));

        let layout = TileLayout::centered(london, 40, 3, 3);
        assert_eq!(layout.zoom, MAX_ZOOM);
        assert_eq!(layout.tiles.len(), 9);
        assert!(layout.tiles.iter().all(|t| t.x < 1 << MAX_ZOOM));
    }

    #[test]
    fn test_tile_url() {
        assert_eq!(
            tile_url(OSM, subdomain_for(15, 10), 5, 15, 10),
            "https://b.tile.openstreetmap.org/5/15/10.png"
        );
        assert_eq!(subdomain_for(0, 0), "a");
        assert_eq!(subdomain_for(1, 1), "c");
    }
}
