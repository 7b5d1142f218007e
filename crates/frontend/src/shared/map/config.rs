/// OpenStreetMap raster tiles
pub const TILE_URL_TEMPLATE: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";

pub const ATTRIBUTION_URL: &str = "https://www.openstreetmap.org/copyright";
pub const ATTRIBUTION_TEXT: &str = "OpenStreetMap";

pub const DEFAULT_ZOOM: u8 = 5;
pub const MAP_HEIGHT_PX: u32 = 200;

// 5x3 covers a ~1000px wide container at any offset
pub const GRID_COLS: u32 = 5;
pub const GRID_ROWS: u32 = 3;
