use contracts::shared::geo::{subdomain_for, tile_url, GeoPoint, PlacedTile, TileLayout};
use leptos::prelude::*;

use super::config::{
    ATTRIBUTION_TEXT, ATTRIBUTION_URL, DEFAULT_ZOOM, GRID_COLS, GRID_ROWS, MAP_HEIGHT_PX,
    TILE_URL_TEMPLATE,
};
use crate::shared::icons::icon;

/// Position of a tile relative to the container center, where the point sits.
pub fn tile_style(tile: &PlacedTile) -> String {
    format!(
        "left: calc(50% + {:.1}px); top: calc(50% + {:.1}px);",
        tile.offset_x, tile.offset_y
    )
}

/// Tile image URL for one placed tile of `layout`
pub fn tile_src(layout: &TileLayout, tile: &PlacedTile) -> String {
    tile_url(
        TILE_URL_TEMPLATE,
        subdomain_for(tile.x, tile.y),
        layout.zoom,
        tile.x,
        tile.y,
    )
}

/// Static map centered on `point` with a marker and a popup label.
///
/// Shows a notice instead of tiles when the coordinates could not be parsed.
#[component]
pub fn MapView(
    point: Result<GeoPoint, String>,
    #[prop(into)] popup: String,
    #[prop(optional)] zoom: Option<u8>,
) -> impl IntoView {
    let zoom = zoom.unwrap_or(DEFAULT_ZOOM);
    let frame_style = format!("height: {}px;", MAP_HEIGHT_PX);

    let point = match point {
        Ok(point) => point,
        Err(reason) => {
            log::warn!("MapView: {}", reason);
            return view! {
                <div class="map map--unavailable" style=frame_style>
                    {format!("Map unavailable: {}", reason)}
                </div>
            }
            .into_any();
        }
    };

    let layout = TileLayout::centered(point, zoom, GRID_COLS, GRID_ROWS);
    let tiles = layout
        .tiles
        .iter()
        .map(|tile| {
            let src = tile_src(&layout, tile);
            view! {
                <img class="map__tile" src=src style=tile_style(tile) alt="" draggable="false" />
            }
        })
        .collect_view();

    view! {
        <div class="map" style=frame_style>
            {tiles}
            <div class="map__marker">{icon("map-pin")}</div>
            <div class="map__popup">{popup}</div>
            <div class="map__attribution">
                "© "
                <a href=ATTRIBUTION_URL target="_blank" rel="noopener">{ATTRIBUTION_TEXT}</a>
                " contributors"
            </div>
        </div>
    }
    .into_any()
}
