//! OpenStreetMap tile widget

pub mod config;
pub mod widget;

pub use widget::MapView;
