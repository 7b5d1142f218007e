pub mod api_utils;
pub mod components;
pub mod date_utils;
pub mod icons;
pub mod map;

#[cfg(test)]
pub(crate) mod test_fixtures;
