//! Login screen: fetches one random user and hands it to the Profile screen

pub mod model;
pub mod page;
pub mod view_model;

pub use page::LoginPage;
