//! Profile screen: hero section plus five tabbed panels

pub mod page;
pub mod tabs;
pub mod view_model;

pub use page::ProfilePage;
