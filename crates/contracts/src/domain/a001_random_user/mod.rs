//! Random user profile as served by randomuser.me

pub mod aggregate;
pub mod response;

pub use aggregate::*;
pub use response::{RandomUserResponse, ResponseInfo};
