//! Data models for the order bridge backend.
//!
//! These models match the frontend wire contract (camelCase JSON) exactly.

mod catalog;
mod coupon;
mod mapping;
mod order;
mod reference;
mod token;

pub use catalog::*;
pub use coupon::*;
pub use mapping::*;
pub use order::*;
pub use reference::*;
pub use token::*;
