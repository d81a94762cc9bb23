//! External commerce platform integration.
//!
//! Token lifecycle management, the authenticated catalog client with its
//! one-shot retry on authorization failure, and the response normalization
//! that flattens the platform's loosely-shaped payloads.

mod client;
mod normalize;
mod token;

pub use client::*;
pub use normalize::*;
pub use token::*;
