//! Domain layer: the lookup entities served by the review site and the crate
//! error type.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`models`]: Regions, categories, restaurants and their detail records
//!
//! # Examples
//!
//! ```
//! use eatgo::domain::{Region, Result};
//!
//! fn seoul() -> Result<Region> {
//!     Ok(Region::new(1, "서울"))
//! }
//! # assert_eq!(seoul().unwrap().id, 1);
//! ```

pub mod error;
pub mod models;

pub use error::{EatgoError, Result};
pub use models::{Category, MenuItem, Region, Restaurant, Review};
