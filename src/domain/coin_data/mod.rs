//! Coin dataset: raw samples as loaded from disk and the points derived from them.

pub mod entities;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use services::*;
pub use value_objects::*;
