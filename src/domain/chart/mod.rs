//! Chart aggregate: scales, frames, transitions and the pointer hit-test.

pub mod entities;
pub mod format;
pub mod services;
pub mod transition;
pub mod value_objects;

pub use entities::*;
pub use format::*;
pub use services::*;
pub use transition::*;
pub use value_objects::*;
