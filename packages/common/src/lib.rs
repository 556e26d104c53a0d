pub mod occupancy;
pub mod path;
pub mod visitor;

pub use occupancy::*;
pub use path::*;
pub use visitor::*;
