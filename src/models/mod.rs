pub mod stage;
pub mod timestamp;

pub use stage::*;
