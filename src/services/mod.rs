pub mod duration;
pub mod stage;
pub mod validation;

pub use duration::calculate_duration;
pub use stage::StageService;
pub use validation::{StageValidationError, StageValidator};
