pub mod errors;
pub mod feedback;
pub mod types;

pub use errors::{ConfigError, ForgeError};
pub use feedback::{Feedback, FeedbackBoard, FeedbackLevel};
pub use types::{Color, Vec3};

pub type Result<T> = std::result::Result<T, ForgeError>;
