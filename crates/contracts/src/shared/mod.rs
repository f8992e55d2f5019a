pub mod submission;
pub mod validation;

pub use submission::Timestamped;
pub use validation::ValidationRules;
