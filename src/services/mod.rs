pub mod catalog;
pub mod feedback;
pub mod providers;
pub mod rules;

pub use catalog::Catalog;
pub use feedback::FeedbackService;
