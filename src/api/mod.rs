mod handlers;
mod routes;
mod state;

pub use handlers::{FeedbackForm, FeedbackInput};
pub use routes::create_router;
pub use state::AppState;
