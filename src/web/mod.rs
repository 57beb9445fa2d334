pub mod forms;
pub mod handlers;
pub mod helpers;
pub mod middleware;
pub mod state;

pub use handlers::configure;
pub use middleware::AccessLog;
pub use state::AppState;
