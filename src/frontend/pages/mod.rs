//! Page bodies, rendered before being wrapped in the [`Shell`](super::Shell)

mod blog;
mod error;
mod home;
mod not_found;
mod topic;

pub use blog::BlogPage;
pub use error::ErrorPage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use topic::TopicPage;
