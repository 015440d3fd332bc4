mod engine;
mod errors;
mod models;
mod report;

pub use engine::Engine;
pub use errors::Error;
pub use models::{Deadline, Never, Terminated};
pub use report::{Conclusion, Report};
