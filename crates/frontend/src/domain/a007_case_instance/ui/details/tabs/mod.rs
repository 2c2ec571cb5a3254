mod progress;
mod summary;

pub use progress::{CaseProgress, OpenTasks};
pub use summary::CaseSummary;
