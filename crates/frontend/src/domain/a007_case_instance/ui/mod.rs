pub mod details;
pub mod list;

pub use details::{render_custom_component, CaseDetails};
pub use list::CaseList;
