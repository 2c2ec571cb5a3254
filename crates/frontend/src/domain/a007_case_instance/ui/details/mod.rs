mod custom;
mod header;
pub mod tabs;
mod view;
mod view_model;

pub use custom::render_custom_component;
pub use view::CaseDetails;
pub use view_model::CaseDetailsViewModel;
