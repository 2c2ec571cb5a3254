//! Case definition details
//!
//! MVVM:
//! - view_model.rs: выбранный раздел, защита от потери несохранённых изменений
//! - view.rs: Leptos component (навигация по разделам)
//! - general.rs: раздел General (settings + process links)

mod general;
mod view;
mod view_model;

pub use view::CaseDefinitionDetails;
pub use view_model::{CaseDefinitionDetailsViewModel, DefinitionSection};
