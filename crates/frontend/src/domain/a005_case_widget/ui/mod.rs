mod editor;
mod form;
mod renderers;
mod tab_view;

pub use editor::WidgetsEditor;
pub use tab_view::CaseWidgetTab;
