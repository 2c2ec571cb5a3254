mod editor;
mod form;

pub use editor::SearchFieldsEditor;
