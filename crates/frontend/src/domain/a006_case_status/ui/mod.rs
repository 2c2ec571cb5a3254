mod editor;
mod form;

pub use editor::StatusesEditor;
