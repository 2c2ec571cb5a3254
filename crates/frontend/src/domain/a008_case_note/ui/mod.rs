mod notes;

pub use notes::CaseNotes;
