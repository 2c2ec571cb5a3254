mod documents;

pub use documents::CaseDocuments;
