//! Shared contracts of the dossier UI: wire types of the case-management API
//! and the pure helpers the UI builds on (ordering, packing, validation).

pub mod domain;
pub mod shared;
