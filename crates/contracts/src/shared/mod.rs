pub mod ordering;
pub mod packing;
pub mod page;
pub mod validation;
pub mod value_path;
