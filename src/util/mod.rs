pub mod env;
pub mod field_path;
pub mod file;
