pub mod fields;
pub mod registry;
pub mod source;
pub mod traits;

// Input encodings
pub mod csv_loader;
pub mod json_loader;
