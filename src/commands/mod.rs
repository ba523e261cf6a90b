//! Command implementations

mod set_es_paths;

pub use set_es_paths::set_es_paths;
