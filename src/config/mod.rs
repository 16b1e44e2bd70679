//! Configuration management.
//!
//! [`AppConfig`] is loaded once in `main` and handed down by reference.

mod loader;
mod structs;


pub use loader::{get_config_dir, get_config_path, load_config, load_config_from};
pub use structs::{AppConfig, FormatConfig, UIConfig};
