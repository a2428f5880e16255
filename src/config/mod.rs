//! Configuration: types, file location, XML loading and validation.

pub mod paths;
pub mod types;
mod validate;
pub mod xml;

pub use paths::{default_config_path, path_has_symlink_ancestor, CONFIG_ENV};
pub use types::{Config, LogLevel, PreviewStyle};
pub use validate::validate_root;
pub use xml::{create_template_config, load_config, load_config_from_xml_path};
