//! Loading of color attribute settings from files and the environment.
#![allow(missing_docs)]

pub mod loader;

pub use loader::{
    SettingsSource, load_from_env, load_from_file, load_from_sources, parse_from_str, parse_json,
};
