// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for checklicenses.
//!
//! This module handles finding and parsing the configuration document and
//! compiling it into the rules the scan runs against.

mod compile;
pub mod default;
pub mod env;
mod loader;
mod schema;

pub use compile::{compile, compile_with, CompiledConfig};
pub use default::example_config;
pub use loader::{
    find_config_file, find_config_file_from, load_config, load_config_from, parse_json, parse_toml,
    CONFIG_FILES,
};
pub use schema::*;
