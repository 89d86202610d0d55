pub mod config;
pub mod consts;
pub mod engine;
pub mod error;
pub mod explain;
pub mod presets;
pub mod profile;
pub mod units;
pub mod util;
// cmd and reports belong to the binary crate (main.rs).
