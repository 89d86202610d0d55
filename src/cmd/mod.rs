pub mod presets;
pub mod recommend;
