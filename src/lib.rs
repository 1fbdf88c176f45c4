pub mod config;
pub mod converter;
pub mod units;

#[cfg(target_arch = "wasm32")]
pub mod wasm;
