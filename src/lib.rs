pub mod deposit;
pub mod effects;
pub mod error;
pub mod format;
pub mod loading;
pub mod lp_tokens;
pub mod market;
pub mod model;
pub mod schema;

#[cfg(feature = "full")]
pub mod chain;
#[cfg(feature = "full")]
pub mod config;

#[cfg(feature = "wasm")]
pub mod wasm;
