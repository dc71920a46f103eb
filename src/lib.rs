pub mod apis;
pub mod arguments;
pub mod cache;
pub mod config;
pub mod context;
pub mod errors;
pub mod logger;
pub mod market;
pub mod telegram;
