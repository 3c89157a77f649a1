pub mod chat;
pub mod config;
pub(crate) mod config_env;
pub mod llm;
pub mod mapbiomas;
pub mod models;
