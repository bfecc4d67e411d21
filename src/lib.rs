pub mod analysis;
pub mod classify;
pub mod config;
pub mod error;
pub mod http;
pub mod prompts;
pub mod providers;
pub mod recommend;
pub mod wellness;
