pub mod app;
pub mod catalog;
pub mod commands;
pub mod http;
pub mod provider;
pub mod release;
pub mod runtime;
pub mod view;
