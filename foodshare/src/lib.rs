pub mod app;
pub mod config;
pub mod page;
pub mod server;
