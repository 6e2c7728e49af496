mod app;
mod config;
mod content;
mod document;
mod logging;
mod scheduler;
mod ui;

pub use app::run_app;
