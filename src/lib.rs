pub mod app;
pub mod config;
pub mod event;
pub mod theme;
pub mod view;
pub mod wheel;
