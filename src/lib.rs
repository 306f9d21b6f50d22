pub mod app;
pub mod components;
pub mod entity;
pub mod error;
pub mod header;
pub mod i18n;
pub mod persistence;
pub mod settings;
pub mod state;
pub mod store;
