pub mod blog;
pub mod config;
pub mod errors;
pub mod gallery;
pub mod handlers;
pub mod html;
pub mod i18n;
pub mod models;
pub mod render;
pub mod routes;
pub mod services;
pub mod state;
