pub mod api;
pub mod booking;
pub mod health;
pub mod language;
pub mod relay;
pub mod site;
