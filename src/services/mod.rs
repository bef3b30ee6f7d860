pub mod delivery;
pub mod mail;
