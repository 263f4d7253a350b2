pub mod config;
pub mod layout;
pub mod params;
pub mod scroll;
pub mod sweep;
