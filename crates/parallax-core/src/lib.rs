pub mod config;
pub mod consts;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod listener;
pub mod pager;
