pub mod api;
pub mod backend;
pub mod config;
pub mod error;
pub mod format;
pub mod generation;
pub mod models;
pub mod navigation;
pub mod session;
pub mod status;
pub mod toast;
pub mod views;

#[cfg(test)]
pub(crate) mod testing;
