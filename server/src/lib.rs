//! This crate hosts the app: settings, logging and the launch entry point.
mod application;
mod settings;

pub use application::launch;
pub use settings::{Log, Server, Settings};
