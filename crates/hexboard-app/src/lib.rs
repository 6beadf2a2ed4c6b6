//! Shared library module for the Hexboard app crate.
#![allow(missing_docs, clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub mod action;
pub mod action_handler;
pub mod app;
pub mod config;
pub mod listeners;
pub mod state;
pub mod ui;
pub mod view_model_builder;

pub use self::{app::HexboardApp, config::AppConfig};
