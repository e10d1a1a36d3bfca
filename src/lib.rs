//! Vibe Board Frontend
//!
//! Leptos CSR client for the kanban board: quick list, three board
//! columns with drag-and-drop, and a debounced notes panel, all kept in
//! sync with the REST API by reloading after every change.

pub mod app;
pub mod commands;
pub mod components;
pub mod config;
pub mod context;
pub mod controller;
pub mod error;
pub mod models;
pub mod notes;
pub mod render;
pub mod screen;
pub mod store;
#[cfg(test)]
mod testing;
