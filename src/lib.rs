//! Minimal task-management backend: usuarios and tareas persisted in
//! SQLite, exposed over two HTTP mutation endpoints.

pub mod app;
pub mod config;
pub mod error;
pub mod state;
pub mod tareas;
pub mod usuarios;
