//! # Módulo Server
//!
//! Expone el servidor TCP concurrente.

pub mod tcp;

pub use tcp::Server;
