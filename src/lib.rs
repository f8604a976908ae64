//! Reddot Mobile
//!
//! A single static screen rendered with egui: a globe icon, a formatted
//! title on a rounded card, and a placeholder button.

pub mod config;
pub mod error;
pub mod text;
pub mod ui;
