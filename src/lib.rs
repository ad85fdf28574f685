//! ARAM statistics dashboard: fetches champion data from the stats backend
//! and renders it into a navigable HTML page.

pub mod api;
pub mod config;
pub mod dispatch;
pub mod display;
pub mod error;
pub mod lookup;
pub mod render;
pub mod view;
pub mod wiring;
