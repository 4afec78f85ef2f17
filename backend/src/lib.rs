//! # Butterfly Rust Backend
//!
//! High-performance sunspot butterfly diagram engine.
//!
//! This crate converts historical sunspot observation records (per-group
//! latitude extents with observation dates) into butterfly diagrams:
//! latitude-vs-time occupancy images merged across independent observation
//! sources. Validated tabular records come from an external catalog-loading
//! collaborator; rendered figures are produced by an external charting
//! collaborator consuming the RGB grid and axis indices exposed here.
//!
//! ## Features
//!
//! - **Grid Definition**: validated latitude/date grids with calendar-step
//!   intervals and JSON persistence
//! - **Aggregation**: per-period latitude-interval tables with gap filling
//! - **Rasterization**: per-source occupancy bitmaps on a shared grid
//! - **Composition**: bit-plane merge of independent sources and
//!   color-table rendering to an RGB pixel grid
//! - **Axis Indices**: date and latitude index construction for charts
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: consolidated public surface for collaborators
//! - [`error`]: typed domain errors
//! - [`models`]: grid, interval, observation, image, and color types
//! - [`services`]: aggregation, rasterization, composition, axes, trimming

pub mod api;
pub mod error;
pub mod models;
pub mod services;
