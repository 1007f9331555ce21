//! Purescope: explore labeled tabular data through class-pure attribute
//! regions.
//!
//! The engine in [`analysis`] finds intervals of single attributes where every
//! row shares one class, keeps the significant ones and splits rows into easy
//! cases (covered by such a region) and hard cases. [`state::AppState`] holds
//! one session's derived results for the viewer and the report tool.

pub mod analysis;
pub mod color;
pub mod config;
pub mod data;
pub mod report;
pub mod state;
