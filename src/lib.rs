//! Road Crossing Library
//!
//! A small "cross the road" arcade game that can run headless or with a Bevy
//! UI. The `raster` module holds the midpoint line and circle routines used
//! for drawing; `simulation` owns the game rules.

pub mod raster;
pub mod render;
pub mod simulation;

#[cfg(feature = "ui")]
pub mod ui;
