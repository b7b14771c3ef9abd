// lib.rs - Toroidal Conway's Game of Life engine
//
// A World stores cells in two flat buffers with a one-cell ghost border,
// wraps its edges before every step and tracks a box around the live cells
// so both stepping and redraw can skip dead areas of large worlds.
// Simulation adds a run flag and a generation counter on top.

pub mod bounds;
pub mod error;
pub mod grid;
pub mod patterns;
pub mod render;
pub mod rules;
pub mod simulation;

pub use bounds::{LiveBounds, Region};
pub use error::WorldError;
pub use grid::{CLASSIC_TYPES, World};
pub use patterns::{PATTERNS, Pattern};
pub use render::{Palette, debug_dump, draw_world, redraw_area, render_ascii};
pub use simulation::Simulation;
