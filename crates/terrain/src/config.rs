//! Hard-coded tuning constants for the terrain fly-over.

/// First lattice coordinate along each axis.
pub const GRID_MIN: i32 = -20;
/// One past the last lattice coordinate (exclusive).
pub const GRID_MAX: i32 = 22;
/// Spacing between lattice points.
pub const GRID_STEP: i32 = 1;
/// Number of sample points per axis (42 for the -20..22 lattice).
pub const GRID_POINTS: usize = ((GRID_MAX - GRID_MIN) / GRID_STEP) as usize;

/// Lattice indices are divided by this before the noise lookup, so the
/// surface varies smoothly across neighboring cells.
pub const SAMPLE_SCALE: f32 = 5.0;
/// Noise output in [-1, 1] is multiplied by this to get a world-space height.
pub const HEIGHT_SCALE: f32 = 2.5;
/// Seed for the OpenSimplex noise field.
pub const TERRAIN_SEED: i32 = 1;

/// How far the noise-domain offset scrolls per animation tick.
pub const SCROLL_STEP: f32 = 0.18;
/// Animation tick interval in milliseconds.
pub const TICK_MILLIS: u64 = 10;
