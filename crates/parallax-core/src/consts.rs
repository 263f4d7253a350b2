/// Fraction of one page added outward on both scroll edges so that
/// floor/ceil rounding never leaves a one-pixel seam between pages.
pub const CORRECTION_PERCENTAGE: f64 = 0.01;

/// Overlap preset: half of the excess image width is traversed.
pub const OVERLAP_HALF: f32 = 0.5;

/// Overlap preset: a quarter of the excess image width is traversed.
pub const OVERLAP_QUARTER: f32 = 0.25;

/// Overlap factor applied when none is configured.
pub const DEFAULT_OVERLAP: f32 = OVERLAP_HALF;

/// Raw host-toolkit code for `ScaleMode::FitWidth`.
pub const FIT_WIDTH: i32 = 0;

/// Raw host-toolkit code for `ScaleMode::FitHeight`.
pub const FIT_HEIGHT: i32 = 1;
