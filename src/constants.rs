use glam::Vec3;

// Shared tuning constants for the carousel motion model.

// Cyclic track
pub const DEFAULT_RADIUS: f32 = 330.0; // turnaround radius in container-local units
pub const ODD_FAR_ARC_COEF: f32 = 1.5; // far arc stretch when the handle count is odd
pub const DEGENERATE_RAIL_FRACTION: f32 = 1e-5; // rail length, in spacings, when too few handles fill a rail

// Linear track
pub const DEFAULT_LINEAR_STEP: [f32; 3] = [200.0, 0.0, 0.0]; // spacing between neighbours

// Drag and momentum
pub const DEFAULT_MOMENTUM_AMOUNT: f32 = 35.0; // momentum gained per unit of drag
pub const MOMENTUM_INPUT_SCALE: f32 = 0.01; // applied together with momentum_amount
pub const MOMENTUM_BLEND: f32 = 0.67; // lerp factor when folding a drag sample into momentum
pub const MOMENTUM_DAMPING: f32 = 9.0; // spring-dampen strength for coasting
pub const MOMENTUM_STOP_THRESHOLD: f32 = 0.01; // below this magnitude the carousel is at rest
pub const SCROLL_SPRING: f32 = 20.0; // residual scroll decays toward zero at this strength
pub const SCROLL_SNAP: f32 = 0.0001; // residual scroll below this is treated as zero
pub const SCROLL_MOMENTUM_FACTOR: f32 = 0.05; // residual scroll -> momentum correction
pub const DEFAULT_SCROLL_WHEEL_FACTOR: f32 = 0.25; // wheel notches -> residual scroll

// Centering
pub const DEFAULT_SPRING_STRENGTH: f32 = 8.0; // critically damped approach rate
pub const CYCLIC_SETTLE_EPSILON: f32 = 0.001; // scalar distance at which centering snaps
pub const VECTOR_SETTLE_EPSILON_SQ: f32 = 0.00001; // squared vector distance at which centering snaps
pub const RECENTER_LOOKAHEAD_SECONDS: f32 = 2.0; // momentum projection horizon when recentering
pub const RECENTER_LOOKAHEAD_SCALE: f32 = 0.001; // projection -> center offset

// Spring integration
pub const MAX_SPRING_STEP_SEC: f32 = 1.0; // larger frame deltas are clamped
pub const MAX_FRAME_DT_SEC: f32 = 0.25; // FrameClock clamp for stalled frames

#[inline]
pub fn default_linear_step() -> Vec3 {
    Vec3::from(DEFAULT_LINEAR_STEP)
}
