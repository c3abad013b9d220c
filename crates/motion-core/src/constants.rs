// Shared tuning defaults for the animation engine. These are visual-taste
// values sampled from the shipped site; callers override them through the
// *Params structs rather than editing here.

// Integration safety
pub const MAX_STEP_DT_SEC: f32 = 1.0 / 15.0; // clamp dt spikes (tab backgrounding)
pub const VELOCITY_EPS_SEC: f64 = 1e-5; // guards duplicate-timestamp samples

// Pointer-follow spring (magnetic elements)
pub const FOLLOW_STIFFNESS: f32 = 150.0;
pub const FOLLOW_DAMPING: f32 = 15.0;
pub const FOLLOW_MASS: f32 = 0.1;

// Scroll-velocity smoothing spring
pub const VELOCITY_STIFFNESS: f32 = 400.0;
pub const VELOCITY_DAMPING: f32 = 50.0;
pub const VELOCITY_MASS: f32 = 1.0;

// Marquee drift and modulation
pub const MARQUEE_BASE_VELOCITY: f32 = 2.0; // percent of strip width per second
pub const MARQUEE_WRAP_LO: f32 = -45.0;
pub const MARQUEE_WRAP_HI: f32 = -20.0;
// Scroll velocity (px/s) -> drift multiplier, clamped at both ends so
// flinging the page cannot teleport the strip.
pub const MARQUEE_FACTOR_POINTS: [(f32, f32); 3] = [(-1000.0, -5.0), (0.0, 0.0), (1000.0, 5.0)];

// Fabric surface waves
pub const SURFACE_GRID_SIZE: usize = 64; // vertices per side
pub const WAVE_FREQ_X: f32 = 0.5;
pub const WAVE_FREQ_Y: f32 = 0.3;
pub const WAVE_SPEED_X: f32 = 0.5;
pub const WAVE_SPEED_Y: f32 = 0.3;
pub const WAVE_AMP_X: f32 = 0.5;
pub const WAVE_AMP_Y: f32 = 0.5;
pub const RIPPLE_FREQ: f32 = 2.0;
pub const RIPPLE_SPEED: f32 = 3.0;
pub const RIPPLE_RADIUS: f32 = 5.0;
pub const RIPPLE_STRENGTH: f32 = 0.2;

// Surface presentation
pub const SURFACE_TILT_RAD: f32 = -0.2; // rotation about X, matches the fabric plane
pub const SURFACE_CAMERA_Z: f32 = 6.0;
pub const SURFACE_BASE_COLOR: [f32; 4] = [0.878, 0.871, 0.855, 1.0]; // pearl silk

// Tunnel choreography (per stacked item, staggered by index)
pub const TUNNEL_ITEM_SPAN: f32 = 0.4; // progress window length per item
pub const TUNNEL_ITEM_STAGGER: f32 = 0.2; // window start offset between items
pub const TUNNEL_FADE_SPAN: f32 = 0.05; // fade-in / fade-out ramp length
pub const TUNNEL_SCALE_FAR: f32 = 0.5;
pub const TUNNEL_SCALE_NEAR: f32 = 1.2;
pub const TUNNEL_TWIST_DEG: f32 = 15.0;

// Parallax pairs
pub const PARALLAX_TRAVEL_PX: f32 = 200.0;

// Magnetic pointer-follow
pub const MAGNETIC_STRENGTH: f32 = 40.0; // divisor: larger = weaker pull
pub const MAGNETIC_CAPTURE_RADIUS_PX: f32 = 160.0; // beyond this the target resets to rest
