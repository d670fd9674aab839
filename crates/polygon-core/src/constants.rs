use glam::Vec3;

// Shared visual tuning constants used by both web and native frontends.

// Geometry
pub const POLYGON_SIDES: usize = 5;
pub const POLYGON_RADIUS: f32 = 1.0;

// Per-tick rotation increments (radians); one tick per display refresh
pub const ROTATION_SPEED_X: f32 = 0.01;
pub const ROTATION_SPEED_Y: f32 = 0.02;

// Camera
pub const FOVY_RADIANS: f32 = std::f32::consts::FRAC_PI_4; // 45 degrees
pub const Z_NEAR: f32 = 0.1;
pub const Z_FAR: f32 = 100.0;
pub const VIEW_OFFSET: Vec3 = Vec3::new(0.0, 0.0, -6.0); // pushes the polygon in front of the eye

// Color presets toggled by the "change color" control (RGBA)
pub const PRIMARY_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0]; // red
pub const ALTERNATE_COLOR: [f32; 4] = [0.0, 0.0, 1.0, 1.0]; // blue

// Background
pub const CLEAR_COLOR: [f64; 4] = [0.0, 0.0, 0.0, 1.0];
