use std::time::Duration;

// Shared layout/interaction tuning constants used by the core and the web frontend.

// Device classification
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0; // width at or below which the layout is mobile
pub const TABLET_BREAKPOINT_PX: f64 = 1024.0; // upper bound of the tablet width range
pub const MOBILE_UA_TOKENS: &[&str] = &[
    "android",
    "webos",
    "iphone",
    "ipad",
    "ipod",
    "blackberry",
    "iemobile",
    "opera mini",
];
// Matched case-sensitively. Every UA containing "iPad" already matches the
// "ipad" mobile token first, so this never decides a class on its own.
pub const TABLET_UA_TOKENS: &[&str] = &["iPad"];
pub const ORIENTATION_SETTLE: Duration = Duration::from_millis(100);

// Activity-driven visibility of the floating controls
pub const ACTIVITY_QUIET_WINDOW: Duration = Duration::from_millis(4000);

// Drag-to-scroll strips
pub const DRAG_SCROLL_SENSITIVITY: f64 = 1.2; // scroll px per dragged px

// Split pane (desktop only)
pub const SPLIT_MIN_PERCENT: f64 = 30.0;
pub const SPLIT_MAX_PERCENT: f64 = 80.0;
pub const SPLIT_DEFAULT_PERCENT: f64 = 70.0;

// Persistence
pub const STORAGE_KEY: &str = "mobile-menu-storage";

// Camera
pub const DEFAULT_CAMERA_EYE: [f32; 3] = [5.0, 5.0, 5.0];
pub const MIN_POLAR_ANGLE: f32 = std::f32::consts::FRAC_PI_4;
pub const MAX_POLAR_ANGLE: f32 = 3.0 * std::f32::consts::FRAC_PI_4;
pub const SHOWCASE_AZIMUTH: f32 = std::f32::consts::FRAC_PI_4;
pub const SHOWCASE_POLAR: f32 = std::f32::consts::FRAC_PI_3;

// Loading screen stages: (upper bound in percent, increment per tick)
pub const LOADING_INITIALIZING: (f32, f32) = (25.0, 0.8);
pub const LOADING_ASSETS: (f32, f32) = (75.0, 0.6);
pub const LOADING_PREPARING: (f32, f32) = (100.0, 1.2);
