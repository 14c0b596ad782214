//! Game constants and runtime configuration defaults

// Screen and grid geometry
/// Width of the rendered screen in pixels
pub const SCREEN_WIDTH: u32 = 800;
/// Height of the rendered screen in pixels
pub const SCREEN_HEIGHT: u32 = 640;
/// Number of cells along each side of the square grid
pub const GRID_SIZE: usize = 5;
/// Size of each grid cell in pixels
pub const CELL_SIZE: u32 = 128;
/// Thickness of the cell outline in pixels
pub const GRID_LINE_WIDTH: u32 = 2;

// Colors
/// Screen fill color
pub const BACKGROUND_COLOR: [u8; 4] = [50, 50, 50, 255];
/// Cell outline color
pub const GRID_COLOR: [u8; 4] = [200, 200, 200, 255];
/// Fill color for icons that could not be loaded
pub const ITEM_COLOR: [u8; 4] = [100, 150, 250, 255];

// Merge rules
/// Mergeable neighbors required before a cell upgrades
pub const MIN_MERGE_NEIGHBORS: usize = 2;

// Animation timings, matching a 100 FPS clock
/// Frames in the grow animation played when an item appears
pub const SPAWN_ANIMATION_FRAMES: usize = 20;
/// Total duration of the spawn animation
pub const SPAWN_ANIMATION_MS: u32 = 200;
/// Frames in the animation played before an item upgrades
pub const MERGE_ANIMATION_FRAMES: usize = 30;
/// Total duration of the merge animation
pub const MERGE_ANIMATION_MS: u32 = 300;
/// Scale the merge animation starts from
pub const MERGE_START_SCALE: f64 = 0.8;

// Assets
/// Default directory searched for icon images
pub const DEFAULT_ASSETS_DIR: &str = "Resources";
/// Subdirectory holding the source resolution of each icon
pub const ICON_RESOLUTION_DIR: &str = "512";
/// File extension of icon images
pub const ICON_EXTENSION: &str = "png";

// Default values for configurable parameters
/// Fixed seed for reproducible sessions
pub const DEFAULT_SEED: u64 = 42;
/// Keypresses simulated by a headless run
pub const DEFAULT_PRESSES: usize = 50;

// Output settings
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 50;
/// Delay of the resting frame written after each keypress
pub const RESTING_FRAME_DELAY_MS: u32 = 250;
/// Quantization speed for GIF frames (1 is slowest, 30 is fastest)
pub const GIF_ENCODER_SPEED: i32 = 10;
