use macroquad::prelude::Color;

pub const INITIAL_WINDOW_WIDTH: i32 = 1000;
pub const INITIAL_WINDOW_HEIGHT: i32 = 800;
pub const MSAA_SAMPLES: i32 = 4;
pub const UI_FONT_PATH: &str = "assets/fonts/Lato-Regular.ttf";

pub const LEFT_MARGIN: f32 = 70.0;
pub const RIGHT_MARGIN: f32 = 30.0;
pub const TOP_MARGIN: f32 = 110.0;
pub const BOTTOM_MARGIN: f32 = 90.0;

pub const TITLE_Y: f32 = 40.0;
pub const CONTROLS_Y: f32 = 78.0;
pub const X_GRID_LINES: usize = 10;
pub const Y_GRID_LINES: usize = 8;

pub const TARGET_FRAME_RATE: f64 = 60.0;
pub const TIMESTEP_S: f64 = 1.0 / TARGET_FRAME_RATE;

// Palette is owned by the render layer; the engine never sees a color.
pub const BACKGROUND: Color = Color::new(0.0, 0.0, 0.0, 1.0);
pub const GRID: Color = Color::new(0.16, 0.17, 0.19, 1.0);
pub const AXIS: Color = Color::new(0.55, 0.58, 0.62, 1.0);
pub const HUD_TEXT: Color = Color::new(1.0, 1.0, 1.0, 1.0);
pub const EARTH_TRACE: Color = Color::new(0.737, 0.153, 0.196, 1.0);
pub const MOON_TRACE: Color = Color::new(0.76, 0.78, 0.82, 1.0);
