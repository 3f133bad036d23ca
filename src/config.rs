use ratatui::style::Color;
use ratatui::symbols::border;

/// Logical grid dimensions passed through the game as a named type.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Square grid with `count` cells per side.
    #[must_use]
    pub fn square(count: u16) -> Self {
        Self {
            width: count,
            height: count,
        }
    }

    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self::square(DEFAULT_GRID_COUNT)
    }
}

/// Colors applied to all visual elements.
#[derive(Debug)]
pub struct Theme {
    pub snake_head: Color,
    pub snake_body: Color,
    pub snake_tail: Color,
    pub food: Color,
    pub play_bg: Color,
    pub border_fg: Color,
    pub hud_value: Color,
    pub hud_accent: Color,
    pub hud_muted: Color,
    pub menu_title: Color,
    pub menu_footer: Color,
}

/// Slate snake on a light board, red food.
pub const THEME_CLASSIC: Theme = Theme {
    snake_head: Color::Rgb(45, 55, 72),
    snake_body: Color::Rgb(74, 85, 104),
    snake_tail: Color::Rgb(113, 128, 150),
    food: Color::Rgb(229, 62, 62),
    play_bg: Color::Rgb(247, 250, 252),
    border_fg: Color::Rgb(160, 174, 192),
    hud_value: Color::White,
    hud_accent: Color::Rgb(56, 161, 105),
    hud_muted: Color::DarkGray,
    menu_title: Color::Rgb(102, 126, 234),
    menu_footer: Color::DarkGray,
};

/// Rounded border around the play field.
pub const BORDER_PLAY_AREA: border::Set = border::ROUNDED;

/// Glyph for one logical cell; cells are two columns wide so the board is square.
pub const GLYPH_CELL: &str = "██";

/// Glyph drawn for the food cell.
pub const GLYPH_FOOD: &str = "◆ ";

/// Terminal columns used per logical cell.
pub const CELL_WIDTH: u16 = 2;

/// Cells per side of the default square grid.
pub const DEFAULT_GRID_COUNT: u16 = 20;

/// Smallest and largest accepted `--grid` values.
pub const MIN_GRID_COUNT: u16 = 5;
pub const MAX_GRID_COUNT: u16 = 60;

/// Tick interval at score zero, in milliseconds.
pub const BASE_TICK_INTERVAL_MS: u64 = 150;

/// Interval reduction applied per speed step.
pub const TICK_INTERVAL_STEP_MS: u64 = 10;

/// Minimum tick interval in milliseconds.
pub const MIN_TICK_INTERVAL_MS: u64 = 80;

/// Score needed per speed step.
pub const POINTS_PER_SPEED_STEP: u32 = 5;

/// Random food samples tried before falling back to a free-cell scan.
pub const MAX_FOOD_SPAWN_ATTEMPTS: u32 = 256;

/// Minimum travel along the dominant axis for a pointer drag to count as a swipe.
pub const SWIPE_MIN_DISTANCE: f32 = 30.0;

/// Swipe threshold for terminal mouse drags, in scaled cell units.
pub const TERMINAL_SWIPE_MIN_DISTANCE: f32 = 3.0;

/// Terminal rows are roughly twice as tall as columns are wide.
pub const TERMINAL_ROW_ASPECT: f32 = 2.0;

/// How long the input poll waits for an event each frame, in milliseconds.
pub const FRAME_POLL_MS: u64 = 16;
