//! Assorted constants & hard-coded configuration
use crate::game::{Cell, Direction};
use ratatui::style::{Color, Modifier, Style};
use std::num::NonZeroU32;

/// Default number of cells along each side of the grid
pub(crate) const DEFAULT_GRID_SIZE: u16 = 20;

/// Smallest allowed grid size.  The starting cell must fit on the grid.
pub(crate) const MIN_GRID_SIZE: u16 = 3;

/// Largest allowed grid size
pub(crate) const MAX_GRID_SIZE: u16 = 40;

/// Default number of snake movements per second
pub(crate) const DEFAULT_TICK_RATE: NonZeroU32 = match NonZeroU32::new(12) {
    Some(rate) => rate,
    None => panic!("DEFAULT_TICK_RATE should be nonzero"),
};

/// Default number of ticks that must pass after a turn before another turn
/// will be accepted
pub(crate) const DEFAULT_TURN_COOLDOWN: NonZeroU32 = match NonZeroU32::new(1) {
    Some(ticks) => ticks,
    None => panic!("DEFAULT_TURN_COOLDOWN should be nonzero"),
};

/// Where the snake's head is at the start of a game
pub(crate) const START_CELL: Cell = Cell::new(0, 2);

/// Which way the snake is heading at the start of a game
pub(crate) const START_DIRECTION: Direction = Direction::Down;

/// Minimum width of the area the game is drawn in, so that the messages below
/// the board fit on small grids
pub(crate) const MIN_DISPLAY_WIDTH: u16 = 32;

/// Glyph for the snake's head when it is moving up
pub(crate) const SNAKE_HEAD_UP_SYMBOL: char = 'v';

/// Glyph for the snake's head when it is moving down
pub(crate) const SNAKE_HEAD_DOWN_SYMBOL: char = '^';

/// Glyph for the snake's head when it is moving right
pub(crate) const SNAKE_HEAD_RIGHT_SYMBOL: char = '<';

/// Glyph for the snake's head when it is moving left
pub(crate) const SNAKE_HEAD_LEFT_SYMBOL: char = '>';

/// Glyph for the parts of the snake's body
pub(crate) const SNAKE_BODY_SYMBOL: char = '⚬';

/// Glyph for the fruit
pub(crate) const FRUIT_SYMBOL: char = '●';

/// Glyph for the snake's head when it has run into itself
pub(crate) const COLLISION_SYMBOL: char = '×';

/// Style for the snake's head and body
pub(crate) const SNAKE_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);

/// Style for the fruit
pub(crate) const FRUIT_STYLE: Style = Style::new().fg(Color::LightRed);

/// Style for [`COLLISION_SYMBOL`]
pub(crate) const COLLISION_STYLE: Style = Style::new()
    .fg(Color::LightRed)
    .add_modifier(Modifier::REVERSED);

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for the score bar at the top of the game screen
pub(crate) const SCORE_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);
