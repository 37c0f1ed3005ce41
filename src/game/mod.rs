mod direction;
mod grid;
mod snake;
mod steering;
pub(crate) use self::direction::Direction;
pub(crate) use self::grid::{Cell, GridModel};
use self::snake::SnakeBody;
use self::steering::Steering;
use crate::app::AppState;
use crate::command::Command;
use crate::config::Config;
use crate::consts;
use crate::util::center_rect;
use crossterm::event::{poll, read, Event};
use log::{debug, info, trace};
use rand::Rng;
use ratatui::{
    buffer::{self, Buffer},
    layout::{Constraint, Layout, Margin, Rect, Size},
    style::Style,
    text::{Line, Span},
    widgets::Widget,
    Frame,
};
use std::num::NonZeroU32;
use std::time::{Duration, Instant};

/// The settings a game is played with
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Rules {
    pub(crate) grid: GridModel,

    /// Time between movements of the snake
    pub(crate) tick_period: Duration,

    /// Ticks that must pass after a turn before another turn is accepted
    pub(crate) turn_cooldown: NonZeroU32,
}

impl From<&Config> for Rules {
    fn from(config: &Config) -> Rules {
        Rules {
            grid: GridModel::new(config.grid_size),
            tick_period: Duration::from_secs(1) / config.tick_rate.get(),
            turn_cooldown: config.turn_cooldown,
        }
    }
}

impl Default for Rules {
    fn default() -> Rules {
        Rules::from(&Config::default())
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Game<R = rand::rngs::ThreadRng> {
    rng: R,
    rules: Rules,
    snake: SnakeBody,
    /// `None` once the snake has filled the grid
    fruit: Option<Cell>,
    steering: Steering,
    state: GameState,
    next_tick: Option<Instant>,
}

impl Game<rand::rngs::ThreadRng> {
    pub(crate) fn new(rules: Rules) -> Self {
        Game::new_with_rng(rules, rand::rng())
    }
}

impl<R: Rng> Game<R> {
    pub(crate) fn new_with_rng(rules: Rules, rng: R) -> Game<R> {
        info!(
            "Starting new game on a {size}×{size} grid",
            size = rules.grid.size()
        );
        let mut game = Game {
            rng,
            rules,
            snake: SnakeBody::new(rules.grid, consts::START_CELL),
            fruit: None,
            steering: Steering::new(consts::START_DIRECTION, rules.turn_cooldown),
            state: GameState::Running,
            next_tick: None,
        };
        game.place_fruit();
        game
    }

    pub(crate) fn process_input(&mut self) -> std::io::Result<Option<AppState>> {
        if self.running() {
            if self.next_tick.is_none() {
                self.next_tick = Some(Instant::now() + self.rules.tick_period);
            }
            let when = self.next_tick.expect("next_tick should be Some");
            let wait = when.saturating_duration_since(Instant::now());
            if wait.is_zero() || !poll(wait)? {
                self.advance();
                self.next_tick = None;
                Ok(None)
            } else {
                Ok(self.handle_event(read()?))
            }
        } else {
            Ok(self.handle_event(read()?))
        }
    }

    /// Run one tick: move the snake, then check whether it ran into itself,
    /// filled the grid, or ate the fruit.
    fn advance(&mut self) {
        if !self.running() {
            return;
        }
        let direction = self.steering.direction();
        let grow = self.fruit == Some(self.snake.peek_next_head(direction));
        self.snake.advance(direction, grow);
        self.steering = self.steering.cool_down();
        if self.snake.check_self_collision() {
            info!(
                "Snake ran into itself at {:?}; final score {}",
                self.snake.head(),
                self.score()
            );
            self.state = GameState::Lost;
        } else if self.snake.len() == self.rules.grid.capacity() {
            info!("Snake filled the grid; final score {}", self.score());
            self.fruit = None;
            self.state = GameState::Won;
        } else if grow {
            debug!("Fruit eaten at {:?}; score {}", self.snake.head(), self.score());
            self.place_fruit();
        }
    }

    fn place_fruit(&mut self) {
        self.fruit = self
            .rules
            .grid
            .random_free_cell(&self.snake, &mut self.rng);
        trace!("Fruit placed at {:?}", self.fruit);
    }
}

impl<R> Game<R> {
    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self, frame.area());
    }

    fn handle_event(&mut self, event: Event) -> Option<AppState> {
        let cmd = Command::from_key_event(event.as_key_press_event()?)?;
        match self.state {
            GameState::Running => match cmd {
                Command::Quit => return Some(AppState::Quit),
                Command::Up => self.turn(Direction::Up),
                Command::Right => self.turn(Direction::Right),
                Command::Down => self.turn(Direction::Down),
                Command::Left => self.turn(Direction::Left),
                _ => (),
            },
            GameState::Lost | GameState::Won => match cmd {
                Command::R => return Some(AppState::Game(Game::new(self.rules))),
                Command::Quit | Command::Q | Command::Space => return Some(AppState::Quit),
                _ => (),
            },
        }
        None
    }

    fn turn(&mut self, direction: Direction) {
        let steering = self.steering.turn(direction);
        if steering != self.steering {
            trace!("Turning {direction:?}");
        }
        self.steering = steering;
    }

    fn running(&self) -> bool {
        self.state == GameState::Running
    }

    /// Number of fruits eaten so far
    fn score(&self) -> usize {
        self.snake.len() - 1
    }

    fn head_symbol(&self) -> char {
        match self.steering.direction() {
            Direction::Up => consts::SNAKE_HEAD_UP_SYMBOL,
            Direction::Right => consts::SNAKE_HEAD_RIGHT_SYMBOL,
            Direction::Down => consts::SNAKE_HEAD_DOWN_SYMBOL,
            Direction::Left => consts::SNAKE_HEAD_LEFT_SYMBOL,
        }
    }

    /// The size of the area the game is drawn in: a score bar, the bordered
    /// board, and two lines of messages
    fn display_size(&self) -> Size {
        let board = self.rules.grid.size().saturating_add(2);
        Size {
            width: board.max(consts::MIN_DISPLAY_WIDTH),
            height: board.saturating_add(3),
        }
    }
}

impl<R> Widget for &Game<R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = center_rect(area, self.display_size());
        let [score_area, block_area, msg1_area, msg2_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(display);
        Line::styled(format!(" Score: {}", self.score()), consts::SCORE_BAR_STYLE)
            .render(score_area, buf);

        let mut block_size = self.rules.grid.dimensions();
        block_size.width = block_size.width.saturating_add(2);
        block_size.height = block_size.height.saturating_add(2);
        let block_area = center_rect(block_area, block_size);
        DottedBorder.render(block_area, buf);

        let level_area = block_area.inner(Margin::new(1, 1));
        let mut level = Canvas {
            area: level_area,
            buf,
        };
        for &c in &self.snake.cells()[1..] {
            level.draw_cell(c, consts::SNAKE_BODY_SYMBOL, consts::SNAKE_STYLE);
        }
        if let Some(fruit) = self.fruit {
            level.draw_cell(fruit, consts::FRUIT_SYMBOL, consts::FRUIT_STYLE);
        }
        // Draw the head last so that, if it's a collision, we overwrite
        // whatever it's colliding with
        if self.state == GameState::Lost {
            level.draw_cell(
                self.snake.head(),
                consts::COLLISION_SYMBOL,
                consts::COLLISION_STYLE,
            );
        } else {
            level.draw_cell(self.snake.head(), self.head_symbol(), consts::SNAKE_STYLE);
        }

        let verdict = match self.state {
            GameState::Running => return,
            GameState::Lost => " You lost!",
            GameState::Won => " You won!",
        };
        Span::from(verdict).render(msg1_area, buf);
        Line::from_iter([
            Span::raw(" Press "),
            Span::styled("r", consts::KEY_STYLE),
            Span::raw(" to restart, "),
            Span::styled("q", consts::KEY_STYLE),
            Span::raw(" to close"),
        ])
        .render(msg2_area, buf);
    }
}

/// Drawing with coordinates relative to the top-left corner of `area`.
/// Anything falling outside the buffer is dropped.
struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    fn cell_at(&mut self, x: u16, y: u16) -> Option<&mut buffer::Cell> {
        let x = self.area.x.checked_add(x)?;
        let y = self.area.y.checked_add(y)?;
        self.buf.cell_mut((x, y))
    }

    fn draw_cell(&mut self, c: Cell, symbol: char, style: Style) {
        if let Some(cell) = self.cell_at(c.x, c.y) {
            cell.set_char(symbol);
            cell.set_style(Style::reset().patch(style));
        }
    }
}

/// A border drawn with dots, to show that the edges of the board wrap around
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct DottedBorder;

impl Widget for DottedBorder {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let right = area.width.saturating_sub(1);
        let bottom = area.height.saturating_sub(1);
        let mut canvas = Canvas { area, buf };
        for y in 0..area.height {
            for x in 0..area.width {
                let glyph = match (x == 0 || x == right, y == 0 || y == bottom) {
                    (true, true) => '·',
                    (false, true) => '⋯',
                    (true, false) => '⋮',
                    (false, false) => continue,
                };
                if let Some(cell) = canvas.cell_at(x, y) {
                    cell.set_char(glyph);
                }
            }
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum GameState {
    Running,
    /// The snake ran into itself
    Lost,
    /// The snake has filled the board
    Won,
}
