use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};
use ratatui::{backend::Backend, Frame, Terminal};

use crate::config::AppConfig;
use crate::game::{GameState, MoveOutcome, Player, PlayerId, COLS};

use super::game_view;

/// Which screen the app is showing.
enum Screen {
    /// The name entry form, the counterpart of the original game's color
    /// form. No game exists yet (or the previous one was discarded).
    NameEntry,
    Playing,
}

/// The name entry form: one field per seat.
struct NameForm {
    one: String,
    two: String,
    focus: PlayerId,
}

impl NameForm {
    fn new(config: &AppConfig) -> Self {
        NameForm {
            one: config.players.one.clone(),
            two: config.players.two.clone(),
            focus: PlayerId::One,
        }
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            PlayerId::One => &mut self.one,
            PlayerId::Two => &mut self.two,
        }
    }
}

pub struct App {
    config: AppConfig,
    screen: Screen,
    form: NameForm,
    game: Option<GameState>,
    selected_column: usize,
    message: Option<String>,
    /// Where the board text was last drawn, for mouse hit-testing.
    board_area: Rect,
    should_quit: bool,
}

impl App {
    /// Create the app on the name entry screen, pre-filled from config.
    /// With `autostart` the form is skipped and a game begins immediately.
    pub fn new(config: AppConfig, autostart: bool) -> Self {
        let form = NameForm::new(&config);
        let mut app = App {
            config,
            screen: Screen::NameEntry,
            form,
            game: None,
            selected_column: COLS / 2,
            message: None,
            board_area: Rect::default(),
            should_quit: false,
        };
        if autostart {
            app.start_game();
        }
        app
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard and mouse events
    fn handle_events(&mut self) -> io::Result<()> {
        let tick_rate = Duration::from_millis(self.config.ui.tick_rate_ms);
        if event::poll(tick_rate)? {
            match event::read()? {
                Event::Key(key) => self.handle_key(key),
                Event::Mouse(mouse) => self.handle_mouse(mouse),
                _ => {}
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match self.screen {
            Screen::NameEntry => self.handle_form_key(key),
            Screen::Playing => self.handle_game_key(key),
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Tab | KeyCode::Up | KeyCode::Down => {
                self.form.focus = self.form.focus.other();
            }
            KeyCode::Backspace => {
                self.form.focused_mut().pop();
            }
            KeyCode::Enter => {
                self.start_game();
            }
            KeyCode::Char(c) => {
                self.form.focused_mut().push(c);
            }
            _ => {}
        }
    }

    fn handle_game_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column < COLS - 1 {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece(self.selected_column);
            }
            KeyCode::Char('r') => {
                // Back to the form; the old game is discarded entirely
                self.game = None;
                self.screen = Screen::NameEntry;
            }
            _ => {}
        }
    }

    /// Left-click on a board column drops a piece there, the click-driven
    /// placement the original game bound to its top row.
    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        if !matches!(self.screen, Screen::Playing) {
            return;
        }
        if let Some(column) = self.column_at(mouse.column, mouse.row) {
            self.message = None;
            self.selected_column = column;
            self.drop_piece(column);
        }
    }

    /// Map a terminal position to a board column, mirroring the text layout
    /// produced by `game_view::render`.
    fn column_at(&self, x: u16, y: u16) -> Option<usize> {
        if !self.board_area.contains(Position::new(x, y)) {
            return None;
        }
        let cells_left = self.board_area.x + 3; // left gutter before the first cell
        if x < cells_left {
            return None;
        }
        let column = ((x - cells_left) / 3) as usize;
        (column < COLS).then_some(column)
    }

    /// Start a fresh game from the form, discarding any previous state.
    fn start_game(&mut self) {
        let defaults = &self.config.players;
        let one = non_blank(&self.form.one, &defaults.one);
        let two = non_blank(&self.form.two, &defaults.two);

        self.game = Some(GameState::new(Player::new(one), Player::new(two)));
        self.selected_column = COLS / 2;
        self.message = None;
        self.screen = Screen::Playing;
    }

    /// Drop the current player's piece and reflect the outcome.
    fn drop_piece(&mut self, column: usize) {
        let Some(game) = self.game.as_mut() else {
            return;
        };

        match game.attempt_move(column) {
            Ok(MoveOutcome::Continue { .. }) => {}
            Ok(MoveOutcome::ColumnFull) => {
                self.message = Some("Column is full!".to_string());
            }
            Ok(MoveOutcome::Win { player }) => {
                self.message = Some(format!("{} wins!", game.player(player).name()));
            }
            Ok(MoveOutcome::Tie) => {
                self.message = Some("Tie!".to_string());
            }
            Ok(MoveOutcome::GameOver) => {
                self.message = Some("Game over! Press 'r' for a new game.".to_string());
            }
            Err(err) => {
                self.message = Some(err.to_string());
            }
        }
    }

    fn render(&mut self, frame: &mut Frame) {
        match &self.screen {
            Screen::NameEntry => {
                game_view::render_name_entry(frame, &self.form.one, &self.form.two, self.form.focus);
            }
            Screen::Playing => {
                if let Some(game) = &self.game {
                    self.board_area =
                        game_view::render(frame, game, self.selected_column, &self.message);
                }
            }
        }
    }
}

fn non_blank<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        fallback
    } else {
        trimmed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(AppConfig::default(), false)
    }

    #[test]
    fn test_starts_on_name_entry() {
        let app = app();
        assert!(matches!(app.screen, Screen::NameEntry));
        assert!(app.game.is_none());
        assert_eq!(app.form.one, "Red");
        assert_eq!(app.form.two, "Yellow");
    }

    #[test]
    fn test_autostart_skips_form() {
        let app = App::new(AppConfig::default(), true);
        assert!(matches!(app.screen, Screen::Playing));
        assert!(app.game.is_some());
    }

    #[test]
    fn test_form_submit_starts_game_with_entered_names() {
        let mut app = app();
        app.form.one = "Alice".to_string();
        app.form.two = "Bob".to_string();
        app.handle_key(KeyEvent::from(KeyCode::Enter));

        let game = app.game.as_ref().unwrap();
        assert_eq!(game.player(PlayerId::One).name(), "Alice");
        assert_eq!(game.player(PlayerId::Two).name(), "Bob");
        assert_eq!(app.selected_column, COLS / 2);
    }

    #[test]
    fn test_blank_names_fall_back_to_defaults() {
        let mut app = app();
        app.form.one = "  ".to_string();
        app.form.two.clear();
        app.handle_key(KeyEvent::from(KeyCode::Enter));

        let game = app.game.as_ref().unwrap();
        assert_eq!(game.player(PlayerId::One).name(), "Red");
        assert_eq!(game.player(PlayerId::Two).name(), "Yellow");
    }

    #[test]
    fn test_form_typing_and_focus() {
        let mut app = app();
        app.form.one.clear();
        app.handle_key(KeyEvent::from(KeyCode::Char('h')));
        app.handle_key(KeyEvent::from(KeyCode::Char('i')));
        assert_eq!(app.form.one, "hi");

        app.handle_key(KeyEvent::from(KeyCode::Tab));
        app.handle_key(KeyEvent::from(KeyCode::Backspace));
        assert_eq!(app.form.two, "Yello");
    }

    #[test]
    fn test_selector_stays_in_bounds() {
        let mut app = App::new(AppConfig::default(), true);
        for _ in 0..20 {
            app.handle_key(KeyEvent::from(KeyCode::Right));
        }
        assert_eq!(app.selected_column, COLS - 1);

        for _ in 0..20 {
            app.handle_key(KeyEvent::from(KeyCode::Left));
        }
        assert_eq!(app.selected_column, 0);
    }

    #[test]
    fn test_drop_via_keyboard() {
        let mut app = App::new(AppConfig::default(), true);
        app.handle_key(KeyEvent::from(KeyCode::Enter));

        let game = app.game.as_ref().unwrap();
        assert_eq!(game.current_player(), PlayerId::Two);
    }

    #[test]
    fn test_win_message_names_winner() {
        let mut app = app();
        app.form.one = "Alice".to_string();
        app.form.two = "Bob".to_string();
        app.handle_key(KeyEvent::from(KeyCode::Enter));

        // Alice stacks column 0, Bob column 1; Alice's fourth piece wins
        for col in [0, 1, 0, 1, 0, 1, 0] {
            app.drop_piece(col);
        }
        assert_eq!(app.message.as_deref(), Some("Alice wins!"));
        assert!(app.game.as_ref().unwrap().is_terminal());
    }

    #[test]
    fn test_restart_discards_game() {
        let mut app = App::new(AppConfig::default(), true);
        app.drop_piece(3);
        app.handle_key(KeyEvent::from(KeyCode::Char('r')));

        assert!(matches!(app.screen, Screen::NameEntry));
        assert!(app.game.is_none());
    }

    #[test]
    fn test_click_maps_to_column() {
        let mut app = App::new(AppConfig::default(), true);
        app.board_area = Rect::new(10, 5, game_view::BOARD_TEXT_WIDTH, game_view::BOARD_TEXT_HEIGHT);

        // Gutter is 3 wide, cells 3 wide each: x = 10+3+3*2 hits column 2
        assert_eq!(app.column_at(19, 8), Some(2));
        // Left gutter is not a column
        assert_eq!(app.column_at(11, 8), None);
        // Outside the board entirely
        assert_eq!(app.column_at(50, 8), None);
    }

    #[test]
    fn test_click_drops_piece() {
        let mut app = App::new(AppConfig::default(), true);
        app.board_area = Rect::new(0, 0, game_view::BOARD_TEXT_WIDTH, game_view::BOARD_TEXT_HEIGHT);

        let mouse = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 3, // first cell
            row: 2,
            modifiers: crossterm::event::KeyModifiers::NONE,
        };
        app.handle_mouse(mouse);

        assert_eq!(app.selected_column, 0);
        let game = app.game.as_ref().unwrap();
        assert_eq!(
            game.board().get(5, 0),
            crate::game::Cell::Owned(PlayerId::One)
        );
    }
}
