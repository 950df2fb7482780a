use crate::game::{Board, Cell, GameState, PlayerId, COLS, ROWS};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Width of the rendered board text: 3-char left gutter, cells of 3 chars,
/// 2-char right edge. Mouse hit-testing in the app relies on this layout.
pub const BOARD_TEXT_WIDTH: u16 = 3 + 3 * COLS as u16 + 2;

/// Height of the rendered board text: column numbers, two border rows, the
/// grid itself, and the selection indicator.
pub const BOARD_TEXT_HEIGHT: u16 = ROWS as u16 + 4;

/// Render the playing screen. Returns the rectangle the board text was
/// drawn into so the app can map mouse clicks back to columns.
pub fn render(
    frame: &mut Frame,
    state: &GameState,
    selected_column: usize,
    message: &Option<String>,
) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                 // Header
            Constraint::Min(BOARD_TEXT_HEIGHT),    // Board
            Constraint::Length(3),                 // Message
            Constraint::Length(3),                 // Controls
        ])
        .split(frame.area());

    render_header(frame, state, chunks[0]);
    let board_area = render_board(frame, state, selected_column, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
    board_area
}

/// Resolve each seat's piece color from its player name, the way the
/// original browser game used the entered name as a CSS color. Names that
/// do not parse as a terminal color fall back to red and yellow; when both
/// names resolve to the same color, seat two is reassigned so the pieces
/// stay distinguishable.
pub fn piece_colors(state: &GameState) -> (Color, Color) {
    let one = parse_color(state.player(PlayerId::One).name()).unwrap_or(Color::Red);
    let mut two = parse_color(state.player(PlayerId::Two).name()).unwrap_or(Color::Yellow);
    if two == one {
        two = if one == Color::Yellow {
            Color::Red
        } else {
            Color::Yellow
        };
    }
    (one, two)
}

fn parse_color(name: &str) -> Option<Color> {
    name.trim().parse().ok()
}

fn seat_color(state: &GameState, id: PlayerId) -> Color {
    let (one, two) = piece_colors(state);
    match id {
        PlayerId::One => one,
        PlayerId::Two => two,
    }
}

fn render_header(frame: &mut Frame, state: &GameState, area: Rect) {
    let (status, color) = if state.is_terminal() {
        ("Game over".to_string(), Color::White)
    } else {
        let current = state.current_player();
        (
            format!("Current player: {}", state.player(current).name()),
            seat_color(state, current),
        )
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Connect Four"));

    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, state: &GameState, selected_column: usize, area: Rect) -> Rect {
    let board_area = centered(area, BOARD_TEXT_WIDTH, BOARD_TEXT_HEIGHT);
    let mut lines = Vec::new();

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")]; // Padding (3 chars to match "  ║")
    for col in 0..COLS {
        if col == selected_column {
            col_line.push(Span::styled(
                format!(" {} ", col + 1),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(format!(" {} ", col + 1)));
        }
    }
    lines.push(Line::from(col_line));

    // Top border
    lines.push(Line::from("  ╔══════════════════════╗"));

    // Board rows
    for row in 0..ROWS {
        lines.push(board_row(state, row));
    }

    // Bottom border
    lines.push(Line::from("  ╚══════════════════════╝"));

    // Selection indicator
    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..COLS {
        if col == selected_column {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    lines.push(Line::from(indicator_line));

    frame.render_widget(Paragraph::new(lines), board_area);
    board_area
}

fn board_row(state: &GameState, row: usize) -> Line<'static> {
    let board: &Board = state.board();
    let (one, two) = piece_colors(state);

    let mut spans = vec![Span::raw("  ║")];
    for col in 0..COLS {
        let (symbol, color) = match board.get(row, col) {
            Cell::Empty => (" . ", Color::DarkGray),
            Cell::Owned(PlayerId::One) => (" ● ", one),
            Cell::Owned(PlayerId::Two) => (" ● ", two),
        };
        spans.push(Span::styled(symbol, Style::default().fg(color)));
    }
    spans.push(Span::raw(" ║"));
    Line::from(spans)
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let line = Line::from("←/→: Move  |  Enter/Space: Drop  |  Click a column  |  R: New game  |  Q: Quit");
    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}

/// Render the name entry form shown before a game starts.
pub fn render_name_entry(frame: &mut Frame, one: &str, two: &str, focus: PlayerId) {
    let form_area = centered(frame.area(), 44, 8);

    let field = |label: &str, value: &str, focused: bool| {
        let style = if focused {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let cursor = if focused { "█" } else { "" };
        Line::from(vec![
            Span::raw(format!("  {label} ")),
            Span::styled(format!("{value}{cursor}"), style),
        ])
    };

    let lines = vec![
        Line::from(""),
        field("Player 1:", one, focus == PlayerId::One),
        field("Player 2:", two, focus == PlayerId::Two),
        Line::from(""),
        Line::from("  Names double as piece colors, e.g. \"red\""),
        Line::from("  Tab: switch  |  Enter: start  |  Esc: quit"),
    ];

    let form = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("New game"));

    frame.render_widget(form, form_area);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Player;

    fn game_with(one: &str, two: &str) -> GameState {
        GameState::new(Player::new(one), Player::new(two))
    }

    #[test]
    fn test_color_names_map_to_piece_colors() {
        let state = game_with("blue", "Green");
        assert_eq!(piece_colors(&state), (Color::Blue, Color::Green));
    }

    #[test]
    fn test_non_color_names_fall_back() {
        let state = game_with("Alice", "Bob");
        assert_eq!(piece_colors(&state), (Color::Red, Color::Yellow));
    }

    #[test]
    fn test_duplicate_colors_stay_distinguishable() {
        let state = game_with("red", "red");
        assert_eq!(piece_colors(&state), (Color::Red, Color::Yellow));

        let state = game_with("yellow", "yellow");
        assert_eq!(piece_colors(&state), (Color::Yellow, Color::Red));
    }

    #[test]
    fn test_hex_names_parse() {
        let state = game_with("#2e86de", "Bob");
        assert_eq!(
            piece_colors(&state),
            (Color::Rgb(0x2e, 0x86, 0xde), Color::Yellow)
        );
    }
}
