use crate::app::{App, BlockKind};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

// Locked cells lose their piece colour and share this one
const LOCKED_COLOR: Color = Color::Blue;
const GRID_COLOR: Color = Color::DarkGray;

const CELL_WIDTH: u16 = 2; // Each cell is 2 characters wide
const MIN_INFO_WIDTH: u16 = 20;

pub fn render(f: &mut Frame, app: &mut App) {
    let board_width = app.session.board.width as u16 * CELL_WIDTH + 2; // +2 for borders
    let board_height = app.session.board.height as u16 + 2;
    let min_total_width = board_width + MIN_INFO_WIDTH;
    let min_total_height = board_height + 2; // Title row

    // Check if the terminal is too small to render the game properly
    if f.area().width < min_total_width || f.area().height < min_total_height {
        app.paused_for_resize = true;

        let warning_text = Paragraph::new(
            "Terminal too small!\nPlease resize your terminal\nto continue playing.",
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Blockdrop - Paused"),
        );

        let warning_area = centered_rect(50, 30, f.area());
        f.render_widget(warning_text, warning_area);
        return;
    }
    app.paused_for_resize = false;

    let main_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(board_width), Constraint::Min(MIN_INFO_WIDTH)])
        .split(f.area());

    let game_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),            // Title
            Constraint::Length(board_height), // Game board (fixed height)
            Constraint::Fill(1),
        ])
        .split(main_layout[0]);

    let info_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title
            Constraint::Length(4), // Score
            Constraint::Min(6),    // Controls
        ])
        .split(main_layout[1]);

    let title = Paragraph::new("BLOCKDROP")
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(title, game_layout[0]);

    render_game_board(f, app, game_layout[1]);

    let info_title = Paragraph::new("INFO")
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(info_title, info_layout[0]);

    let game_state = &app.session.game_state;
    let stats = format!(
        "Score: {}\nLines: {}\nPieces: {}",
        game_state.score, game_state.lines_cleared, game_state.pieces_locked,
    );
    let stats_info = Paragraph::new(stats)
        .block(Block::default().borders(Borders::NONE))
        .wrap(Wrap { trim: true });
    f.render_widget(stats_info, info_layout[1]);

    let controls = Paragraph::new(
        "Controls:\n\
        ←/→: Move left/right\n\
        ↓: Soft drop\n\
        ↑: Rotate\n\
        Q: Quit\n\
        ",
    )
    .block(Block::default().borders(Borders::TOP))
    .wrap(Wrap { trim: true });
    f.render_widget(controls, info_layout[2]);
}

fn render_game_board(f: &mut Frame, app: &App, area: Rect) {
    let inner_area = Block::default().borders(Borders::ALL).inner(area);
    f.render_widget(Block::default().borders(Borders::ALL), area);

    if app.config.show_grid {
        for (y, row) in app.session.board.rows().enumerate() {
            for (x, occupied) in row.iter().enumerate() {
                if !occupied {
                    draw_cell(f, inner_area, x as u16, y as u16, "·", GRID_COLOR);
                }
            }
        }
    }

    for (position, kind) in app.get_render_blocks() {
        if position.x < 0 || position.y < 0 {
            continue;
        }
        let color = match kind {
            BlockKind::Locked => LOCKED_COLOR,
            BlockKind::Active(piece_color) => piece_color.get_color(),
        };
        draw_cell(f, inner_area, position.x as u16, position.y as u16, "█", color);
    }

    if app.session.is_terminated() {
        let game_over = Paragraph::new("GAME OVER")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD));

        let game_over_area = Rect {
            x: inner_area.x,
            y: inner_area.y + inner_area.height / 2,
            width: inner_area.width,
            height: 1,
        };

        f.render_widget(game_over, game_over_area);
    }
}

// Paint one board cell as two terminal columns so it looks roughly square
fn draw_cell(f: &mut Frame, area: Rect, x: u16, y: u16, symbol: &str, color: Color) {
    let cell_x = area.left() + x * CELL_WIDTH;
    let cell_y = area.top() + y;
    if cell_y >= area.bottom() {
        return;
    }

    for dx in 0..CELL_WIDTH {
        if cell_x + dx >= area.right() {
            break;
        }
        if let Some(cell) = f.buffer_mut().cell_mut((cell_x + dx, cell_y)) {
            cell.set_symbol(symbol);
            cell.set_fg(color);
        }
    }
}

/// Helper function to create a centered rect using up certain percentage of the available rect
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
