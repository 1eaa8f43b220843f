#![warn(clippy::all, clippy::pedantic)]

#[cfg(test)]
mod tests {
    use crate::app::App;
    use crate::components::{Board, TetrominoType};
    use crate::config::GameConfig;
    use crate::tests::test_utils::{fill_row, scripted_session, scripted_session_on};
    use crate::ui::{self, centered_rect};
    use ratatui::{backend::TestBackend, layout::Rect, prelude::*};

    // Helper function to create a test terminal
    fn create_test_terminal(width: u16, height: u16) -> Terminal<TestBackend> {
        let backend = TestBackend::new(width, height);
        Terminal::new(backend).unwrap()
    }

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 100);
        let centered = centered_rect(50, 40, area);

        assert_eq!(centered.width, 50);
        assert_eq!(centered.height, 40);
        assert_eq!(centered.x, 25);
        assert_eq!(centered.y, 30);
    }

    #[test]
    fn test_render_with_small_terminal() {
        let mut terminal = create_test_terminal(20, 10);
        let mut app = App::with_session(
            GameConfig::default(),
            scripted_session(&[TetrominoType::O]),
        );

        terminal.draw(|f| ui::render(f, &mut app)).unwrap();

        assert!(app.paused_for_resize);

        // Growing the terminal resumes play
        let mut terminal = create_test_terminal(80, 30);
        terminal.draw(|f| ui::render(f, &mut app)).unwrap();
        assert!(!app.paused_for_resize);
    }

    #[test]
    fn test_render_board_and_score() {
        let mut terminal = create_test_terminal(80, 30);
        let mut app = App::with_session(
            GameConfig::default(),
            scripted_session(&[TetrominoType::O]),
        );
        app.session.game_state.score = 120;

        terminal.draw(|f| ui::render(f, &mut app)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Score: 120"));
        assert!(text.contains('█'));
        assert!(!text.contains("GAME OVER"));
    }

    #[test]
    fn test_game_over_rendering() {
        let mut board = Board::new(10, 20);
        fill_row(&mut board, 0);
        let mut app = App::with_session(
            GameConfig::default(),
            scripted_session_on(board, &[TetrominoType::T]),
        );

        let mut terminal = create_test_terminal(80, 30);
        terminal.draw(|f| ui::render(f, &mut app)).unwrap();

        assert!(buffer_text(&terminal).contains("GAME OVER"));
    }

    #[test]
    fn test_grid_dots_follow_config() {
        let mut app = App::with_session(
            GameConfig {
                show_grid: false,
                ..GameConfig::default()
            },
            scripted_session(&[TetrominoType::O]),
        );

        let mut terminal = create_test_terminal(80, 30);
        terminal.draw(|f| ui::render(f, &mut app)).unwrap();
        assert!(!buffer_text(&terminal).contains('·'));

        app.config.show_grid = true;
        terminal.draw(|f| ui::render(f, &mut app)).unwrap();
        assert!(buffer_text(&terminal).contains('·'));
    }
}
