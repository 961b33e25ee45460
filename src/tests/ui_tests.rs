#![warn(clippy::all, clippy::pedantic)]

#[cfg(test)]
mod tests {
    use crate::app::App;
    use crate::components::{BlockColor, Board, Input, Phase};
    use crate::config::InputStyle;
    use crate::tests::test_utils::{O_PIECE, create_test_app, fill_cells, step};
    use crate::ui::{self, bevel_colors, board_frame_size, cell_origin, centered_rect};
    use ratatui::{backend::TestBackend, buffer::Buffer, layout::Rect, prelude::*};

    // Helper function to create a test terminal
    fn create_test_terminal(width: u16, height: u16) -> Terminal<TestBackend> {
        let backend = TestBackend::new(width, height);
        Terminal::new(backend).unwrap()
    }

    fn draw(app: &mut App, width: u16, height: u16) -> Buffer {
        let mut terminal = create_test_terminal(width, height);
        terminal.draw(|f| ui::render(f, app)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn buffer_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut text = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                text.push_str(buffer.cell((x, y)).unwrap().symbol());
            }
            text.push('\n');
        }
        text
    }

    // The board's inner area starts below the title line and inside the border
    const BOARD_LEFT: u16 = 1;
    const BOARD_TOP: u16 = 2;

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
    fn test_board_frame_size() {
        assert_eq!(board_frame_size(&Board::new(10, 20)), (22, 22));
    }

    #[test]
    fn test_cell_origin() {
        let area = Rect::new(1, 2, 20, 20);
        assert_eq!(cell_origin(area, 0, 0), Some((1, 2)));
        assert_eq!(cell_origin(area, 3, 5), Some((7, 7)));
        assert_eq!(cell_origin(area, 9, 19), Some((19, 21)));
        assert_eq!(cell_origin(area, 10, 0), None);
        assert_eq!(cell_origin(area, 0, -1), None);
    }

    #[test]
    fn test_bevel_colors() {
        let (light, dark) = bevel_colors((255, 85, 0));
        assert_eq!(light, Color::Rgb(255, 170, 127));
        assert_eq!(dark, Color::Rgb(127, 42, 0));
    }

    #[test]
    fn test_small_terminal_shows_warning() {
        let mut app = App::new();
        let buffer = draw(&mut app, 30, 12);
        assert!(buffer_text(&buffer).contains("Terminal"));
    }

    #[test]
    fn test_falling_piece_is_drawn() {
        let mut app = create_test_app(&O_PIECE, InputStyle::Held);
        let buffer = draw(&mut app, 60, 30);
        let fill = BlockColor::new(0).to_color();

        // The square spawns at (4, 0), two characters per cell
        for (x, y) in [(4, 0), (5, 0), (4, 1), (5, 1)] {
            let column = BOARD_LEFT + x * 2;
            let row = BOARD_TOP + y;
            let left = buffer.cell((column, row)).unwrap();
            let right = buffer.cell((column + 1, row)).unwrap();
            assert_eq!(left.bg, fill);
            assert_eq!(right.bg, fill);
            assert_eq!(left.symbol(), "▔");
            assert_eq!(right.symbol(), "▁");
        }
    }

    #[test]
    fn test_locked_cells_and_grid() {
        let mut app = create_test_app(&O_PIECE, InputStyle::Held);
        fill_cells(
            &mut app.world.resource_mut::<Board>(),
            &[(0, 19)],
            BlockColor::new(5),
        );
        let buffer = draw(&mut app, 60, 30);

        let locked = buffer.cell((BOARD_LEFT, BOARD_TOP + 19)).unwrap();
        assert_eq!(locked.bg, BlockColor::new(5).to_color());

        let empty = buffer.cell((BOARD_LEFT + 2, BOARD_TOP + 10)).unwrap();
        assert_eq!(empty.symbol(), "·");
    }

    #[test]
    fn test_grid_can_be_hidden() {
        let mut app = create_test_app(&O_PIECE, InputStyle::Held);
        app.display.show_grid = false;
        let buffer = draw(&mut app, 60, 30);

        let empty = buffer.cell((BOARD_LEFT + 2, BOARD_TOP + 10)).unwrap();
        assert_eq!(empty.symbol(), " ");
    }

    #[test]
    fn test_shadow_below_piece() {
        let mut app = create_test_app(&O_PIECE, InputStyle::Held);
        let buffer = draw(&mut app, 60, 30);

        // One row under the square's bottom edge, shifted half a cell right
        let shadow = buffer
            .cell((BOARD_LEFT + 5 * 2 + 2, BOARD_TOP + 2))
            .unwrap();
        assert_eq!(shadow.symbol(), "░");
    }

    #[test]
    fn test_paused_overlay() {
        let mut app = create_test_app(&O_PIECE, InputStyle::Held);
        step(&mut app, 10, Input {
            pause_pressed: true,
            ..Input::default()
        });
        assert_eq!(app.phase(), Phase::Paused);

        let buffer = draw(&mut app, 60, 30);
        assert!(buffer_text(&buffer).contains("PAUSED"));
    }

    #[test]
    fn test_game_over_overlay() {
        let mut app = create_test_app(&O_PIECE, InputStyle::Held);
        app.world.resource_mut::<crate::components::GameState>().phase = Phase::GameOver;

        let buffer = draw(&mut app, 60, 30);
        assert!(buffer_text(&buffer).contains("GAME OVER"));
    }
}
