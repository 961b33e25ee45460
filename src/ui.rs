#![warn(clippy::all, clippy::pedantic)]
#![allow(
    // Allow truncation when casting from usize to u16 since board dimensions are always small
    clippy::cast_possible_truncation,
    // Allow sign loss when going from signed to unsigned types since we validate values are non-negative before casting
    clippy::cast_sign_loss
)]

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::app::App;
use crate::components::{BlockColor, Board, Phase, Position, Tetromino};

// Each board cell is two characters wide and one tall
pub const CELL_WIDTH: u16 = 2;
pub const CELL_HEIGHT: u16 = 1;

const MIN_INFO_WIDTH: u16 = 20;
const GRID_COLOR: Color = Color::Rgb(30, 30, 30);
const SHADOW_COLOR: Color = Color::Rgb(10, 10, 10);

/// Outer size of the framed board, borders included.
#[must_use]
pub fn board_frame_size(board: &Board) -> (u16, u16) {
    (
        board.width as u16 * CELL_WIDTH + 2,
        board.height as u16 * CELL_HEIGHT + 2,
    )
}

pub fn render(f: &mut Frame, app: &mut App) {
    let (board_width, board_height) = board_frame_size(app.board());
    let min_total_width = board_width + MIN_INFO_WIDTH;
    let min_total_height = board_height + 1; // Title line above the board

    // Check if the terminal is too small to render the game properly
    if f.area().width < min_total_width || f.area().height < min_total_height {
        let warning_text = Paragraph::new(
            "Terminal too small!\nPlease resize your terminal\nto continue playing.",
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Retro Blocks"));

        let warning_area = centered_rect(80, 50, f.area());
        f.render_widget(warning_text, warning_area);
        return;
    }

    let main_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(board_width), Constraint::Min(MIN_INFO_WIDTH)])
        .split(f.area());

    let game_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),            // Title
            Constraint::Length(board_height), // Game board
            Constraint::Fill(1),
        ])
        .split(main_layout[0]);

    let title = Paragraph::new("RETRO BLOCKS").alignment(Alignment::Center);
    f.render_widget(title, game_layout[0]);

    render_game_board(f, app, game_layout[1]);
    render_info(f, app, main_layout[1]);
}

fn render_game_board(f: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default().borders(Borders::ALL);
    let inner_area = block.inner(area);
    f.render_widget(block, area);

    let active = app.active_piece();
    let display = app.display.clone();
    let phase = app.phase();
    let board = app.board();
    let buf = f.buffer_mut();

    if display.show_grid {
        draw_grid(buf, inner_area, board);
    }

    if let Some((tetromino, position)) = active {
        if display.show_shadow && phase != Phase::GameOver {
            draw_shadow(buf, inner_area, &tetromino, position);
        }
    }

    for (y, row) in board.rows().iter().enumerate() {
        for (x, cell) in row.iter().enumerate() {
            if let Some(color) = cell {
                draw_block(buf, inner_area, x as i32, y as i32, *color);
            }
        }
    }

    if let Some((tetromino, position)) = active {
        for (block_x, block_y) in tetromino.shape.blocks() {
            draw_block(
                buf,
                inner_area,
                position.x + block_x,
                position.y + block_y,
                tetromino.color,
            );
        }
    }

    match phase {
        Phase::Paused => render_overlay(f, inner_area, "PAUSED", Color::Yellow),
        Phase::GameOver => render_overlay(f, inner_area, "GAME OVER", Color::Red),
        Phase::Running => {}
    }
}

fn render_info(f: &mut Frame, app: &App, area: Rect) {
    let state = match app.phase() {
        Phase::Running => "Playing",
        Phase::Paused => "Paused",
        Phase::GameOver => "Game over - Enter to restart",
    };
    let pieces = app
        .world
        .resource::<crate::components::GameState>()
        .pieces_locked;

    let info = Paragraph::new(format!(
        "{state}\nPieces: {pieces}\n\n\
        Controls:\n\
        ←/→: Move left/right\n\
        ↑/Space: Rotate\n\
        ↓/Enter: Hard drop\n\
        P/Esc: Pause\n\
        Q: Quit"
    ))
    .block(Block::default().borders(Borders::LEFT).title(" INFO "))
    .wrap(Wrap { trim: true });
    f.render_widget(info, area);
}

/// Terminal position of the left half of board cell `(x, y)`, if it lies inside `area`.
#[must_use]
pub fn cell_origin(area: Rect, x: i32, y: i32) -> Option<(u16, u16)> {
    if x < 0 || y < 0 {
        return None;
    }
    let column = area.x + x as u16 * CELL_WIDTH;
    let row = area.y + y as u16 * CELL_HEIGHT;
    (column + 1 < area.right() && row < area.bottom()).then_some((column, row))
}

/// Light and dark variants of a color for the bevelled edges of a block.
#[must_use]
pub fn bevel_colors((r, g, b): (u8, u8, u8)) -> (Color, Color) {
    let lighten = |c: u8| c + (255 - c) / 2;
    let darken = |c: u8| c / 2;
    (
        Color::Rgb(lighten(r), lighten(g), lighten(b)),
        Color::Rgb(darken(r), darken(g), darken(b)),
    )
}

// Filled block: light edge along the top left, dark edge along the bottom right
fn draw_block(buf: &mut Buffer, area: Rect, x: i32, y: i32, color: BlockColor) {
    let Some((column, row)) = cell_origin(area, x, y) else {
        return;
    };
    let (light, dark) = bevel_colors(color.rgb());
    let fill = color.to_color();

    if let Some(cell) = buf.cell_mut((column, row)) {
        cell.set_symbol("▔").set_fg(light).set_bg(fill);
    }
    if let Some(cell) = buf.cell_mut((column + 1, row)) {
        cell.set_symbol("▁").set_fg(dark).set_bg(fill);
    }
}

fn draw_grid(buf: &mut Buffer, area: Rect, board: &Board) {
    for y in 0..board.height {
        for x in 0..board.width {
            if let Some((column, row)) = cell_origin(area, x as i32, y as i32) {
                if let Some(cell) = buf.cell_mut((column, row)) {
                    cell.set_symbol("·").set_fg(GRID_COLOR);
                }
            }
        }
    }
}

// Shadow sits half a cell right and one row below the falling piece
fn draw_shadow(buf: &mut Buffer, area: Rect, tetromino: &Tetromino, position: Position) {
    for (block_x, block_y) in tetromino.shape.blocks() {
        let Some((column, row)) = cell_origin(area, position.x + block_x, position.y + block_y)
        else {
            continue;
        };
        let row = row + CELL_HEIGHT;
        for column in [column + 1, column + 2] {
            if column < area.right() && row < area.bottom() {
                if let Some(cell) = buf.cell_mut((column, row)) {
                    cell.set_symbol("░").set_fg(SHADOW_COLOR);
                }
            }
        }
    }
}

fn render_overlay(f: &mut Frame, area: Rect, text: &str, color: Color) {
    let width = (text.len() as u16 + 2).min(area.width);
    let overlay_area = Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height / 2,
        width,
        height: 1,
    };

    let overlay = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD));

    f.render_widget(Clear, overlay_area);
    f.render_widget(overlay, overlay_area);
}

/// Helper function to create a centered rect using up certain percentage of the available rect
#[must_use]
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
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
