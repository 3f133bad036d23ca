use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;

use crate::config::{BORDER_PLAY_AREA, CELL_WIDTH, GLYPH_CELL, GLYPH_FOOD, GridSize, Theme};
use crate::game::{GameStatus, Snapshot};
use crate::snake::Position;
use crate::ui::hud::render_hud;
use crate::ui::menu::{render_game_over_menu, render_start_menu};

/// Renders the full game frame from an immutable snapshot.
pub fn render(frame: &mut Frame<'_>, snapshot: &Snapshot, theme: &Theme) {
    let area = frame.area();
    let board_area = render_hud(frame, area, snapshot, theme);
    let play_area = centered_board(board_area, snapshot.grid);

    let block = Block::bordered()
        .border_set(BORDER_PLAY_AREA)
        .border_style(Style::new().fg(theme.border_fg))
        .style(Style::new().bg(theme.play_bg));

    let inner = block.inner(play_area);
    frame.render_widget(block, play_area);

    if let Some(food) = snapshot.food {
        render_cell(frame, inner, snapshot.grid, food, GLYPH_FOOD, Style::new().fg(theme.food));
    }
    render_snake(frame, inner, snapshot, theme);

    match snapshot.status {
        GameStatus::NotStarted => render_start_menu(frame, play_area, snapshot.high_score, theme),
        GameStatus::Over => render_game_over_menu(frame, play_area, snapshot, theme),
        GameStatus::Running => {}
    }
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, snapshot: &Snapshot, theme: &Theme) {
    let tail = snapshot.body.last().copied();

    for segment in &snapshot.body {
        let color = if Some(*segment) == tail {
            theme.snake_tail
        } else {
            theme.snake_body
        };
        render_cell(frame, inner, snapshot.grid, *segment, GLYPH_CELL, Style::new().fg(color));
    }

    render_cell(
        frame,
        inner,
        snapshot.grid,
        snapshot.head,
        GLYPH_CELL,
        Style::new()
            .fg(theme.snake_head)
            .add_modifier(Modifier::BOLD),
    );
}

fn render_cell(
    frame: &mut Frame<'_>,
    inner: Rect,
    bounds: GridSize,
    position: Position,
    glyph: &str,
    style: Style,
) {
    let Some((x, y)) = logical_to_terminal(inner, bounds, position) else {
        return;
    };
    frame.buffer_mut().set_string(x, y, glyph, style);
}

/// Centers a bordered board of `bounds` cells inside `area`, shrinking to fit.
fn centered_board(area: Rect, bounds: GridSize) -> Rect {
    let width = bounds.width.saturating_mul(CELL_WIDTH).saturating_add(2);
    let height = bounds.height.saturating_add(2);

    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [board] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    board
}

fn logical_to_terminal(inner: Rect, bounds: GridSize, position: Position) -> Option<(u16, u16)> {
    if !position.is_within_bounds(bounds) {
        return None;
    }

    let x_offset = u16::try_from(position.x).ok()?.checked_mul(CELL_WIDTH)?;
    let y_offset = u16::try_from(position.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x.saturating_add(CELL_WIDTH) > inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
