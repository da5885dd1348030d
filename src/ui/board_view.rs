//! Board rendering for the GUI

use egui::{Align2, Color32, CornerRadius, FontId, Painter, Pos2, Rect, Sense, Stroke, StrokeKind, Vec2};

use crate::config::MarkStyles;
use crate::rules::is_valid_move;
use crate::{Board, Mark, Pos};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
    size: usize,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 60.0,
            board_rect: Rect::NOTHING,
            size: 3,
        }
    }
}

/// What the board view needs to know about the round
pub struct BoardScene<'a> {
    pub board: &'a Board,
    pub styles: &'a MarkStyles,
    pub current: Mark,
    pub last_move: Option<Pos>,
    pub winning_line: Option<&'a [Pos]>,
    /// Whether clicks are taken as moves
    pub accepting_input: bool,
}

impl BoardView {
    /// Render the board and return click position if any
    pub fn show(&mut self, ui: &mut egui::Ui, scene: &BoardScene<'_>) -> Option<Pos> {
        let available_size = ui.available_size();
        let board_px = available_size.x.min(available_size.y) - 20.0;

        let (response, painter) =
            ui.allocate_painter(Vec2::new(board_px, board_px), Sense::click());
        self.layout(response.rect, scene.board.size());

        painter.rect_filled(self.board_rect, CornerRadius::same(6), BOARD_BG);
        self.draw_grid(&painter);
        self.draw_coordinates(&painter);

        if let Some(pos) = scene.last_move {
            self.draw_last_move_marker(&painter, pos);
        }
        self.draw_marks(&painter, scene.board, scene.styles);
        if let Some(line) = scene.winning_line {
            self.draw_winning_line(&painter, line);
        }

        let mut clicked_pos = None;
        if scene.accepting_input {
            if let Some(board_pos) = response.hover_pos().and_then(|p| self.screen_to_board(p)) {
                let is_valid = is_valid_move(scene.board, board_pos);
                self.draw_hover_preview(&painter, board_pos, scene.current, scene.styles, is_valid);

                if response.clicked() && is_valid {
                    clicked_pos = Some(board_pos);
                }
            }
        }

        clicked_pos
    }

    /// Fit an `size`x`size` grid into `rect`
    pub fn layout(&mut self, rect: Rect, size: usize) {
        self.board_rect = rect;
        self.size = size.max(1);
        self.cell_size = (rect.width() - 2.0 * BOARD_MARGIN) / self.size as f32;
    }

    fn grid_origin(&self) -> Pos2 {
        self.board_rect.min + Vec2::splat(BOARD_MARGIN)
    }

    /// Interior lines only, like a paper board
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let origin = self.grid_origin();
        let span = self.cell_size * self.size as f32;

        for i in 1..self.size {
            let offset = i as f32 * self.cell_size;
            painter.line_segment(
                [origin + Vec2::new(offset, 0.0), origin + Vec2::new(offset, span)],
                stroke,
            );
            painter.line_segment(
                [origin + Vec2::new(0.0, offset), origin + Vec2::new(span, offset)],
                stroke,
            );
        }
    }

    /// Zero-based row and column numbers, as typed in the console
    fn draw_coordinates(&self, painter: &Painter) {
        let font = FontId::proportional(13.0);
        let origin = self.grid_origin();

        for i in 0..self.size {
            let center = (i as f32 + 0.5) * self.cell_size;
            painter.text(
                Pos2::new(origin.x + center, origin.y - BOARD_MARGIN * 0.5),
                Align2::CENTER_CENTER,
                i.to_string(),
                font.clone(),
                TEXT_MUTED,
            );
            painter.text(
                Pos2::new(origin.x - BOARD_MARGIN * 0.5, origin.y + center),
                Align2::CENTER_CENTER,
                i.to_string(),
                font.clone(),
                TEXT_MUTED,
            );
        }
    }

    fn draw_marks(&self, painter: &Painter, board: &Board, styles: &MarkStyles) {
        for (pos, mark) in board.cells() {
            if let Some(style) = styles.get(mark) {
                self.draw_glyph(painter, pos, style.glyph, mark_color(style.color, 255));
            }
        }
    }

    fn draw_glyph(&self, painter: &Painter, pos: Pos, glyph: char, color: Color32) {
        painter.text(
            self.board_to_screen(pos),
            Align2::CENTER_CENTER,
            glyph,
            FontId::proportional(self.cell_size * MARK_SIZE_RATIO),
            color,
        );
    }

    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        painter.rect_filled(self.cell_rect(pos).shrink(4.0), CornerRadius::same(6), LAST_MOVE_FILL);
    }

    fn draw_winning_line(&self, painter: &Painter, line: &[Pos]) {
        let stroke = Stroke::new(WIN_LINE_WIDTH, WIN_HIGHLIGHT);
        for pos in line {
            painter.rect_stroke(
                self.cell_rect(*pos).shrink(6.0),
                CornerRadius::same(6),
                stroke,
                StrokeKind::Inside,
            );
        }
        if let (Some(first), Some(last)) = (line.first(), line.last()) {
            painter.line_segment([self.board_to_screen(*first), self.board_to_screen(*last)], stroke);
        }
    }

    fn draw_hover_preview(
        &self,
        painter: &Painter,
        pos: Pos,
        turn: Mark,
        styles: &MarkStyles,
        is_valid: bool,
    ) {
        let rect = self.cell_rect(pos).shrink(4.0);
        if !is_valid {
            painter.rect_filled(rect, CornerRadius::same(6), hover_invalid());
            return;
        }
        painter.rect_filled(rect, CornerRadius::same(6), hover_valid());
        if let Some(style) = styles.get(turn) {
            self.draw_glyph(painter, pos, style.glyph, mark_color(style.color, 90));
        }
    }

    fn cell_rect(&self, pos: Pos) -> Rect {
        Rect::from_center_size(self.board_to_screen(pos), Vec2::splat(self.cell_size))
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.grid_origin();
        let col = (relative.x / self.cell_size).floor() as i32;
        let row = (relative.y / self.cell_size).floor() as i32;

        if Pos::is_valid(row, col, self.size) {
            Some(Pos::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Center of a cell in screen coordinates
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        self.grid_origin()
            + Vec2::new(
                (pos.col as f32 + 0.5) * self.cell_size,
                (pos.row as f32 + 0.5) * self.cell_size,
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(size: usize) -> BoardView {
        let mut view = BoardView::default();
        let side = 2.0 * BOARD_MARGIN + 100.0 * size as f32;
        view.layout(Rect::from_min_size(Pos2::ZERO, Vec2::splat(side)), size);
        view
    }

    #[test]
    fn test_cell_centers_round_trip() {
        for size in [3, 5, 8] {
            let view = view(size);
            for (pos, _) in Board::new(size).unwrap().cells() {
                assert_eq!(view.screen_to_board(view.board_to_screen(pos)), Some(pos));
            }
        }
    }

    #[test]
    fn test_points_outside_grid() {
        let view = view(4);
        assert_eq!(view.screen_to_board(Pos2::new(1.0, 1.0)), None);
        let past = BOARD_MARGIN + 400.0 + 1.0;
        assert_eq!(view.screen_to_board(Pos2::new(past, BOARD_MARGIN + 1.0)), None);
        assert_eq!(
            view.screen_to_board(Pos2::new(BOARD_MARGIN + 399.0, BOARD_MARGIN + 1.0)),
            Some(Pos::new(0, 3))
        );
    }
}
