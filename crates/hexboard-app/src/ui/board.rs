//! Board rendering and pointer input.
//!
//! [`render`] turns the model and the selection snapshot into a list of egui
//! shapes for one frame. Everything is computed in logical units and mapped
//! through the viewport transform as the shapes are emitted, so the board
//! stretches with the canvas on both axes.
//!
//! Per cell the draw order is fixed: cell fill, then highlight, then piece.

use eframe::egui::{
    Align2, Color32, FontId, Pos2, Rect, Sense, Shape, Stroke, Ui, Vec2,
};
use hexboard_core::{
    Affine2, AxialCoords, BoardLayout, BoardModel, Point, SelectionSnapshot, Size, Tile,
};

use crate::{
    action::{Action, ActionRequestQueue},
    ui::board_theme::BoardPalette,
};

bitflags::bitflags! {
    /// Layers drawn for one cell, bottom to top.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub(crate) struct CellLayers: u8 {
        const CELL = 0b0000_0001;
        const HIGHLIGHT = 0b0000_0010;
        const PIECE = 0b0000_0100;
        const HINT = 0b0000_1000;
    }
}

/// Hint font height relative to the hex size.
const HINT_FONT_RATIO: f64 = 0.8;

#[must_use]
pub(crate) fn cell_layers(
    coords: AxialCoords,
    tile: Tile,
    snapshot: &SelectionSnapshot,
    hint: Option<u32>,
) -> CellLayers {
    let mut layers = CellLayers::CELL;
    if snapshot.highlights(coords, tile) {
        layers |= CellLayers::HIGHLIGHT;
        if hint.is_some() {
            layers |= CellLayers::HINT;
        }
    }
    if tile.is_occupied() {
        layers |= CellLayers::PIECE;
    }
    layers
}

#[derive(Clone)]
pub(crate) struct BoardViewModel<'a> {
    pub(crate) model: &'a dyn BoardModel,
    pub(crate) layout: BoardLayout,
    pub(crate) snapshot: SelectionSnapshot,
    pub(crate) hints: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct BoardLabel {
    pub(crate) pos: Pos2,
    pub(crate) text: String,
    pub(crate) font_size: f32,
}

/// Output of one render pass, in paint order.
#[derive(Debug, Default)]
pub(crate) struct BoardFrame {
    pub(crate) shapes: Vec<Shape>,
    pub(crate) labels: Vec<BoardLabel>,
}

/// Emits shapes in screen coordinates for logical geometry.
#[derive(Debug, Clone, Copy)]
struct LogicalPainter {
    to_physical: Affine2,
    origin: Pos2,
}

impl LogicalPainter {
    fn new(layout: &BoardLayout, rect: Rect) -> Self {
        let canvas = Size::new(f64::from(rect.width()), f64::from(rect.height()));
        Self {
            to_physical: layout.viewport().logical_to_physical(canvas),
            origin: rect.min,
        }
    }

    #[expect(clippy::cast_possible_truncation)]
    fn pos(&self, logical: Point) -> Pos2 {
        let p = self.to_physical.apply(logical);
        self.origin + Vec2::new(p.x as f32, p.y as f32)
    }

    #[expect(clippy::cast_possible_truncation)]
    fn extent(&self, radius: f64) -> Vec2 {
        let e = self.to_physical.apply_extent(Size::square(radius));
        Vec2::new(e.width as f32, e.height as f32)
    }

    fn hexagon(&self, layout: &BoardLayout, center: Point, fill: Color32) -> Shape {
        let points = layout
            .cell_corners(center)
            .into_iter()
            .map(|corner| self.pos(corner))
            .collect();
        Shape::convex_polygon(points, fill, Stroke::NONE)
    }

    fn disc(&self, center: Point, radius: f64, fill: Color32) -> Shape {
        Shape::ellipse_filled(self.pos(center), self.extent(radius), fill)
    }
}

#[must_use]
pub(crate) fn render(vm: &BoardViewModel<'_>, rect: Rect, palette: &BoardPalette) -> BoardFrame {
    let layout = &vm.layout;
    let painter = LogicalPainter::new(layout, rect);
    let mut frame = BoardFrame::default();

    frame
        .shapes
        .push(Shape::rect_filled(rect, 0.0, palette.background));

    for pos in layout.storage_coords() {
        let Ok(tile) = vm.model.tile_at(pos) else {
            continue;
        };
        let Some(coords) = layout.to_axial(pos) else {
            log::debug!("model reports a tile at {pos}, which is not a board cell");
            continue;
        };
        let center = layout.center_of(coords);
        let hint = if vm.hints {
            vm.model.hint_at(coords)
        } else {
            None
        };
        let layers = cell_layers(coords, tile, &vm.snapshot, hint);

        frame.shapes.push(painter.hexagon(layout, center, palette.cell));
        if layers.contains(CellLayers::HIGHLIGHT) {
            frame
                .shapes
                .push(painter.hexagon(layout, center, palette.cell_highlight));
        }
        if layers.contains(CellLayers::PIECE)
            && let Some(color) = palette.piece(tile)
        {
            frame
                .shapes
                .push(painter.disc(center, layout.piece_radius(), color));
        }
        if layers.contains(CellLayers::HINT)
            && let Some(hint) = hint
        {
            frame.labels.push(BoardLabel {
                pos: painter.pos(center),
                text: hint.to_string(),
                font_size: painter.extent(layout.hex_size() * HINT_FONT_RATIO).y,
            });
        }
    }

    frame
}

pub(crate) fn show(ui: &mut Ui, vm: &BoardViewModel<'_>, action_queue: &mut ActionRequestQueue) {
    let (rect, response) = ui.allocate_exact_size(ui.available_size(), Sense::click());

    if response.clicked()
        && let Some(pointer) = response.interact_pointer_pos()
    {
        let local = pointer - rect.min;
        action_queue.request(Action::Click {
            point: Point::new(f64::from(local.x), f64::from(local.y)),
            canvas: Size::new(f64::from(rect.width()), f64::from(rect.height())),
        });
    }

    let palette = BoardPalette::default();
    let frame = render(vm, rect, &palette);
    let painter = ui.painter_at(rect);
    painter.extend(frame.shapes);
    for label in frame.labels {
        painter.text(
            label.pos,
            Align2::CENTER_CENTER,
            label.text,
            FontId::proportional(label.font_size),
            palette.hint_text,
        );
    }
}

#[cfg(test)]
mod tests {
    use eframe::egui::{Color32, Pos2, Rect, Shape, Vec2};
    use hexboard_core::{
        AxialCoords, BoardLayout, BoardModel, HexBoard, OffBoardError, Point, SelectionSnapshot,
        SelectionState, StorageCoords, Tile, coords,
    };

    use super::{BoardFrame, BoardViewModel, CellLayers, LogicalPainter, cell_layers, render};
    use crate::ui::board_theme::BoardPalette;

    const HIGHLIGHT: Color32 = Color32::from_rgb(0, 255, 255);

    fn rect() -> Rect {
        Rect::from_min_size(Pos2::new(20.0, 10.0), Vec2::new(640.0, 480.0))
    }

    fn snapshot(state: SelectionState, actions_enabled: bool) -> SelectionSnapshot {
        SelectionSnapshot {
            state,
            actions_enabled,
            clicked_out_of_bounds: false,
        }
    }

    fn render_board(board: &HexBoard, snapshot: SelectionSnapshot, hints: bool) -> BoardFrame {
        let vm = BoardViewModel {
            model: board,
            layout: BoardLayout::new(board.side_len()).unwrap(),
            snapshot,
            hints,
        };
        render(&vm, rect(), &BoardPalette::default())
    }

    fn screen_pos(board: &HexBoard, logical: Point) -> Pos2 {
        let layout = BoardLayout::new(board.side_len()).unwrap();
        LogicalPainter::new(&layout, rect()).pos(logical)
    }

    fn inside_convex(points: &[Pos2], p: Pos2) -> bool {
        let mut sign = 0.0_f32;
        for (i, a) in points.iter().enumerate() {
            let b = points[(i + 1) % points.len()];
            let cross = (b - *a).x * (p - *a).y - (b - *a).y * (p - *a).x;
            if cross != 0.0 {
                if sign != 0.0 && cross.signum() != sign {
                    return false;
                }
                sign = cross.signum();
            }
        }
        true
    }

    /// Final colour at `p`: the fill of the topmost shape covering it.
    fn color_at(frame: &BoardFrame, p: Pos2) -> Option<Color32> {
        frame.shapes.iter().rev().find_map(|shape| match shape {
            Shape::Rect(r) => r.rect.contains(p).then_some(r.fill),
            Shape::Ellipse(e) => {
                let d = (p - e.center) / e.radius;
                (d.length_sq() <= 1.0).then_some(e.fill)
            }
            Shape::Path(path) => inside_convex(&path.points, p).then_some(path.fill),
            _ => None,
        })
    }

    fn color_at_cell(board: &HexBoard, frame: &BoardFrame, coords: AxialCoords, dy: f64) -> Option<Color32> {
        let layout = BoardLayout::new(board.side_len()).unwrap();
        let center = layout.center_of(coords);
        color_at(frame, screen_pos(board, Point::new(center.x, center.y + dy)))
    }

    fn cell_shape_count(frame: &BoardFrame) -> usize {
        frame
            .shapes
            .iter()
            .filter(|s| matches!(s, Shape::Path(_)))
            .count()
    }

    #[test]
    fn one_hexagon_per_board_cell() {
        for side_len in 1..=6 {
            let board = HexBoard::new(side_len);
            let frame = render_board(&board, snapshot(SelectionState::NoSelection, true), false);
            assert_eq!(cell_shape_count(&frame), coords::cell_count(side_len));
        }
    }

    #[test]
    fn off_board_storage_draws_nothing() {
        let board = HexBoard::new(3);
        let frame = render_board(&board, snapshot(SelectionState::NoSelection, true), false);
        // Storage (0, 0) is axial (-1, -2), outside the hexagon. The point
        // where its hex would sit stays background.
        assert!(coords::to_axial(StorageCoords::new(0, 0), 3).is_none());
        let ghost = Point::new(-2.0 * 3.0_f64.sqrt() * BoardLayout::DEFAULT_HEX_SIZE, -15.0);
        assert_eq!(
            color_at(&frame, screen_pos(&board, ghost)),
            Some(Color32::DARK_GRAY)
        );
    }

    #[test]
    fn empty_selected_cell_is_highlighted_when_enabled() {
        let board = HexBoard::new(3);
        let selected = SelectionState::Selected(AxialCoords::ORIGIN);

        let frame = render_board(&board, snapshot(selected, true), false);
        assert_eq!(
            color_at_cell(&board, &frame, AxialCoords::ORIGIN, 0.0),
            Some(HIGHLIGHT)
        );
        let other = AxialCoords::ORIGIN.neighbours()[0];
        assert_eq!(
            color_at_cell(&board, &frame, other, 0.0),
            Some(Color32::LIGHT_GRAY)
        );

        let frame = render_board(&board, snapshot(selected, false), false);
        assert_eq!(
            color_at_cell(&board, &frame, AxialCoords::ORIGIN, 0.0),
            Some(Color32::LIGHT_GRAY)
        );
    }

    #[test]
    fn occupied_selected_cell_is_not_highlighted() {
        let mut board = HexBoard::new(3);
        board.set_tile(AxialCoords::ORIGIN, Tile::PlayerB).unwrap();
        let frame = render_board(
            &board,
            snapshot(SelectionState::Selected(AxialCoords::ORIGIN), true),
            false,
        );
        assert_eq!(
            color_at_cell(&board, &frame, AxialCoords::ORIGIN, 0.0),
            Some(Color32::WHITE)
        );
        // Between the piece edge and the cell edge the cell keeps its default fill.
        assert_eq!(
            color_at_cell(&board, &frame, AxialCoords::ORIGIN, 3.5),
            Some(Color32::LIGHT_GRAY)
        );
    }

    #[test]
    fn pieces_use_player_colours() {
        let board = HexBoard::new_game(3);
        let frame = render_board(&board, snapshot(SelectionState::NoSelection, true), false);
        let ring = AxialCoords::ORIGIN.neighbours();
        assert_eq!(
            color_at_cell(&board, &frame, ring[0], 0.0),
            Some(Color32::BLACK)
        );
        assert_eq!(
            color_at_cell(&board, &frame, ring[1], 0.0),
            Some(Color32::WHITE)
        );
        assert_eq!(
            color_at_cell(&board, &frame, AxialCoords::ORIGIN, 0.0),
            Some(Color32::LIGHT_GRAY)
        );
    }

    #[test]
    fn out_of_bounds_pass_draws_default_colour() {
        let board = HexBoard::new(3);
        let frame = render_board(
            &board,
            SelectionSnapshot {
                state: SelectionState::Selected(AxialCoords::ORIGIN),
                actions_enabled: true,
                clicked_out_of_bounds: true,
            },
            false,
        );
        assert_eq!(
            color_at_cell(&board, &frame, AxialCoords::ORIGIN, 0.0),
            Some(Color32::LIGHT_GRAY)
        );
    }

    #[test]
    fn gutter_between_cells_shows_background() {
        let board = HexBoard::new(3);
        let frame = render_board(&board, snapshot(SelectionState::NoSelection, true), false);
        let layout = BoardLayout::new(3).unwrap();
        let a = layout.center_of(AxialCoords::ORIGIN);
        let b = layout.center_of(AxialCoords::ORIGIN.neighbours()[0]);
        assert_eq!(
            color_at(&frame, screen_pos(&board, a.midpoint(b))),
            Some(Color32::DARK_GRAY)
        );
    }

    #[test]
    fn hint_label_only_on_highlighted_cell_with_hints_on() {
        let board = HexBoard::new_game(3);
        let selected = snapshot(SelectionState::Selected(AxialCoords::ORIGIN), true);

        let frame = render_board(&board, selected, true);
        assert_eq!(frame.labels.len(), 1);
        assert_eq!(frame.labels[0].text, "6");
        assert_eq!(
            frame.labels[0].pos,
            screen_pos(&board, Point::ORIGIN)
        );

        let frame = render_board(&board, selected, false);
        assert!(frame.labels.is_empty());

        let frame = render_board(&board, snapshot(SelectionState::NoSelection, true), true);
        assert!(frame.labels.is_empty());
    }

    #[test]
    fn layers_follow_tile_and_selection() {
        let selected = snapshot(SelectionState::Selected(AxialCoords::ORIGIN), true);
        assert_eq!(
            cell_layers(AxialCoords::ORIGIN, Tile::Empty, &selected, None),
            CellLayers::CELL | CellLayers::HIGHLIGHT
        );
        assert_eq!(
            cell_layers(AxialCoords::ORIGIN, Tile::PlayerA, &selected, Some(3)),
            CellLayers::CELL | CellLayers::PIECE
        );
        assert_eq!(
            cell_layers(AxialCoords::ORIGIN, Tile::Empty, &selected, Some(2)),
            CellLayers::CELL | CellLayers::HIGHLIGHT | CellLayers::HINT
        );
    }

    /// A model that claims more cells than the board has.
    struct Overreporting;

    impl BoardModel for Overreporting {
        fn side_len(&self) -> u16 {
            2
        }

        fn tile_at(&self, _pos: StorageCoords) -> Result<Tile, OffBoardError> {
            Ok(Tile::Empty)
        }
    }

    #[test]
    fn cells_without_axial_coordinates_are_skipped() {
        let vm = BoardViewModel {
            model: &Overreporting,
            layout: BoardLayout::new(2).unwrap(),
            snapshot: snapshot(SelectionState::NoSelection, true),
            hints: false,
        };
        let frame = render(&vm, rect(), &BoardPalette::default());
        assert_eq!(cell_shape_count(&frame), 7);
    }
}
