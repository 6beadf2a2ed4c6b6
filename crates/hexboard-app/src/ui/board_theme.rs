use eframe::egui::Color32;

use hexboard_core::Tile;

/// Color palette for board rendering.
///
/// Kept separate from `egui::Visuals`: the board keeps the same colours in
/// light and dark mode.
#[derive(Debug, Clone)]
pub struct BoardPalette {
    pub background: Color32,
    pub cell: Color32,
    pub cell_highlight: Color32,
    pub piece_a: Color32,
    pub piece_b: Color32,
    pub hint_text: Color32,
}

impl Default for BoardPalette {
    fn default() -> Self {
        Self {
            background: Color32::DARK_GRAY,
            cell: Color32::LIGHT_GRAY,
            cell_highlight: Color32::from_rgb(0, 255, 255),
            piece_a: Color32::BLACK,
            piece_b: Color32::WHITE,
            hint_text: Color32::BLACK,
        }
    }
}

impl BoardPalette {
    /// Piece colour for an occupied tile; `None` for an empty one.
    #[must_use]
    pub fn piece(&self, tile: Tile) -> Option<Color32> {
        match tile {
            Tile::Empty => None,
            Tile::PlayerA => Some(self.piece_a),
            Tile::PlayerB => Some(self.piece_b),
        }
    }
}
