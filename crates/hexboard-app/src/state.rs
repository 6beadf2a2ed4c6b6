use hexboard_core::{AxialCoords, BoardModel as _, HexBoard, OffBoardError, Tile};

use crate::config::AppConfig;

#[derive(Debug, Default, Clone)]
pub(crate) struct Settings {
    pub(crate) hints: bool,
}

/// Why a requested move was not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub(crate) enum MoveError {
    #[display("cell {_0} is already occupied")]
    Occupied(#[error(not(source))] AxialCoords),
    #[display("{_0}")]
    OffBoard(OffBoardError),
}

/// Most recent game event, shown in the controls bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub(crate) enum GameEvent {
    #[display("{} played {coords}", player_name(*player))]
    Moved { player: Tile, coords: AxialCoords },
    #[display("{} passed", player_name(*player))]
    Passed { player: Tile },
    #[display("Illegal move: {_0}")]
    Rejected(MoveError),
}

#[must_use]
pub(crate) fn player_name(tile: Tile) -> &'static str {
    match tile {
        Tile::PlayerA => "Black",
        Tile::PlayerB => "White",
        Tile::Empty => "Nobody",
    }
}

#[derive(Debug)]
pub(crate) struct AppState {
    pub(crate) board: HexBoard,
    pub(crate) turn: Tile,
    pub(crate) settings: Settings,
    pub(crate) last_event: Option<GameEvent>,
    start_empty: bool,
}

impl AppState {
    #[must_use]
    pub(crate) fn new(config: &AppConfig) -> Self {
        Self {
            board: Self::fresh_board(config.side_len, config.empty),
            turn: Tile::PlayerA,
            settings: Settings {
                hints: config.hints,
            },
            last_event: None,
            start_empty: config.empty,
        }
    }

    fn fresh_board(side_len: u16, empty: bool) -> HexBoard {
        if empty {
            HexBoard::new(side_len)
        } else {
            HexBoard::new_game(side_len)
        }
    }

    pub(crate) fn new_game(&mut self) {
        let side_len = self.board.side_len();
        self.board = Self::fresh_board(side_len, self.start_empty);
        self.turn = Tile::PlayerA;
        self.last_event = None;
    }

    /// Places the current player's piece at `coords` and hands the turn over.
    pub(crate) fn play(&mut self, coords: AxialCoords) -> Result<(), MoveError> {
        if self.board.tile(coords).is_some_and(Tile::is_occupied) {
            return Err(MoveError::Occupied(coords));
        }
        self.board
            .set_tile(coords, self.turn)
            .map_err(MoveError::OffBoard)?;
        self.last_event = Some(GameEvent::Moved {
            player: self.turn,
            coords,
        });
        self.turn = self.turn.opponent();
        Ok(())
    }

    pub(crate) fn pass(&mut self) {
        self.last_event = Some(GameEvent::Passed { player: self.turn });
        self.turn = self.turn.opponent();
    }
}

#[cfg(test)]
mod tests {
    use hexboard_core::{AxialCoords, Tile};

    use super::{AppState, GameEvent, MoveError};
    use crate::config::AppConfig;

    fn empty_state() -> AppState {
        AppState::new(&AppConfig {
            side_len: 3,
            empty: true,
            ..AppConfig::default()
        })
    }

    #[test]
    fn play_places_piece_and_switches_turn() {
        let mut state = empty_state();
        state.play(AxialCoords::ORIGIN).unwrap();
        assert_eq!(state.board.tile(AxialCoords::ORIGIN), Some(Tile::PlayerA));
        assert_eq!(state.turn, Tile::PlayerB);
        assert_eq!(
            state.last_event,
            Some(GameEvent::Moved {
                player: Tile::PlayerA,
                coords: AxialCoords::ORIGIN
            })
        );
    }

    #[test]
    fn play_on_occupied_cell_is_rejected() {
        let mut state = empty_state();
        state.play(AxialCoords::ORIGIN).unwrap();
        assert_eq!(
            state.play(AxialCoords::ORIGIN),
            Err(MoveError::Occupied(AxialCoords::ORIGIN))
        );
        assert_eq!(state.board.tile(AxialCoords::ORIGIN), Some(Tile::PlayerA));
        assert_eq!(state.turn, Tile::PlayerB);
    }

    #[test]
    fn play_off_board_is_rejected() {
        let mut state = empty_state();
        let far = AxialCoords::ORIGIN.neighbours()[0].neighbours()[0].neighbours()[0];
        assert!(matches!(state.play(far), Err(MoveError::OffBoard(_))));
        assert_eq!(state.turn, Tile::PlayerA);
    }

    #[test]
    fn pass_switches_turn() {
        let mut state = empty_state();
        state.pass();
        assert_eq!(state.turn, Tile::PlayerB);
        assert_eq!(
            state.last_event.map(|e| e.to_string()),
            Some("Black passed".to_owned())
        );
    }

    #[test]
    fn new_game_restores_opening() {
        let mut state = AppState::new(&AppConfig {
            side_len: 4,
            ..AppConfig::default()
        });
        state.play(AxialCoords::ORIGIN).unwrap();
        state.new_game();
        assert_eq!(state.board.tile(AxialCoords::ORIGIN), Some(Tile::Empty));
        assert_eq!(state.board.count(Tile::PlayerA), 3);
        assert_eq!(state.turn, Tile::PlayerA);
        assert_eq!(state.last_event, None);
    }
}
