use hexboard_core::{SelectionController, Tile};

use crate::{
    state::AppState,
    ui::{board::BoardViewModel, controls::ControlsViewModel, game_screen::GameScreenViewModel},
};

#[must_use]
pub(crate) fn build_board_vm<'a>(
    app_state: &'a AppState,
    controller: &SelectionController,
) -> BoardViewModel<'a> {
    BoardViewModel {
        model: &app_state.board,
        layout: *controller.layout(),
        snapshot: controller.snapshot(),
        hints: app_state.settings.hints,
    }
}

#[must_use]
pub(crate) fn build_controls_vm(
    app_state: &AppState,
    controller: &SelectionController,
) -> ControlsViewModel {
    ControlsViewModel {
        turn: app_state.turn,
        piece_counts: Tile::PLAYERS.map(|tile| app_state.board.count(tile)),
        last_event: app_state.last_event,
        hints: app_state.settings.hints,
        actions_enabled: controller.actions_enabled(),
    }
}

#[must_use]
pub(crate) fn build_game_screen_vm<'a>(
    app_state: &'a AppState,
    controller: &SelectionController,
) -> GameScreenViewModel<'a> {
    GameScreenViewModel {
        board_vm: build_board_vm(app_state, controller),
        controls_vm: build_controls_vm(app_state, controller),
    }
}
