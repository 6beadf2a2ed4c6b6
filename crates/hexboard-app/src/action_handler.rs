use std::cell::RefCell;

use hexboard_core::SelectionController;

use crate::{
    action::{Action, ActionRequestQueue},
    state::{AppState, GameEvent},
};

/// Upper bound on handler passes per frame.
///
/// Each pass applies the actions queued by listeners during the previous
/// pass; a well-behaved listener chain settles after two.
const MAX_DRAIN_PASSES: usize = 8;

/// Applies `action_queue`, then whatever the listeners queue in `notifications`
/// while those actions run.
pub(crate) fn handle_all(
    app_state: &mut AppState,
    controller: &mut SelectionController,
    action_queue: &mut ActionRequestQueue,
    notifications: &RefCell<ActionRequestQueue>,
) {
    let mut pending = action_queue.take_all();
    for _ in 0..MAX_DRAIN_PASSES {
        if pending.is_empty() {
            return;
        }
        for action in pending {
            handle(app_state, controller, action);
        }
        pending = notifications.borrow_mut().take_all();
    }
    if !pending.is_empty() {
        log::warn!(
            "dropping {} actions still pending after {MAX_DRAIN_PASSES} passes",
            pending.len()
        );
    }
}

pub(crate) fn handle(app_state: &mut AppState, controller: &mut SelectionController, action: Action) {
    match action {
        Action::Click { point, canvas } => {
            controller.handle_click(point, canvas);
        }
        Action::Key(command) => {
            controller.handle_key(command);
        }
        Action::ClearSelection => controller.clear_selection(),
        Action::SetActionsEnabled(enabled) => controller.set_actions_enabled(enabled),
        Action::ToggleHints => {
            let hints = &mut app_state.settings.hints;
            *hints = !*hints;
            log::info!("Hints: {}", if *hints { "on" } else { "off" });
        }
        Action::NewGame => {
            app_state.new_game();
            controller.clear_selection();
            log::info!("new game started");
        }
        Action::PlayMove(coords) => match app_state.play(coords) {
            Ok(()) => log::info!("move played at {coords}"),
            Err(err) => {
                log::warn!("illegal move: {err}");
                app_state.last_event = Some(GameEvent::Rejected(err));
            }
        },
        Action::Pass => {
            app_state.pass();
            log::info!("turn passed");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use hexboard_core::{
        AxialCoords, BoardLayout, BoardListener, KeyCommand, SelectionController,
        SelectionState, Size, Tile,
    };

    use super::handle_all;
    use crate::{
        action::{Action, ActionRequestQueue},
        config::AppConfig,
        listeners::QueueListener,
        state::{AppState, GameEvent, MoveError},
    };

    const CANVAS: Size = Size::new(600.0, 600.0);

    struct Fixture {
        app_state: AppState,
        controller: SelectionController,
        notifications: Rc<RefCell<ActionRequestQueue>>,
    }

    impl Fixture {
        fn new() -> Self {
            let config = AppConfig {
                side_len: 3,
                empty: true,
                ..AppConfig::default()
            };
            let notifications = Rc::new(RefCell::new(ActionRequestQueue::default()));
            let mut controller = SelectionController::new(BoardLayout::new(3).unwrap());
            controller.add_listener(QueueListener::new(Rc::clone(&notifications)));
            Self {
                app_state: AppState::new(&config),
                controller,
                notifications,
            }
        }

        fn run(&mut self, actions: impl IntoIterator<Item = Action>) {
            let mut queue = ActionRequestQueue::default();
            for action in actions {
                queue.request(action);
            }
            handle_all(
                &mut self.app_state,
                &mut self.controller,
                &mut queue,
                &self.notifications,
            );
        }
    }

    /// Answers every pass request with another pass key press.
    struct EchoPass {
        queue: Rc<RefCell<ActionRequestQueue>>,
    }

    impl BoardListener for EchoPass {
        fn on_move_requested(&mut self, _coords: AxialCoords) {}

        fn on_pass_requested(&mut self) {
            self.queue
                .borrow_mut()
                .request(Action::Key(KeyCommand::Pass));
        }
    }

    fn click_centre() -> Action {
        Action::Click {
            point: CANVAS.center(),
            canvas: CANVAS,
        }
    }

    #[test]
    fn click_then_commit_places_piece_in_same_pass() {
        let mut fx = Fixture::new();
        fx.run([click_centre(), Action::Key(KeyCommand::CommitMove)]);

        assert_eq!(
            fx.app_state.board.tile(AxialCoords::ORIGIN),
            Some(Tile::PlayerA)
        );
        assert_eq!(fx.app_state.turn, Tile::PlayerB);
        assert!(fx.notifications.borrow().is_empty());
    }

    #[test]
    fn commit_on_occupied_cell_reports_illegal_move() {
        let mut fx = Fixture::new();
        fx.run([click_centre(), Action::Key(KeyCommand::CommitMove)]);
        fx.run([Action::Key(KeyCommand::CommitMove)]);

        assert_eq!(
            fx.app_state.last_event,
            Some(GameEvent::Rejected(MoveError::Occupied(AxialCoords::ORIGIN)))
        );
        assert_eq!(fx.app_state.turn, Tile::PlayerB);
    }

    #[test]
    fn disabled_actions_block_moves_and_passes() {
        let mut fx = Fixture::new();
        fx.run([
            click_centre(),
            Action::SetActionsEnabled(false),
            Action::Key(KeyCommand::CommitMove),
            Action::Key(KeyCommand::Pass),
        ]);

        assert_eq!(fx.app_state.board.tile(AxialCoords::ORIGIN), Some(Tile::Empty));
        assert_eq!(fx.app_state.turn, Tile::PlayerA);
        assert_eq!(
            fx.controller.state(),
            SelectionState::Selected(AxialCoords::ORIGIN)
        );
    }

    #[test]
    fn pass_key_switches_turn() {
        let mut fx = Fixture::new();
        fx.run([Action::Key(KeyCommand::Pass)]);
        assert_eq!(fx.app_state.turn, Tile::PlayerB);
    }

    #[test]
    fn toggle_hints_flips_setting() {
        let mut fx = Fixture::new();
        assert!(!fx.app_state.settings.hints);
        fx.run([Action::ToggleHints]);
        assert!(fx.app_state.settings.hints);
        fx.run([Action::ToggleHints]);
        assert!(!fx.app_state.settings.hints);
    }

    #[test]
    fn new_game_clears_selection() {
        let mut fx = Fixture::new();
        fx.run([click_centre(), Action::NewGame]);
        assert!(fx.controller.state().is_no_selection());
        assert_eq!(fx.app_state.turn, Tile::PlayerA);
    }

    #[test]
    fn escape_reset_prevents_commit() {
        let mut fx = Fixture::new();
        fx.run([
            click_centre(),
            Action::ClearSelection,
            Action::Key(KeyCommand::CommitMove),
        ]);
        assert_eq!(fx.app_state.board.tile(AxialCoords::ORIGIN), Some(Tile::Empty));
    }

    #[test]
    fn endless_listener_chain_stops_after_bounded_passes() {
        let mut fx = Fixture::new();
        fx.controller.add_listener(EchoPass {
            queue: Rc::clone(&fx.notifications),
        });

        fx.run([Action::Key(KeyCommand::Pass)]);

        assert!(fx.notifications.borrow().is_empty());
        // One pass per drain round after the first: seven turn flips.
        assert_eq!(fx.app_state.turn, Tile::PlayerB);

        fx.run([Action::ToggleHints]);
        assert!(fx.app_state.settings.hints);
    }
}
