//! Hexboard desktop application.
//!
//! Each frame gathers keyboard and pointer input into an action queue, draws
//! the board and controls from view models, then applies the queued actions.
//! Listener callbacks from the selection controller land in a second queue
//! that the handler drains in the same frame.

use std::{cell::RefCell, rc::Rc};

use eframe::{
    App, Frame,
    egui::{CentralPanel, Context},
};
use hexboard_core::{BoardLayout, LayoutError, SelectionController};

use crate::{
    action::ActionRequestQueue,
    action_handler,
    config::AppConfig,
    listeners::{DiagnosticListener, QueueListener},
    state::AppState,
    ui, view_model_builder,
};

#[derive(Debug)]
pub struct HexboardApp {
    app_state: AppState,
    controller: SelectionController,
    notifications: Rc<RefCell<ActionRequestQueue>>,
}

impl HexboardApp {
    /// Builds the app from start-up options.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError`] if the configured side length is zero.
    pub fn new(config: &AppConfig) -> Result<Self, LayoutError> {
        let layout = BoardLayout::new(config.side_len)?;
        let notifications = Rc::new(RefCell::new(ActionRequestQueue::default()));

        let mut controller = SelectionController::new(layout);
        controller.add_listener(QueueListener::new(Rc::clone(&notifications)));
        controller.add_listener(DiagnosticListener);

        log::info!(
            "board side {} ({} cells), logical canvas {}",
            layout.side_len(),
            layout.valid_cells().count(),
            layout.viewport().logical_size()
        );

        Ok(Self {
            app_state: AppState::new(config),
            controller,
            notifications,
        })
    }

    fn handle_all(&mut self, action_queue: &mut ActionRequestQueue) {
        action_handler::handle_all(
            &mut self.app_state,
            &mut self.controller,
            action_queue,
            &self.notifications,
        );
    }
}

impl App for HexboardApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        let mut action_queue = ActionRequestQueue::default();

        ctx.input(|i| ui::input::handle_input(i, &mut action_queue));
        self.handle_all(&mut action_queue);

        let game_screen_vm =
            view_model_builder::build_game_screen_vm(&self.app_state, &self.controller);
        CentralPanel::default().show(ctx, |ui| {
            ui::game_screen::show(ui, &game_screen_vm, &mut action_queue);
        });

        self.handle_all(&mut action_queue);

        if self.controller.take_repaint_request() {
            ctx.request_repaint();
        }
    }
}
