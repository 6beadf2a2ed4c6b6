//! Board listeners registered by the application.
//!
//! Listeners never touch the game state: [`QueueListener`] turns move and
//! pass requests into actions that the handler applies once the controller
//! call has returned.

use std::{cell::RefCell, rc::Rc};

use hexboard_core::{AxialCoords, BoardListener};

use crate::action::{Action, ActionRequestQueue};

#[derive(Debug, Clone)]
pub struct QueueListener {
    queue: Rc<RefCell<ActionRequestQueue>>,
}

impl QueueListener {
    #[must_use]
    pub fn new(queue: Rc<RefCell<ActionRequestQueue>>) -> Self {
        Self { queue }
    }
}

impl BoardListener for QueueListener {
    fn on_move_requested(&mut self, coords: AxialCoords) {
        self.queue.borrow_mut().request(Action::PlayMove(coords));
    }

    fn on_pass_requested(&mut self) {
        self.queue.borrow_mut().request(Action::Pass);
    }
}

/// Logs key and click diagnostics.
#[derive(Debug, Default, Clone, Copy)]
pub struct DiagnosticListener;

impl BoardListener for DiagnosticListener {
    fn on_move_requested(&mut self, coords: AxialCoords) {
        log::debug!("move requested at {coords}");
    }

    fn on_pass_requested(&mut self) {
        log::debug!("pass requested");
    }

    fn on_diagnostic_key(&mut self, key: char) {
        log::info!("key pressed: {key}");
    }

    fn on_diagnostic_click(&mut self, coords: AxialCoords) {
        log::info!("clicked hex q={} r={}", coords.q(), coords.r());
    }
}
