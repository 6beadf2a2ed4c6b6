use std::mem;

use hexboard_core::{AxialCoords, KeyCommand, Point, Size};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Pointer click on the board canvas, relative to its top-left corner.
    Click { point: Point, canvas: Size },
    Key(KeyCommand),
    ClearSelection,
    SetActionsEnabled(bool),
    ToggleHints,
    NewGame,
    PlayMove(AxialCoords),
    Pass,
}

#[derive(Debug, Default)]
pub struct ActionRequestQueue {
    actions: Vec<Action>,
}

impl ActionRequestQueue {
    pub fn request(&mut self, action: Action) {
        self.actions.push(action);
    }

    pub fn take_all(&mut self) -> Vec<Action> {
        mem::take(&mut self.actions)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}
