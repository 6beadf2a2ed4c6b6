//! Selection state machine driven by pointer clicks and key commands.
//!
//! [`SelectionController`] is the single owner of the highlighted cell and of
//! the "player actions enabled" flag. The renderer reads an immutable
//! [`SelectionSnapshot`] each frame; listeners are notified synchronously, in
//! registration order.
//!
//! Invalid interactions (a click outside every cell, a key command while
//! actions are disabled or with nothing selected) are absorbed: they change
//! nothing, notify nobody, and are only logged at `debug` level.

use std::{fmt, mem};

use crate::{
    coords::AxialCoords,
    geometry::{Point, Size},
    layout::BoardLayout,
    tile::Tile,
};

/// Receives the actions and diagnostics produced by the board view.
pub trait BoardListener {
    /// The player asked to place a piece at `coords`.
    fn on_move_requested(&mut self, coords: AxialCoords);

    /// The player asked to pass.
    fn on_pass_requested(&mut self);

    /// A key command was dispatched; `key` is the bound character.
    fn on_diagnostic_key(&mut self, key: char) {
        let _ = key;
    }

    /// A click resolved to `coords`.
    fn on_diagnostic_click(&mut self, coords: AxialCoords) {
        let _ = coords;
    }
}

/// Key bindings understood by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum KeyCommand {
    /// Commit a move on the highlighted cell.
    CommitMove,
    /// Pass the turn.
    Pass,
}

impl KeyCommand {
    /// Character the command is bound to.
    #[must_use]
    pub const fn key_char(self) -> char {
        match self {
            Self::CommitMove => 'm',
            Self::Pass => 'p',
        }
    }
}

/// Persistent selection state.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum SelectionState {
    /// Nothing highlighted.
    #[default]
    NoSelection,
    /// One cell highlighted.
    Selected(AxialCoords),
}

impl SelectionState {
    /// The highlighted cell, if any.
    #[must_use]
    pub const fn coords(self) -> Option<AxialCoords> {
        match self {
            Self::NoSelection => None,
            Self::Selected(coords) => Some(coords),
        }
    }
}

/// What the renderer needs to know about the selection for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionSnapshot {
    /// Current selection.
    pub state: SelectionState,
    /// Whether player actions are enabled.
    pub actions_enabled: bool,
    /// Set only while an out-of-bounds click is being processed; forces the
    /// highlighted cell back to its default colour.
    pub clicked_out_of_bounds: bool,
}

impl SelectionSnapshot {
    /// Returns `true` if the cell at `coords` holding `tile` is drawn highlighted.
    ///
    /// Only empty cells are highlighted, and only while actions are enabled.
    /// The tile is checked against the model each frame, so a cell that was
    /// filled after being selected stops showing the highlight.
    #[must_use]
    pub fn highlights(&self, coords: AxialCoords, tile: Tile) -> bool {
        self.actions_enabled
            && !self.clicked_out_of_bounds
            && tile.is_empty()
            && self.state == SelectionState::Selected(coords)
    }
}

/// Result of a pointer click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum ClickOutcome {
    /// The click resolved to a cell, which is now selected.
    Selected(AxialCoords),
    /// The click hit no cell; the selection is unchanged.
    Missed,
}

/// Result of a key command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Dispatch {
    /// Listeners were notified.
    Sent,
    /// The command was absorbed without notifying anyone.
    Suppressed,
}

/// Owns the highlight and dispatches player actions to listeners.
pub struct SelectionController {
    layout: BoardLayout,
    state: SelectionState,
    actions_enabled: bool,
    clicked_out_of_bounds: bool,
    repaint_requested: bool,
    listeners: Vec<Box<dyn BoardListener>>,
}

impl fmt::Debug for SelectionController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionController")
            .field("layout", &self.layout)
            .field("state", &self.state)
            .field("actions_enabled", &self.actions_enabled)
            .field("repaint_requested", &self.repaint_requested)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl SelectionController {
    /// Creates a controller with no selection and actions enabled.
    #[must_use]
    pub fn new(layout: BoardLayout) -> Self {
        Self {
            layout,
            state: SelectionState::NoSelection,
            actions_enabled: true,
            clicked_out_of_bounds: false,
            repaint_requested: false,
            listeners: Vec::new(),
        }
    }

    /// Board geometry used for hit-testing.
    #[must_use]
    pub fn layout(&self) -> &BoardLayout {
        &self.layout
    }

    /// Appends a listener. Listeners are notified in registration order.
    pub fn add_listener(&mut self, listener: impl BoardListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Current selection state.
    #[must_use]
    pub fn state(&self) -> SelectionState {
        self.state
    }

    /// Whether player actions are enabled.
    #[must_use]
    pub fn actions_enabled(&self) -> bool {
        self.actions_enabled
    }

    /// Immutable view for the renderer.
    #[must_use]
    pub fn snapshot(&self) -> SelectionSnapshot {
        SelectionSnapshot {
            state: self.state,
            actions_enabled: self.actions_enabled,
            clicked_out_of_bounds: self.clicked_out_of_bounds,
        }
    }

    /// Enables or disables player actions. The selection is kept either way.
    pub fn set_actions_enabled(&mut self, enabled: bool) {
        if self.actions_enabled != enabled {
            log::debug!("player actions enabled: {enabled}");
        }
        self.actions_enabled = enabled;
        self.request_repaint();
    }

    /// Drops the selection (external reset).
    pub fn clear_selection(&mut self) {
        self.state = SelectionState::NoSelection;
        self.request_repaint();
    }

    /// Handles a click at `physical` on a canvas of size `physical_size`.
    ///
    /// A hit selects the cell, even if it is already selected, and notifies
    /// listeners of the click. A miss leaves the selection untouched.
    pub fn handle_click(&mut self, physical: Point, physical_size: Size) -> ClickOutcome {
        let hit = self
            .layout
            .viewport()
            .to_logical(physical, physical_size)
            .and_then(|logical| self.layout.hit_test(logical));

        let Some(coords) = hit else {
            log::debug!("click at {physical} on {physical_size} canvas is out of bounds");
            self.clicked_out_of_bounds = true;
            self.request_repaint();
            self.clicked_out_of_bounds = false;
            return ClickOutcome::Missed;
        };

        self.state = SelectionState::Selected(coords);
        for listener in &mut self.listeners {
            listener.on_diagnostic_click(coords);
        }
        self.request_repaint();
        ClickOutcome::Selected(coords)
    }

    /// Handles a bound key.
    pub fn handle_key(&mut self, command: KeyCommand) -> Dispatch {
        match command {
            KeyCommand::CommitMove => self.commit_move(),
            KeyCommand::Pass => self.pass(),
        }
    }

    /// Requests a move on the selected cell.
    ///
    /// Suppressed when actions are disabled or nothing is selected. The tile
    /// under the selection is not re-checked here; the model may have changed
    /// since the click and is the authority on legality.
    pub fn commit_move(&mut self) -> Dispatch {
        let key = KeyCommand::CommitMove.key_char();
        if !self.actions_enabled {
            log::debug!("'{key}' ignored: player actions disabled");
            return Dispatch::Suppressed;
        }
        let Some(coords) = self.state.coords() else {
            log::debug!("'{key}' ignored: no cell selected");
            return Dispatch::Suppressed;
        };
        for listener in &mut self.listeners {
            listener.on_move_requested(coords);
            listener.on_diagnostic_key(key);
        }
        Dispatch::Sent
    }

    /// Requests a pass. Suppressed when actions are disabled.
    pub fn pass(&mut self) -> Dispatch {
        let key = KeyCommand::Pass.key_char();
        if !self.actions_enabled {
            log::debug!("'{key}' ignored: player actions disabled");
            return Dispatch::Suppressed;
        }
        for listener in &mut self.listeners {
            listener.on_pass_requested();
            listener.on_diagnostic_key(key);
        }
        Dispatch::Sent
    }

    fn request_repaint(&mut self) {
        self.repaint_requested = true;
    }

    /// Returns and clears the pending repaint request.
    ///
    /// Requests raised between two calls are coalesced into one.
    pub fn take_repaint_request(&mut self) -> bool {
        mem::take(&mut self.repaint_requested)
    }
}
