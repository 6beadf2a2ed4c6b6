//! Geometry and interaction core for a hexagonal board game.
//!
//! This crate has no GUI dependency. It provides everything a host needs to
//! draw a hex board into a resizable canvas and to turn pointer and keyboard
//! input into game actions.
//!
//! # Overview
//!
//! 1. **Coordinates** - [`coords`]: storage ↔ axial conversion, hex centres in
//!    logical space, and hit-testing by nearest centre.
//! 2. **Viewport** - [`viewport`]: logical ↔ physical transforms rebuilt from
//!    the current canvas size on every use.
//! 3. **Layout** - [`layout`]: the fixed geometry of one board, shared by
//!    rendering and hit-testing.
//! 4. **Model** - [`model`]: the read-only game state interface, plus the
//!    in-memory [`HexBoard`] in [`board`].
//! 5. **Selection** - [`selection`]: the highlight state machine and listener
//!    dispatch.
//!
//! # Examples
//!
//! ```
//! use hexboard_core::{
//!     AxialCoords, BoardLayout, BoardListener, KeyCommand, SelectionController, Size,
//! };
//!
//! struct Print;
//!
//! impl BoardListener for Print {
//!     fn on_move_requested(&mut self, coords: AxialCoords) {
//!         println!("move at {coords}");
//!     }
//!
//!     fn on_pass_requested(&mut self) {
//!         println!("pass");
//!     }
//! }
//!
//! let mut controller = SelectionController::new(BoardLayout::new(3).unwrap());
//! controller.add_listener(Print);
//!
//! // Clicking the middle of the canvas selects the centre cell.
//! let canvas = Size::new(640.0, 480.0);
//! controller.handle_click(canvas.center(), canvas);
//! assert!(controller.handle_key(KeyCommand::CommitMove).is_sent());
//! ```

pub mod board;
pub mod coords;
pub mod geometry;
pub mod layout;
pub mod model;
pub mod selection;
pub mod tile;
pub mod viewport;

pub use self::{
    board::HexBoard,
    coords::{AxialCoords, StorageCoords},
    geometry::{Affine2, Point, Size},
    layout::{BoardLayout, LayoutError},
    model::{BoardModel, OffBoardError},
    selection::{
        BoardListener, ClickOutcome, Dispatch, KeyCommand, SelectionController,
        SelectionSnapshot, SelectionState,
    },
    tile::Tile,
    viewport::ViewportTransform,
};
