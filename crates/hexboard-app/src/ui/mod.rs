pub mod board;
pub mod board_theme;
pub mod controls;
pub mod game_screen;
pub mod input;
