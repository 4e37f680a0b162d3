pub mod app;
pub mod brush;
pub mod cell;
pub mod clock;
pub mod config;
pub mod controller;
pub mod editor;
pub mod events;
pub mod evolution;
pub mod grid;
pub mod io;
pub mod render;
pub mod rule_set;
pub mod terminal;
pub mod viewport;
