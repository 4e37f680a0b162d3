use crate::viewport::Point;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    Sim(SimEvent),
    Pointer(PointerEvent),
    App(AppEvent),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SimEvent {
    /// Replace the grid with a random one
    Initialize,

    /// Kill every cell
    Clear,

    /// Start if stopped, stop if running
    ToggleAuto,

    /// Advance by a single generation
    Step,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Press(Point),
    Drag(Point),
    Release,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AppEvent {
    ToggleGridlines,

    /// The terminal was resized to `cols x rows`
    Resize { cols: u16, rows: u16 },

    /// Exit the application
    Exit,
}
