use crate::cell::CellState;

/// State of a press, drag, release stroke over the canvas.
///
/// A stroke paints a single state: pressing on a dead cell paints live cells for the rest of the
/// stroke, pressing on a live one erases them.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Brush {
    /// `None` between strokes
    paint: Option<CellState>,

    /// Whether the simulation was running when the stroke began, and should be restarted when
    /// it ends
    resume: bool,
}

impl Brush {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a stroke over a cell currently in state `under`. Returns the state to paint.
    pub fn begin(&mut self, under: CellState, resume: bool) -> CellState {
        let paint = under.toggled();

        self.paint = Some(paint);
        self.resume = resume;

        paint
    }

    /// The state being painted, if a stroke is in progress.
    pub fn paint(&self) -> Option<CellState> {
        self.paint
    }

    pub fn is_active(&self) -> bool {
        self.paint.is_some()
    }

    /// End the stroke. Returns whether the simulation should be restarted. A second `end`
    /// without a new `begin` never asks for a restart.
    pub fn end(&mut self) -> bool {
        self.paint = None;

        std::mem::take(&mut self.resume)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paints_the_opposite_state() {
        let mut brush = Brush::new();

        assert_eq!(brush.begin(CellState::Dead, false), CellState::Alive);
        assert_eq!(brush.paint(), Some(CellState::Alive));

        assert_eq!(brush.begin(CellState::Alive, false), CellState::Dead);
        assert_eq!(brush.paint(), Some(CellState::Dead));
    }

    #[test]
    fn end_consumes_resume() {
        let mut brush = Brush::new();

        brush.begin(CellState::Dead, true);
        assert!(brush.is_active());

        assert!(brush.end());
        assert!(!brush.is_active());
        assert!(!brush.end());
    }
}
