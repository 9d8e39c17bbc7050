//! Pointer stroke lifecycle.
use super::brush::VisitedCells;

/// Whether a stroke is in progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StrokeState {
    #[default]
    Idle,
    Drawing,
}

/// One press-drag-release gesture and the cells it already touched.
#[derive(Clone, Debug, Default)]
pub struct Stroke {
    state: StrokeState,
    visited: VisitedCells,
}

impl Stroke {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> StrokeState {
        self.state
    }

    pub fn is_drawing(&self) -> bool {
        self.state == StrokeState::Drawing
    }

    /// Enter `Drawing` with an empty visited set.
    pub fn begin(&mut self) {
        self.state = StrokeState::Drawing;
        self.visited.clear();
    }

    /// Visited set of the active stroke, or `None` while idle.
    pub fn visited_mut(&mut self) -> Option<&mut VisitedCells> {
        match self.state {
            StrokeState::Drawing => Some(&mut self.visited),
            StrokeState::Idle => None,
        }
    }

    /// Return to `Idle`, yielding the number of distinct cells painted.
    ///
    /// `None` when no stroke was active.
    pub fn finish(&mut self) -> Option<usize> {
        if self.state == StrokeState::Idle {
            return None;
        }
        self.state = StrokeState::Idle;
        let painted = self.visited.len();
        self.visited.clear();
        Some(painted)
    }
}

#[cfg(test)]
mod tests {
    use glam::IVec2;

    use super::*;

    #[test]
    fn idle_stroke_has_no_visited_set() {
        let mut stroke = Stroke::new();
        assert_eq!(stroke.state(), StrokeState::Idle);
        assert!(stroke.visited_mut().is_none());
        assert_eq!(stroke.finish(), None);
    }

    #[test]
    fn finish_reports_and_resets() {
        let mut stroke = Stroke::new();
        stroke.begin();
        assert!(stroke.is_drawing());
        let visited = stroke.visited_mut().unwrap();
        visited.insert(IVec2::new(1, 1));
        visited.insert(IVec2::new(1, 2));
        assert_eq!(stroke.finish(), Some(2));
        assert!(!stroke.is_drawing());
        assert_eq!(stroke.finish(), None);
        stroke.begin();
        assert!(stroke.visited_mut().unwrap().is_empty());
    }

    #[test]
    fn begin_discards_previous_visits() {
        let mut stroke = Stroke::new();
        stroke.begin();
        stroke.visited_mut().unwrap().insert(IVec2::ZERO);
        stroke.begin();
        assert!(!stroke.visited_mut().unwrap().contains(&IVec2::ZERO));
    }
}
