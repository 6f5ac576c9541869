use crate::problem::Problem;
use crate::render::TileState;

/// Where the user is in the drill list. Rebuilt from request parameters by
/// the host, never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuizSession {
    pub index: usize,
    pub revealed: bool,
    pub picked: Option<usize>,
}

impl QuizSession {
    pub fn new(index: usize, total: usize) -> Self {
        Self {
            index: wrap(index, total),
            ..Self::default()
        }
    }

    pub fn next(self, total: usize) -> Self {
        Self::new(self.index + 1, total)
    }

    pub fn prev(self, total: usize) -> Self {
        let index = if total == 0 {
            0
        } else {
            (self.index % total + total - 1) % total
        };
        Self::new(index, total)
    }

    pub fn reveal(self) -> Self {
        Self {
            revealed: true,
            ..self
        }
    }

    /// Picking is closed once the answer is shown.
    pub fn pick(self, slot: usize) -> Self {
        if self.revealed {
            self
        } else {
            Self {
                picked: Some(slot),
                ..self
            }
        }
    }

    pub fn progress_label(&self, total: usize) -> String {
        format!("{} / {}", self.index + 1, total)
    }

    pub fn hand_interactive(&self) -> bool {
        !self.revealed
    }

    pub fn tile_state(&self, problem: &Problem, slot: usize) -> TileState {
        let picked = self.picked == Some(slot);
        if !self.revealed {
            return if picked {
                TileState::Selected
            } else {
                TileState::Normal
            };
        }
        if problem.is_expected(slot) {
            TileState::Hint
        } else if picked {
            TileState::Danger
        } else {
            TileState::Normal
        }
    }

    /// Whether the user's pick matches the expected discard. `None` until
    /// the answer is revealed or when nothing was picked.
    pub fn verdict(&self, problem: &Problem) -> Option<bool> {
        if !self.revealed {
            return None;
        }
        self.picked.map(|slot| problem.is_expected(slot))
    }
}

fn wrap(index: usize, total: usize) -> usize {
    if total == 0 {
        0
    } else {
        index % total
    }
}
