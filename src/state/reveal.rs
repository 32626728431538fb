#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

/// Intersection ratio at which a block is considered in view.
pub const REVEAL_THRESHOLD: f64 = 0.15;

/// Which edge a block slides in from before its reveal transition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealDirection {
    #[default]
    Up,
    Down,
    Left,
    Right,
}

impl RevealDirection {
    /// CSS class applied while the block is still hidden; the stylesheet
    /// pairs each with an opacity/translation transition.
    pub fn hidden_class(self) -> &'static str {
        match self {
            Self::Up => "reveal--from-up",
            Self::Down => "reveal--from-down",
            Self::Left => "reveal--from-left",
            Self::Right => "reveal--from-right",
        }
    }
}

/// One-shot visibility flag for a revealable block.
///
/// `visible` transitions false→true at most once per mounted lifetime and
/// never resets, no matter how many intersection events arrive afterwards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealState {
    pub visible: bool,
}

impl RevealState {
    /// Mark the block visible. Returns `true` only on the first call; every
    /// later call is a no-op.
    pub fn reveal(&mut self) -> bool {
        if self.visible {
            return false;
        }
        self.visible = true;
        true
    }
}
