#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TooltipPhase {
    #[default]
    Idle,
    Shown,
}

impl TooltipPhase {
    /// The phase to switch to, or `None` when nothing changes.
    pub fn next(self, hovered: bool, focused: bool) -> Option<TooltipPhase> {
        match (self, hovered || focused) {
            (TooltipPhase::Idle, true) => Some(TooltipPhase::Shown),
            (TooltipPhase::Shown, false) => Some(TooltipPhase::Idle),
            _ => None,
        }
    }
}
