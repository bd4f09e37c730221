/// Whether a step covered the full requested amount
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepStatus {
    Full,
    /// The arena boundary shortened the step
    Truncated,
}

/// Outcome of one translation or rotation step
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepReport {
    /// Speed cap at the time of the call
    pub requested: f32,
    /// Distance or angle actually applied, never negative
    pub applied: f32,
    pub status: StepStatus,
}

impl StepReport {
    /// Build a report from the cap and the clamped safe step
    pub fn new(requested: f32, safe: f32) -> Self {
        let applied = safe.min(requested).max(0.0);
        let status = if applied < requested {
            StepStatus::Truncated
        } else {
            StepStatus::Full
        };
        Self { requested, applied, status }
    }

    pub fn is_truncated(&self) -> bool {
        self.status == StepStatus::Truncated
    }
}

/// Outcome of a combined translate-then-rotate command
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GoReport {
    pub translation: StepReport,
    pub rotation: StepReport,
}
