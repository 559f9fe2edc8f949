use crate::domain::{Decision, LabelStyle};

/// Maps a scalar signal to a discrete decision
///
/// Implementations must be pure: the same signal always yields the same
/// decision, and every real input (including NaN) yields one.
pub trait DecisionPolicy {
    fn classify(&self, signal: f64) -> Decision;

    /// Label casing used when this policy's decisions are reported
    fn label_style(&self) -> LabelStyle {
        LabelStyle::Title
    }
}
