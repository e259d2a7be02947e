//! Confirmation gating for destructive order transitions.

/// Asks the user to confirm an action before any network call is made.
///
/// The console provides an interactive implementation; non-interactive
/// contexts (scripts, tests) use [`AutoConfirm`].
pub trait ConfirmationGate: Send + Sync {
    fn confirm(&self, prompt: &str) -> bool;
}

/// Gate that waves everything through.
#[derive(Debug, Default, Copy, Clone)]
pub struct AutoConfirm;

impl ConfirmationGate for AutoConfirm {
    fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}
