use crate::acquisition::domain::permission_gate::{PermissionGate, PermissionStatus};

/// [`PermissionGate`] that asks through a caller-supplied prompt and
/// remembers the answer for its own lifetime.
pub struct PromptPermissionGate<F> {
    status: PermissionStatus,
    prompt: F,
}

impl<F> PromptPermissionGate<F>
where
    F: FnMut() -> bool + Send,
{
    pub fn new(status: PermissionStatus, prompt: F) -> Self {
        Self { status, prompt }
    }
}

impl<F> PermissionGate for PromptPermissionGate<F>
where
    F: FnMut() -> bool + Send,
{
    fn status(&self) -> PermissionStatus {
        self.status
    }

    fn request(&mut self) -> PermissionStatus {
        if self.status == PermissionStatus::Granted {
            return self.status;
        }
        self.status = if (self.prompt)() {
            PermissionStatus::Granted
        } else {
            PermissionStatus::Denied
        };
        self.status
    }
}
