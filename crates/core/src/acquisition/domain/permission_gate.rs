#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PermissionStatus {
    Granted,
    Denied,
    #[default]
    NotDetermined,
}

/// Camera permission as the OS would track it.
pub trait PermissionGate: Send {
    fn status(&self) -> PermissionStatus;

    /// Ask the user. Implementations remember the answer.
    fn request(&mut self) -> PermissionStatus;
}
