/// The frontend's mirror of the session plus the login page's state machine.
///
/// The token itself never leaves the backend; the frontend only needs to
/// know whether one exists to drive the route guard, and whether a login
/// attempt is in flight or has failed to drive the login form.
#[derive(Debug, Clone, Default)]
pub struct SessionEntity {
    /// Whether the session store currently holds a token. Also gates every
    /// protected route.
    pub authenticated: bool,
    /// A login request is in flight; the login control stays disabled.
    pub login_pending: bool,
    /// The last login attempt failed (rejected credentials or a failed
    /// request; the two are not distinguished).
    pub login_failed: bool,
}
