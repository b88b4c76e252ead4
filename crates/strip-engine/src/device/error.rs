/// What to do after the surface refused to hand out a drawable.
///
/// Every non-fatal action drops the current frame; none of them retry.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// Surface must be reconfigured; drawing resumes on the next tick.
    Reconfigure,
    /// Transient (timeout, busy); drop this frame.
    SkipFrame,
    /// Unrecoverable (commonly OOM); the runtime should exit.
    Fatal,
}

impl SurfaceErrorAction {
    #[inline]
    pub fn is_fatal(self) -> bool {
        self == SurfaceErrorAction::Fatal
    }
}
