//! GuideSurface port - Presentation handle of the guide wizard.

/// Whatever shows the wizard to the user (a sheet, a modal, a terminal).
///
/// The surface is handed to a guide session by reference; the session opens
/// it once the wizard exists and closes it on cancel or finalize.
pub trait GuideSurface: Send + Sync {
    fn open(&self);

    fn close(&self);

    /// Returns true while the surface is shown.
    fn is_open(&self) -> bool;
}
