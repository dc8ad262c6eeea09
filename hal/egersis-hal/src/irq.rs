//! Local interrupt masking
//!
//! The panel power sequence and the pin-mux table apply both run with
//! interrupt delivery disabled; an interrupt landing mid-sequence could
//! stretch a timing window past panel tolerance.

/// Save/disable/restore control over local interrupt delivery
///
/// `save_and_disable` returns a token capturing the prior state;
/// `restore` re-establishes exactly that state. Tokens must be restored
/// in LIFO order. On the single-core targets this models, disabling is
/// a CPSR/PRIMASK-style operation, not a lock.
pub trait IrqControl {
    /// Saved interrupt state
    type Token;

    /// Disable local interrupt delivery, returning the previous state
    fn save_and_disable(&mut self) -> Self::Token;

    /// Restore interrupt delivery to a previously saved state
    fn restore(&mut self, token: Self::Token);
}

/// Scoped interrupt mask
///
/// Disables interrupt delivery on construction and restores the saved
/// state when dropped, so every exit path out of a masked region -
/// early return, `?`, panic - runs the restore.
pub struct IrqGuard<'a, I: IrqControl> {
    irq: &'a mut I,
    token: Option<I::Token>,
}

impl<'a, I: IrqControl> IrqGuard<'a, I> {
    /// Mask interrupts until the guard is dropped
    pub fn enter(irq: &'a mut I) -> Self {
        let token = irq.save_and_disable();
        Self {
            irq,
            token: Some(token),
        }
    }
}

impl<I: IrqControl> Drop for IrqGuard<'_, I> {
    fn drop(&mut self) {
        if let Some(token) = self.token.take() {
            self.irq.restore(token);
        }
    }
}
