//! Start/stop rule for the session's background handles.
//!
//! The handle set lives exactly while an identity is present: it is created
//! on the first signed-in observation and dropped (which cancels it) as soon
//! as the session ends. Repeated signed-in observations keep the running set.

#[cfg(test)]
#[path = "timer_slot_test.rs"]
mod timer_slot_test;

/// Bring `slot` in line with `signed_in`, calling `start` only when a new
/// handle set is needed.
pub fn sync_slot<T>(slot: &mut Option<T>, signed_in: bool, start: impl FnOnce() -> T) {
    if !signed_in {
        slot.take();
    } else if slot.is_none() {
        *slot = Some(start());
    }
}

/// Drop whatever is running, e.g. when the owning scope is disposed.
pub fn clear_slot<T>(slot: &mut Option<T>) {
    slot.take();
}
