use crate::errors::CoreError;
use crate::model::Performer;
use crate::storage::Store;

/// Current phase, defaulting to "not started" when the log is empty.
pub fn event_phase(store: &Store) -> Result<bool, CoreError> {
    Ok(store.latest_phase()?.unwrap_or(false))
}

/// Flips the event phase and returns the new state. Starting the event wipes
/// all stored scores as part of the same transaction; ending it leaves them
/// untouched so the final leaderboard can still be computed.
pub fn toggle_event_phase(store: &Store) -> Result<bool, CoreError> {
    let new_status = store.toggle_event_phase()?;
    tracing::info!(event = "event_phase_toggled", new_status);
    Ok(new_status)
}

pub fn set_current_performer(store: &Store, performer_id: i64) -> Result<(), CoreError> {
    store.set_current_performer(performer_id)?;
    tracing::info!(event = "current_performer_set", performer_id);
    Ok(())
}

/// `None` means the pointer log is empty, a normal pre-event state rather
/// than an error.
pub fn current_performer(store: &Store) -> Result<Option<Performer>, CoreError> {
    store.current_performer()
}
