// State managers
// Managers handle stateful operations over persisted data.

pub mod favorites_store;
