//! Data access layer for the in-memory session store.
//!
//! The store is the bot's only runtime state. It is created once in `AppState`
//! and cloned into every handler; repositories borrow it for the duration of a
//! single operation.

pub mod session;

#[cfg(test)]
mod test;
