//! Write side: create, update and delete, one transaction per attempt.
//!
//! Each attempt moves `Pending -> Committed` or `Pending -> RolledBack` and
//! stops there; nothing is retried. [`transact`] owns that state machine so
//! the individual mutations only describe their statements.

pub mod artists;
pub mod shows;
pub mod venues;

use crate::error::BookingResult;
use log::{info, warn};
use rusqlite::{Connection, Transaction};
use std::fmt::{Display, Formatter};

/// Terminal state of one mutation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxState {
    Committed,
    RolledBack,
}

impl Display for TxState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Committed => f.write_str("committed"),
            Self::RolledBack => f.write_str("rolled back"),
        }
    }
}

/// Runs `work` inside a transaction on `conn`.
///
/// `Ok` commits; `Err` (including a failing commit) rolls everything back and
/// returns the error unchanged. A transaction that is dropped before either
/// happens, e.g. while unwinding, is rolled back by rusqlite.
pub fn transact<T, F>(conn: &mut Connection, operation: &str, work: F) -> BookingResult<T>
where
    F: FnOnce(&Transaction<'_>) -> BookingResult<T>,
{
    let tx = conn.transaction()?;
    let result = work(&tx).and_then(|value| {
        tx.commit()?;
        Ok(value)
    });

    let state = if result.is_ok() {
        TxState::Committed
    } else {
        TxState::RolledBack
    };
    match &result {
        Ok(_) => info!("{operation}: {state}"),
        Err(err) => warn!("{operation}: {state} ({err})"),
    }
    result
}
