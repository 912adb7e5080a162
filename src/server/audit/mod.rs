//! Pure integrity checks over the order ledger and slot assignment table.
//!
//! Nothing here touches the database; repositories load the rows and services
//! feed them through these functions. Every check is read-only and never
//! repairs what it finds.

pub mod order;
pub mod slot;
