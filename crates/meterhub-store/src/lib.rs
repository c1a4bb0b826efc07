//! # meterhub-store
//!
//! Storage layer for MeterHub. Three stores, each owning one record type:
//!
//! - [`ResourceRegistry`]: resource definitions, read-mostly.
//! - [`SessionLedger`]: the authoritative usage session store; enforces
//!   per-resource admission and the active→completed lifecycle.
//! - [`BillingStore`]: append-only billing records.
//!
//! All stores are in-memory and safe for concurrent use. The ledger's
//! per-resource admission gates and per-session entry locks are the only
//! mutually-exclusive regions; reads on one resource never block writes
//! on another.

pub mod billing;
pub mod ledger;
pub mod registry;

pub use billing::BillingStore;
pub use ledger::SessionLedger;
pub use registry::ResourceRegistry;
