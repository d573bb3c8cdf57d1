//! # shotsweep
//!
//! Auto-destroy retention manager for screenshot folders.
//!
//! shotsweep tracks screenshot folders under an auto-destroy policy: each
//! tracked folder carries a retention period of 1-365 days after which its
//! contents are eligible for deletion. This crate implements the
//! configuration side of that policy:
//!
//! - **Policy store**: validated add/remove/update operations over the
//!   tracked-folder list, persisted in full after every mutation
//! - **Salvaging loads**: a partially corrupt settings file keeps its
//!   parseable half instead of being discarded wholesale
//! - **Folder catalog**: the read-only source the store snapshots folders
//!   from, with a derived "selectable" view
//! - **CLI as Unix Citizen**: JSON output, pipe-friendly, scriptable
//!
//! Enforcement of the policy (actually deleting files) is out of scope.

pub mod catalog;
pub mod cli;
pub mod common;
pub mod notify;
pub mod policy;
