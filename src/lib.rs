//! Remat: Rematerialize CRDT Transaction Logs
//!
//! Materializes the current state of a set of domain objects from an
//! append-only, per-client transaction log and projects that state plus
//! associated binary assets onto a plain file tree. Object state is
//! reconstructed with hierarchical last-writer-wins merge semantics;
//! transaction frames are integrity-checked on read; files on both sides
//! are addressed through a distributed path scheme that keeps directories
//! shallow.

pub mod addressing;
pub mod asset;
pub mod cli;
pub mod digest;
pub mod error;
pub mod export;
pub mod frame;
pub mod logging;
pub mod merge;
pub mod types;
