//! Session runtime around the pure view engine.
//!
//! This crate owns everything with side effects: the record store and live
//! snapshot collaborators, the event bus, and the [`Session`] that keeps the
//! last-known-good collection and overlay and feeds them to `scout-core`.
//!
//! Modules are organized by responsibility:
//! - [`api`] exposes the error and result types clients bubble up
//! - [`repository`] defines the collaborator contracts and their adapters
//! - [`events`] broadcasts session changes to interested consumers
//! - [`session`] hosts the single-writer session and its builder
pub mod api;
pub mod events;
pub mod repository;
pub mod session;

pub use api::{Result, RuntimeError};
pub use events::{EventBus, MergeReport, Operation, SessionEvent, Topic};
pub use repository::{
    FileRecordStore, FileSnapshotCache, InMemoryRecordStore, InMemorySnapshotCache, RecordStore,
    RepositoryError, SnapshotBatch, SnapshotService,
};
pub use session::{Session, SessionBuilder, SessionConfig, SnapshotRequest};
