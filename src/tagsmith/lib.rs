//! # Tagsmith Architecture
//!
//! Tagsmith turns a tree of per-component JSON metadata descriptors into a
//! single normalized `tags.json` document that editor tooling can use for
//! tag/attribute autocompletion. The interesting work is the pure
//! transformation; everything around it is deliberately thin plumbing.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (args.rs, wired by main.rs)                            │
//! │  - Argument parsing, logging setup, exit codes              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Pipeline (pipeline.rs)                                     │
//! │  - reset workspace → fetch → collect → assemble → persist   │
//! │  - Driven entirely by an explicit Config value              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (collect.rs, transform.rs, naming.rs)                 │
//! │  - Pure descriptor → tag transformation                     │
//! │  - Nested group flattening, camelCase → hyphen rewrite,     │
//! │    on-*-changed listener synthesis                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Collaborators (workspace.rs, fetch.rs, output.rs)          │
//! │  - Directory lifecycle, source acquisition (Fetcher trait), │
//! │    document persistence                                     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principles
//!
//! - **Fail fast, no partial output.** Any unreadable or malformed
//!   descriptor aborts the run before anything is written. The document
//!   exists only if every file processed cleanly.
//! - **Deterministic output.** Components are sorted by descriptor file
//!   name, and property/event order inside a descriptor is preserved as
//!   written, so the same input tree always produces the same bytes.
//! - **No ambient state.** Paths and URLs travel in a [`config::Config`]
//!   passed into [`pipeline::run`]; source acquisition sits behind the
//!   [`fetch::Fetcher`] trait so tests run against local fixture
//!   directories.

pub mod args;
pub mod collect;
pub mod config;
pub mod error;
pub mod fetch;
pub mod model;
pub mod naming;
pub mod output;
pub mod pipeline;
pub mod transform;
pub mod workspace;
