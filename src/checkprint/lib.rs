//! # Checkprint Architecture
//!
//! Checkprint lays out checklists as fixed-width plain text for thermal
//! receipt printers. It is a library with a thin CLI client on top.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs)                               │
//! │  - Parses arguments, prints documents and messages          │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, owns the printer              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - render, print, demo, config                              │
//! │  - Returns `CmdResult`, never writes to the terminal        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Layout (layout/) and Output (printer/)                     │
//! │  - Pure word wrapping and document layout                   │
//! │  - Printer trait: MemoryPrinter (mock), FilePrinter         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Determinism
//!
//! The only input to a document besides the checklist and the width is the
//! time on the `Printed:` line. It comes from an injected [`layout::Clock`],
//! so a [`layout::FixedClock`] makes rendering byte-for-byte reproducible.
//!
//! ## Module Overview
//!
//! - [`layout`]: Word wrapping, clocks and the checklist renderer
//! - [`model`]: `Checklist` and `ChecklistItem`
//! - [`printer`]: Output collaborators
//! - [`commands`]: Business logic for each command
//! - [`api`]: The facade used by clients
//! - [`config`]: Persistent configuration
//! - [`logging`]: Logger bootstrap for binaries
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod layout;
pub mod logging;
pub mod model;
pub mod printer;
