//! # Checklist Layout
//!
//! Turns a titled list of checklist items into a fixed-width, plain-text
//! document for receipt printers.
//!
//! - [`wrap`]: greedy word wrapping at whitespace boundaries. Never splits a
//!   token; oversized tokens overflow on their own line.
//! - [`render`]: banner, centered title, timestamp, numbered items with
//!   checkboxes and hanging indents, footer.
//! - [`Clock`]: the time source for the `Printed:` line. Inject a
//!   [`FixedClock`] for reproducible output.
//!
//! Nothing here does I/O or keeps state between calls.

pub mod checklist;
pub mod clock;
pub mod wrap;

pub use checklist::{
    render, render_checklist, RenderRequest, RenderedDocument, DEFAULT_WIDTH, MIN_WIDTH,
};
pub use clock::{Clock, FixedClock, SystemClock, TIMESTAMP_FORMAT};
pub use wrap::wrap;
