use std::fmt;

use log::debug;

use super::clock::{Clock, SystemClock, TIMESTAMP_FORMAT};
use super::wrap::wrap;
use crate::error::{CheckprintError, Result};
use crate::model::ChecklistItem;

/// Column count of a standard 58mm thermal roll.
pub const DEFAULT_WIDTH: usize = 40;

/// Below this a checkbox plus number prefix no longer leaves room for text.
pub const MIN_WIDTH: usize = 5;

const FALLBACK_TITLE: &str = "CHECKLIST";
const BANNER_CHAR: char = '=';
const DIVIDER_CHAR: char = '-';
const END_MARKER: &str = "END";

/// Everything needed to lay out one checklist.
#[derive(Debug, Clone, Copy)]
pub struct RenderRequest<'a> {
    pub title: &'a str,
    pub items: &'a [ChecklistItem],
    pub width: usize,
}

impl<'a> RenderRequest<'a> {
    pub fn new(title: &'a str, items: &'a [ChecklistItem]) -> Self {
        Self {
            title,
            items,
            width: DEFAULT_WIDTH,
        }
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }
}

/// A finished, newline-terminated document ready for a printer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument(String);

impl RenderedDocument {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn lines(&self) -> std::str::Lines<'_> {
        self.0.lines()
    }

    /// Length in chars, as the printer sees it.
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }
}

impl fmt::Display for RenderedDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RenderedDocument {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Lays out a checklist document:
///
/// ```text
/// ========================================
///                   DEMO
/// ========================================
/// Printed: 2024-05-01 09:30
/// ----------------------------------------
/// [ ] 1. Item A
/// [x] 2. Item B
/// ----------------------------------------
/// END
/// ========================================
/// ```
///
/// Item text wraps under itself (hanging indent), never under the prefix.
pub fn render<C: Clock + ?Sized>(
    request: &RenderRequest<'_>,
    clock: &C,
) -> Result<RenderedDocument> {
    let width = request.width;
    if width < MIN_WIDTH {
        return Err(CheckprintError::InvalidArgument(format!(
            "Width must be at least {} columns, got {}",
            MIN_WIDTH, width
        )));
    }

    debug!(
        "event=render_checklist items={} width={}",
        request.items.len(),
        width
    );

    let banner = BANNER_CHAR.to_string().repeat(width);
    let divider = DIVIDER_CHAR.to_string().repeat(width);

    let mut lines: Vec<String> = Vec::with_capacity(request.items.len() + 8);
    lines.push(banner.clone());
    lines.push(centered_title(request.title, width));
    lines.push(banner.clone());
    lines.push(format!("Printed: {}", clock.now().format(TIMESTAMP_FORMAT)));
    lines.push(divider.clone());

    for (i, item) in request.items.iter().enumerate() {
        push_item(&mut lines, i + 1, item, width);
    }

    lines.push(divider);
    lines.push(END_MARKER.to_string());
    lines.push(banner);

    let mut out = lines.join("\n");
    out.push('\n');
    Ok(RenderedDocument(out))
}

/// Renders with the local system time.
pub fn render_checklist(
    title: &str,
    items: &[ChecklistItem],
    width: usize,
) -> Result<RenderedDocument> {
    let request = RenderRequest::new(title, items).with_width(width);
    render(&request, &SystemClock)
}

fn centered_title(title: &str, width: usize) -> String {
    let title = if title.is_empty() {
        FALLBACK_TITLE.to_string()
    } else {
        title.to_uppercase()
    };
    // Oversized titles overflow instead of being cut
    let pad = width.saturating_sub(title.chars().count()) / 2;
    format!("{}{}", " ".repeat(pad), title)
}

fn push_item(lines: &mut Vec<String>, number: usize, item: &ChecklistItem, width: usize) {
    let checkbox = if item.completed { "[x]" } else { "[ ]" };
    let prefix = format!("{} {}. ", checkbox, number);
    let prefix_len = prefix.chars().count();
    let available = width.saturating_sub(prefix_len);

    let mut wrapped = wrap(&item.text, available).into_iter();
    match wrapped.next() {
        Some(first) => {
            lines.push(format!("{}{}", prefix, first));
            let indent = " ".repeat(prefix_len);
            lines.extend(wrapped.map(|rest| format!("{}{}", indent, rest)));
        }
        None => lines.push(prefix),
    }
}
