//! UI area positioning for mouse event handling
//!
//! This module provides a centralized way to calculate vertical offsets
//! for the form rows, accounting for the form border.

use super::forms::SUBMIT_ROW;

/// Height of one form field (top border + value + bottom border with error)
pub const FIELD_HEIGHT: u16 = 3;

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// UI area for calculating mouse Y offset
///
/// # Layout
///
/// ```text
/// Row 0:    Form border with title
/// Row 1+:   Six fields (FIELD_HEIGHT rows each)
///           Submit button (BUTTON_HEIGHT rows)
///           Help text
/// Bottom:   Status bar (1 row)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiArea {
    /// The form block, including its border
    Form,
    /// Form rows (starts after the border)
    FormContent,
}

impl UiArea {
    /// Get the starting Y row for this UI area (absolute screen position)
    #[inline]
    pub const fn start_y(self) -> u16 {
        match self {
            UiArea::Form => 0,
            UiArea::FormContent => 1, // +1 for border
        }
    }

    /// Convert absolute mouse row to row relative to this UI area
    #[inline]
    pub fn relative_row(self, mouse_row: u16) -> u16 {
        mouse_row.saturating_sub(self.start_y())
    }

    /// Check if a mouse row is within this UI area (at or after start)
    #[inline]
    pub fn contains_row(self, mouse_row: u16) -> bool {
        mouse_row >= self.start_y()
    }
}

/// Map a mouse row onto a form row index (fields first, then the submit row)
pub fn form_row_at(mouse_row: u16) -> Option<usize> {
    if !UiArea::FormContent.contains_row(mouse_row) {
        return None;
    }
    let row = UiArea::FormContent.relative_row(mouse_row);
    let fields_height = FIELD_HEIGHT * SUBMIT_ROW as u16;

    if row < fields_height {
        Some((row / FIELD_HEIGHT) as usize)
    } else if row < fields_height + BUTTON_HEIGHT {
        Some(SUBMIT_ROW)
    } else {
        None
    }
}
