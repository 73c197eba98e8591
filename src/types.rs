//! Core types shared across codac modules.

/// DocumentId: identifier of a document or folder record, as issued by the store
pub type DocumentId = String;

/// Default length of the attendance edit window, in days
pub const DEFAULT_EDITABLE_WINDOW_DAYS: u32 = 30;
