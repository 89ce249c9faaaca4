//! Recognition of operation (action button) columns.

use super::Column;

/// Keys and data paths that mark an operation column, compared case-insensitively.
const OPERATION_KEYS: [&str; 5] = ["action", "actions", "operation", "operate", "op"];

/// Localized header titles of operation columns.
const OPERATION_TITLES: [&str; 4] = ["操作", "操作列", "操作区", "操作按钮"];

/// Whether `column` holds per-row action buttons.
///
/// Operation columns are pinned right, keep a fixed width, and are excluded
/// from resizing, reordering and persisted layout.
pub fn is_operation_column(column: &Column) -> bool {
    let is_operation_word = |text: &str| {
        OPERATION_KEYS
            .iter()
            .any(|word| word.eq_ignore_ascii_case(text))
    };

    if column.key.as_deref().is_some_and(is_operation_word) {
        return true;
    }
    if is_operation_word(&column.data_path_text()) {
        return true;
    }
    let title = column.title.trim();
    OPERATION_TITLES.contains(&title) || is_operation_word(title)
}
