//! User-facing message catalog.
//!
//! Strings shown in dialogs and the status bar live here so translations can
//! override them from `config.toml` (`[messages]`), the same override pattern
//! the theme uses. Templates interpolate `{name}` with the item's display
//! name.

use serde::{Deserialize, Serialize};

/// Message catalog with English defaults, overridable per key.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
    /// Fallback for any failure without a more specific message.
    pub generic_error: String,
    /// Shown when the server rejects a move/copy as a bad request.
    pub move_copy_bad_request: String,
    /// Shown when the destination already has an item with this name.
    pub move_copy_name_in_use: String,
    pub move_copy_dialog_title: String,
    pub move_copy_dialog_description: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            generic_error: "Something went wrong. Please try again.".to_string(),
            move_copy_bad_request:
                "This item can't be moved or copied to the selected folder.".to_string(),
            move_copy_name_in_use:
                "An item named \"{name}\" already exists in this folder.".to_string(),
            move_copy_dialog_title: "Move or copy \"{name}\"".to_string(),
            move_copy_dialog_description: "Pick a destination folder.".to_string(),
        }
    }
}

impl Messages {
    pub fn generic_error(&self) -> &str {
        &self.generic_error
    }

    pub fn bad_request(&self) -> &str {
        &self.move_copy_bad_request
    }

    pub fn name_in_use(&self, name: &str) -> String {
        interpolate(&self.move_copy_name_in_use, name)
    }

    pub fn dialog_title(&self, name: &str) -> String {
        interpolate(&self.move_copy_dialog_title, name)
    }

    pub fn dialog_description(&self) -> &str {
        &self.move_copy_dialog_description
    }
}

/// Replace every `{name}` placeholder in a template.
fn interpolate(template: &str, name: &str) -> String {
    template.replace("{name}", name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interpolation() {
        let messages = Messages::default();
        let text = messages.name_in_use("Q3 report.pdf");
        assert!(text.contains("Q3 report.pdf"));
        assert!(!text.contains("{name}"));
    }

    #[test]
    fn test_title_interpolation() {
        let messages = Messages::default();
        assert_eq!(messages.dialog_title("notes"), "Move or copy \"notes\"");
    }

    #[test]
    fn test_overridden_template() {
        let messages = Messages {
            move_copy_name_in_use: "\"{name}\" ist bereits vergeben.".to_string(),
            ..Messages::default()
        };
        assert_eq!(messages.name_in_use("a"), "\"a\" ist bereits vergeben.");
    }
}
