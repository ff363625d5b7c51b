// The logo is a plain-text banner shown above the menu. It is cosmetic:
// if the file is missing, unreadable or blank the kiosk runs without it.

use std::fs;
use std::path::Path;

/// Largest banner drawn without shrinking, in columns
pub const MAX_LOGO_WIDTH: usize = 40;
/// Largest banner drawn without shrinking, in rows
pub const MAX_LOGO_HEIGHT: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Logo {
    rows: Vec<String>,
}

impl Logo {
    /// Build a logo from banner text, shrinking it to fit the bounding box.
    /// Returns `None` when the text has no visible content.
    pub fn from_text(text: &str) -> Option<Self> {
        let rows: Vec<&str> = text.lines().map(str::trim_end).collect();
        if rows.iter().all(|row| row.trim().is_empty()) {
            return None;
        }

        let width = rows.iter().map(|row| row.chars().count()).max().unwrap_or(0);
        let step = Self::shrink_step(width, rows.len());

        let rows = rows
            .iter()
            .step_by(step)
            .map(|row| row.chars().step_by(step).collect())
            .collect();

        Some(Self { rows })
    }

    /// Integer subsample factor: every `step`-th row and column is kept
    fn shrink_step(width: usize, height: usize) -> usize {
        width
            .div_ceil(MAX_LOGO_WIDTH)
            .max(height.div_ceil(MAX_LOGO_HEIGHT))
            .max(1)
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }
}

/// Best-effort load of the banner at `path`. Never fails.
pub fn load_logo(path: &Path) -> Option<Logo> {
    match fs::read_to_string(path) {
        Ok(text) => {
            let logo = Logo::from_text(&text);
            if logo.is_none() {
                tracing::debug!(path = %path.display(), "Logo file is empty, skipping");
            }
            logo
        }
        Err(err) => {
            tracing::debug!(path = %path.display(), error = %err, "Logo not loaded, skipping");
            None
        }
    }
}
