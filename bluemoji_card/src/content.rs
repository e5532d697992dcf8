// Copyright 2025 the Bluemoji Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Card content: the stateless view-model inside the floating element.
//!
//! Presentation only — a header row naming the emoji, the description body,
//! and a favorite toggle. The toggle is ephemeral, in-memory state with no
//! persistence; it resets whenever the card content is rebuilt.

use alloc::format;
use alloc::string::String;

/// Fixed width of the card, in the host's logical units.
pub const CARD_WIDTH: f64 = 300.0;

/// The resolved fields displayed by the card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardContent {
    /// The emoji's short name.
    pub name: String,
    /// The emoji's display resource.
    pub uri: String,
    /// The emoji's description (its alt text).
    pub description: String,
}

impl CardContent {
    /// The header row: `Bluemoji • {name}`.
    #[must_use]
    pub fn header(&self) -> String {
        format!("Bluemoji • {}", self.name)
    }
}

/// Icon variant for the favorite button.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FavoriteIcon {
    /// Filled star, shown when favorited.
    Filled,
    /// Outlined star, shown otherwise.
    Outline,
}

/// Ephemeral favorite state for the card's toggle button.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FavoriteToggle {
    favorited: bool,
}

impl FavoriteToggle {
    /// Create an un-favorited toggle.
    #[must_use]
    pub const fn new() -> Self {
        Self { favorited: false }
    }

    /// Flip the toggle.
    pub fn toggle(&mut self) {
        self.favorited = !self.favorited;
    }

    /// Whether the emoji is currently favorited.
    #[must_use]
    pub const fn is_favorited(self) -> bool {
        self.favorited
    }

    /// The button label for the current state.
    #[must_use]
    pub const fn label(self) -> &'static str {
        if self.favorited {
            "Favorited"
        } else {
            "Add to favorites"
        }
    }

    /// The icon variant for the current state.
    #[must_use]
    pub const fn icon(self) -> FavoriteIcon {
        if self.favorited {
            FavoriteIcon::Filled
        } else {
            FavoriteIcon::Outline
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_names_the_emoji() {
        let content = CardContent {
            name: "butterfly".into(),
            uri: "https://cdn.example/butterfly.png".into(),
            description: "a blue butterfly".into(),
        };
        assert_eq!(content.header(), "Bluemoji • butterfly");
    }

    #[test]
    fn favorite_toggle_round_trips() {
        let mut favorite = FavoriteToggle::new();
        assert!(!favorite.is_favorited());
        assert_eq!(favorite.label(), "Add to favorites");
        assert_eq!(favorite.icon(), FavoriteIcon::Outline);

        favorite.toggle();
        assert!(favorite.is_favorited());
        assert_eq!(favorite.label(), "Favorited");
        assert_eq!(favorite.icon(), FavoriteIcon::Filled);

        favorite.toggle();
        assert!(!favorite.is_favorited());
    }
}
