// Copyright 2025 the Bluemoji Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Emoji feature payloads.
//!
//! Two generations of the wire format are in circulation. The legacy shape
//! is a single pre-resolved image reference. The current shape addresses a
//! record owned by a decentralized identity and advertises which encodings
//! the owner's service can produce via [`FormatFlags`]; the actual bytes are
//! fetched by a collaborator (see [`crate::display`]).

use alloc::string::String;
use alloc::vec::Vec;

bitflags::bitflags! {
    /// Format availability flags carried by a current-format emoji bundle.
    ///
    /// `APNG_128` is carried for wire fidelity but takes no part in display
    /// selection; see [`FormatFlags::preferred`](crate::display) for the
    /// pick order.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct FormatFlags: u8 {
        /// A 128px static PNG is available.
        const PNG_128  = 1 << 0;
        /// A 128px WebP is available.
        const WEBP_128 = 1 << 1;
        /// A 128px non-animated GIF is available.
        const GIF_128  = 1 << 2;
        /// A 128px animated PNG is available.
        const APNG_128 = 1 << 3;
        /// A binary-encoded vector-animation document is available.
        const LOTTIE   = 1 << 4;
    }
}

/// Legacy emoji reference: a pre-resolved image with no owner identity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LegacyEmoji {
    /// Display resource, already resolved.
    pub uri: String,
    /// Short name, used as the accessible label and the card title.
    pub name: String,
    /// Alt text, used as the accessible hint and the card description.
    pub alt: String,
}

/// Current-format emoji bundle, addressed by owner identity and record id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormatEmoji {
    /// Short name, used as the accessible label and the card title.
    pub name: String,
    /// Alt text, used as the accessible hint and the card description.
    pub alt: String,
    /// Decentralized identity of the emoji's owner.
    pub owner: String,
    /// Record id under the owner's repository.
    pub id: String,
    /// Content-moderation labels applied to this emoji.
    pub labels: Vec<String>,
    /// Which encodings the owner's service can produce.
    pub formats: FormatFlags,
}

/// One emoji feature, in either wire generation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EmojiFeature {
    /// Legacy single-image reference.
    Legacy(LegacyEmoji),
    /// Current format-aware bundle.
    Formats(FormatEmoji),
}

impl EmojiFeature {
    /// The emoji's short name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Legacy(e) => &e.name,
            Self::Formats(e) => &e.name,
        }
    }

    /// The emoji's alt text.
    #[must_use]
    pub fn alt(&self) -> &str {
        match self {
            Self::Legacy(e) => &e.alt,
            Self::Formats(e) => &e.alt,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_flags_compose() {
        let flags = FormatFlags::PNG_128 | FormatFlags::LOTTIE;
        assert!(flags.contains(FormatFlags::PNG_128));
        assert!(flags.contains(FormatFlags::LOTTIE));
        assert!(!flags.contains(FormatFlags::WEBP_128));
    }

    #[test]
    fn accessors_cover_both_generations() {
        let legacy = EmojiFeature::Legacy(LegacyEmoji {
            uri: "https://cdn.example/a.png".into(),
            name: "blob".into(),
            alt: "a blob".into(),
        });
        assert_eq!(legacy.name(), "blob");
        assert_eq!(legacy.alt(), "a blob");

        let formats = EmojiFeature::Formats(FormatEmoji {
            name: "wave".into(),
            alt: "a waving hand".into(),
            owner: "did:plc:ewvi7nxzyoun6zhxrhs64oiz".into(),
            id: "wave-1".into(),
            labels: Vec::new(),
            formats: FormatFlags::PNG_128,
        });
        assert_eq!(formats.name(), "wave");
        assert_eq!(formats.alt(), "a waving hand");
    }
}
