// Copyright 2025 the Bluemoji Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Display-source selection.
//!
//! A current-format emoji advertises which encodings exist; exactly one is
//! chosen for display, preferring static images over animation:
//! PNG, then WebP, then non-animated GIF, then the vector animation, then
//! nothing. Fetching the chosen encoding — discovering the owner's service
//! endpoint and pulling the blob — happens in a collaborator behind the
//! [`EmojiResolver`] seam; resolution is asynchronous and a pending or
//! failed lookup simply yields `None`, which renders as nothing until a
//! later pass.

use alloc::string::String;

use crate::feature::{EmojiFeature, FormatFlags};

/// The encoding chosen for display.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PreferredFormat {
    /// 128px static PNG.
    Png128,
    /// 128px WebP.
    Webp128,
    /// 128px non-animated GIF.
    Gif128,
    /// Binary-encoded vector-animation document.
    Lottie,
}

impl PreferredFormat {
    /// Whether this is a static-image encoding.
    #[must_use]
    pub const fn is_static(self) -> bool {
        !matches!(self, Self::Lottie)
    }
}

impl FormatFlags {
    /// Pick the encoding to display, or `None` when nothing usable is set.
    ///
    /// Pick order: PNG, WebP, static GIF, animation. `APNG_128` is never
    /// selected.
    #[must_use]
    pub fn preferred(self) -> Option<PreferredFormat> {
        if self.contains(Self::PNG_128) {
            Some(PreferredFormat::Png128)
        } else if self.contains(Self::WEBP_128) {
            Some(PreferredFormat::Webp128)
        } else if self.contains(Self::GIF_128) {
            Some(PreferredFormat::Gif128)
        } else if self.contains(Self::LOTTIE) {
            Some(PreferredFormat::Lottie)
        } else {
            None
        }
    }
}

/// A resolved display resource, opaque to the core.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DisplaySource {
    /// URI of a static image.
    Image(String),
    /// Source of a vector-animation document.
    Animation(String),
}

/// Seam to the asynchronous resolution collaborator.
///
/// Implementations look up (or kick off) resolution of the given emoji
/// identity at the chosen encoding. `None` means the resource is not usable
/// yet — still pending, or failed; callers degrade to rendering nothing and
/// ask again on a later pass. Implementations must not block.
pub trait EmojiResolver {
    /// Resolve one emoji identity to a display source.
    fn resolve(&self, owner: &str, id: &str, format: PreferredFormat) -> Option<DisplaySource>;
}

/// Select the display source for a feature.
///
/// Legacy features carry their resource inline and bypass the resolver.
#[must_use]
pub fn select_source<R: EmojiResolver>(feature: &EmojiFeature, resolver: &R) -> Option<DisplaySource> {
    match feature {
        EmojiFeature::Legacy(legacy) => Some(DisplaySource::Image(legacy.uri.clone())),
        EmojiFeature::Formats(bundle) => {
            let format = bundle.formats.preferred()?;
            resolver.resolve(&bundle.owner, &bundle.id, format)
        }
    }
}

/// Table-backed resolver keyed by (owner, id).
///
/// Hosts that resolve ahead of time can populate this and hand it to the
/// segment mapping; it is also what the test suites use.
#[cfg(feature = "table")]
#[derive(Clone, Debug, Default)]
pub struct TableResolver {
    entries: hashbrown::HashMap<(String, String), DisplaySource>,
}

#[cfg(feature = "table")]
impl TableResolver {
    /// Create an empty resolver.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a resolved source for an emoji identity.
    pub fn insert(&mut self, owner: impl Into<String>, id: impl Into<String>, source: DisplaySource) {
        self.entries.insert((owner.into(), id.into()), source);
    }
}

#[cfg(feature = "table")]
impl EmojiResolver for TableResolver {
    fn resolve(&self, owner: &str, id: &str, _format: PreferredFormat) -> Option<DisplaySource> {
        self.entries
            .get(&(String::from(owner), String::from(id)))
            .cloned()
    }
}
