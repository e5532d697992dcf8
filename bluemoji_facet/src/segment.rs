// Copyright 2025 the Bluemoji Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Segments, facets, and the segment → inline-node mapping.
//!
//! Segmentation itself happens in a collaborator; this module only decides
//! what one already-located segment renders as. The decision depends on
//! which feature fields are present, never on how the segment was found:
//!
//! - no facet, a non-emoji facet, or a facet that does not carry exactly one
//!   emoji feature → plain text;
//! - exactly one emoji feature with a usable display source → an emoji
//!   glyph sized for the surrounding style;
//! - exactly one emoji feature whose source is unresolved or unrecognized →
//!   nothing, silently.

use alloc::string::String;
use smallvec::SmallVec;

use crate::display::{select_source, DisplaySource, EmojiResolver};
use crate::feature::EmojiFeature;
use crate::glyph::{format_metrics, legacy_metrics, GlyphMetrics, TextStyle};

/// One typed payload carried by a facet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FacetFeature {
    /// A custom-emoji reference.
    Emoji(EmojiFeature),
    /// A mention of a decentralized identity.
    Mention {
        /// The mentioned identity.
        did: String,
    },
    /// A link.
    Link {
        /// The link target.
        uri: String,
    },
    /// A hashtag.
    Tag {
        /// The tag text, without the leading `#`.
        tag: String,
    },
    /// A feature shape this version does not recognize.
    Unknown,
}

/// A structured annotation attached to a span of rich text.
///
/// A facet may carry multiple features in principle; most carry one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Facet {
    /// The features carried by this facet.
    pub features: SmallVec<[FacetFeature; 1]>,
}

impl Facet {
    /// Construct a facet carrying a single feature.
    #[must_use]
    pub fn single(feature: FacetFeature) -> Self {
        let mut features = SmallVec::new();
        features.push(feature);
        Self { features }
    }

    /// The emoji feature, when this facet is an emoji facet.
    ///
    /// A facet counts as an emoji only when it carries *exactly one* feature
    /// and that feature is an emoji. Zero features, several features, or a
    /// lone non-emoji feature all yield `None` and the segment falls back to
    /// plain text. (Whether a facet can legitimately pair an emoji with a
    /// second feature — say, a link target — is unsettled; until it is, more
    /// than one feature means "not an emoji".)
    #[must_use]
    pub fn emoji(&self) -> Option<&EmojiFeature> {
        match self.features.as_slice() {
            [FacetFeature::Emoji(emoji)] => Some(emoji),
            _ => None,
        }
    }
}

/// One segment of a rich-text run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Segment {
    /// The raw text of the segment.
    pub text: String,
    /// The facet located over this span, if any.
    pub facet: Option<Facet>,
}

/// A placed inline emoji, ready for the text renderer.
#[derive(Clone, Debug, PartialEq)]
pub struct EmojiGlyph {
    /// The resolved display resource.
    pub source: DisplaySource,
    /// Glyph box size and baseline offset for the surrounding style.
    pub metrics: GlyphMetrics,
    /// Accessible label (the emoji's name).
    pub label: String,
    /// Accessible hint (the emoji's alt text).
    pub hint: String,
}

/// What a segment renders as.
#[derive(Clone, Debug, PartialEq)]
pub enum InlineNode {
    /// Plain text (also the fallback for non-emoji facets).
    Text(String),
    /// An inline emoji glyph.
    Emoji(EmojiGlyph),
    /// Nothing; the segment is omitted from output for now.
    Empty,
}

/// Map a segment to its renderable node.
///
/// Pure except for the resolver lookup. Never fails: collaborator
/// shortfalls degrade to [`InlineNode::Text`] or [`InlineNode::Empty`].
#[must_use]
pub fn render_segment<R: EmojiResolver>(
    style: &TextStyle,
    segment: &Segment,
    resolver: &R,
) -> InlineNode {
    let Some(emoji) = segment.facet.as_ref().and_then(Facet::emoji) else {
        return InlineNode::Text(segment.text.clone());
    };
    match select_source(emoji, resolver) {
        Some(source) => {
            let metrics = match emoji {
                EmojiFeature::Legacy(_) => legacy_metrics(style),
                EmojiFeature::Formats(_) => format_metrics(style),
            };
            InlineNode::Emoji(EmojiGlyph {
                source,
                metrics,
                label: String::from(emoji.name()),
                hint: String::from(emoji.alt()),
            })
        }
        None => InlineNode::Empty,
    }
}
