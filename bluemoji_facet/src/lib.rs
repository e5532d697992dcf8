// Copyright 2025 the Bluemoji Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=bluemoji_facet --heading-base-level=0

//! Bluemoji Facet: custom-emoji annotations inside rich text.
//!
//! A rich-text run arrives pre-segmented, each segment optionally carrying a
//! *facet* — a structured annotation such as a mention, link, tag, or emoji
//! reference. This crate models the emoji-bearing shapes and provides the
//! pure mapping from a segment to a renderable inline node:
//!
//! - [`feature`]: the emoji feature payloads — the legacy single-image
//!   reference and the current format bundle with availability flags.
//! - [`display`]: display-source selection — static-image format precedence,
//!   the asynchronous [`EmojiResolver`](display::EmojiResolver) seam, and a
//!   table-backed resolver for tests and simple hosts.
//! - [`segment`]: segments, facets, and [`render_segment`](segment::render_segment),
//!   the (style, segment) → node mapping consumed by the text renderer.
//! - [`glyph`]: glyph sizing relative to the surrounding font size.
//!
//! ## Degradation
//!
//! Everything in this crate is total. A facet that does not carry exactly
//! one recognizable emoji feature renders as plain text; an emoji whose
//! display resource has not resolved yet renders as nothing, silently, and
//! again once resolution completes. Unknown future facet shapes must never
//! break unrelated text.
//!
//! ## Minimal example
//!
//! ```rust
//! use bluemoji_facet::display::{DisplaySource, TableResolver};
//! use bluemoji_facet::feature::{EmojiFeature, LegacyEmoji};
//! use bluemoji_facet::glyph::TextStyle;
//! use bluemoji_facet::segment::{render_segment, Facet, FacetFeature, InlineNode, Segment};
//!
//! let segment = Segment {
//!     text: "🦋".into(),
//!     facet: Some(Facet::single(FacetFeature::Emoji(EmojiFeature::Legacy(LegacyEmoji {
//!         uri: "https://cdn.example/butterfly.png".into(),
//!         name: "butterfly".into(),
//!         alt: "a blue butterfly".into(),
//!     })))),
//! };
//!
//! let node = render_segment(&TextStyle::default(), &segment, &TableResolver::new());
//! let InlineNode::Emoji(glyph) = node else { panic!("expected an emoji node") };
//! assert_eq!(glyph.label, "butterfly");
//! assert_eq!(glyph.source, DisplaySource::Image("https://cdn.example/butterfly.png".into()));
//! ```
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

pub mod display;
pub mod feature;
pub mod glyph;
pub mod segment;
