// Copyright 2025 the Bluemoji Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=bluemoji_card --heading-base-level=0

//! Bluemoji Card: the hover card controller and its content.
//!
//! This crate wires raw device events to the hover-intent machine from
//! `bluemoji_hover` and owns the lifetime of its effects:
//!
//! - [`controller`]: maps pointer/touch/scroll/press events on the anchor
//!   and on the floating card to intent actions, executes each entered
//!   stage's described effect through an [`EffectHost`](controller::EffectHost),
//!   and derives whether the card is mounted and which animation variant it
//!   plays.
//! - [`content`]: the stateless view-model rendered inside the card — the
//!   header row, description, and the ephemeral favorite toggle.
//!
//! ## Effect lifecycle
//!
//! The hover-intent machine describes timers and listeners as data; this
//! crate is the only place they become real. The controller holds at most
//! one live *ticket* per anchor/card pair. On every stage change it cancels
//! the previous ticket before installing the entered stage's effect, and
//! [`teardown`](controller::HoverCardController::teardown) releases the live
//! ticket when the pair unmounts, whatever the current stage. When the
//! host's timer fires (or a watched scroll arrives), the host feeds the
//! effect's action back through
//! [`dispatch`](controller::HoverCardController::dispatch).
//!
//! ## Mounting
//!
//! Hosts mount the card into a top-level overlay layer (a portal) so
//! scrolling ancestors cannot clip it, and position it with
//! `bluemoji_float`. On touch-primary devices the controller is constructed
//! in bypass mode and never mounts the card; any informational affordance
//! there comes from an explicit tap path outside this crate.
//!
//! ## Minimal example
//!
//! ```rust
//! use bluemoji_card::controller::{CardEvent, EffectHost, HoverCardController, InputMode};
//! use bluemoji_hover::intent::{Action, Effect, Reason, Stage};
//!
//! struct Host {
//!     live: Vec<(u32, Effect)>,
//!     next: u32,
//! }
//!
//! impl EffectHost for Host {
//!     type Ticket = u32;
//!     fn install(&mut self, effect: Effect) -> u32 {
//!         self.next += 1;
//!         self.live.push((self.next, effect));
//!         self.next
//!     }
//!     fn cancel(&mut self, ticket: u32) {
//!         self.live.retain(|(t, _)| *t != ticket);
//!     }
//! }
//!
//! let mut host = Host { live: Vec::new(), next: 0 };
//! let mut card = HoverCardController::new(InputMode::Pointer);
//!
//! // First movement over the anchor starts the show-delay timer.
//! card.on_event(&mut host, CardEvent::TargetPointerMove);
//! assert_eq!(card.stage(), Stage::MightShow { reason: Reason::Target });
//! assert_eq!(host.live.len(), 1);
//!
//! // The host's timer fires and feeds the described action back in.
//! card.dispatch(&mut host, Action::HoveredLongEnough);
//! assert!(card.is_mounted());
//! ```
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

pub mod content;
pub mod controller;
