// Copyright 2025 the Bluemoji Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=bluemoji_hover --heading-base-level=0

//! Bluemoji Hover: hover-intent tracking for floating emoji cards.
//!
//! This crate decides *when* an informational card attached to an inline
//! emoji should show and hide, based on a noisy stream of pointer, scroll,
//! and press events plus two independent delay timers. It contains:
//!
//! - [`intent`]: the hover-intent stage machine — a pure transition function
//!   over five stages, with each stage's timer/listener expressed as data.
//! - [`latch`]: a per-anchor latch that turns raw pointer movement into a
//!   single hover-start, ignoring enter events caused by scroll reflow.
//!
//! ## Design Philosophy
//!
//! The machine itself never touches a timer or an event listener. Every
//! stage that waits describes its waiting as an [`Effect`](intent::Effect)
//! value: which delay to run (or which listener to watch) and which
//! [`Action`](intent::Action) to feed back when it fires. A host controller
//! owns the real timers, installs the effect of each newly entered stage,
//! and tears down the previous one on every transition. This keeps the
//! machine deterministic and unit-testable without fake clocks.
//!
//! Every `(stage, action)` pair is defined; unhandled actions return the
//! stage unchanged. A hover surface must never get stuck or panic on an
//! unexpected event ordering (two leaves in a row, a leave before the
//! matching enter), so there is no error state to reach.
//!
//! ## Minimal example
//!
//! ```rust
//! use bluemoji_hover::intent::{next, Action, Reason, Stage};
//!
//! // Hovering the anchor starts a show-delay countdown.
//! let stage = next(Stage::Hidden, Action::HoveredTarget);
//! assert_eq!(stage, Stage::MightShow { reason: Reason::Target });
//!
//! // The card is not mounted until the delay elapses.
//! assert!(!stage.is_mounted());
//!
//! // When the host's timer fires it feeds the described action back in.
//! let stage = next(stage, Action::HoveredLongEnough);
//! assert_eq!(stage, Stage::Showing { reason: Reason::Target });
//! assert!(stage.is_mounted());
//! ```
//!
//! ## Integration
//!
//! Pair this crate with a controller that maps device events to actions and
//! executes effects (see `bluemoji_card`), and with `bluemoji_float` for
//! positioning the card once it is mounted. Touch-primary devices have no
//! hover concept at all; hosts are expected to skip the machine entirely
//! there rather than synthesize actions for it.
//!
//! This crate is `no_std` compatible.

#![no_std]

pub mod intent;
pub mod latch;
