// Copyright 2025 the Bluemoji Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Event wiring and effect execution for one anchor/card pair.
//!
//! The controller translates device events into the intent action
//! vocabulary and is the single executor of the machine's described
//! effects. Hover-start on the anchor is the first *movement* since entry
//! (pointer-enter also fires on scroll-induced reflow, which must not count
//! as intent); touch-start routes through the same path so fallback hosts
//! register intent too. Leaving the anchor re-arms the latch.
//!
//! Exactly one effect ticket is live at a time. Stage changes cancel the
//! previous ticket before installing the next effect; actions that leave the
//! stage unchanged leave the live effect untouched, so re-delivering a hover
//! during `MightShow` does not restart the show-delay timer.

use core::time::Duration;

use bluemoji_hover::intent::{next, Action, Effect, Stage, HIDE_DURATION, SHOW_DURATION};
use bluemoji_hover::latch::HoverLatch;

/// Primary input mode of the hosting device, evaluated once at mount.
///
/// Touch-primary devices have no hover concept; in [`InputMode::Touch`] the
/// controller ignores every event and the card never mounts.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InputMode {
    /// A hover-capable pointer (mouse, trackpad, stylus) is primary.
    Pointer,
    /// Touch is primary.
    Touch,
}

/// Raw device events the controller understands.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CardEvent {
    /// Pointer moved over the anchor.
    TargetPointerMove,
    /// Touch began on the anchor; treated like a movement.
    TargetTouchStart,
    /// Pointer left the anchor.
    TargetPointerLeave,
    /// Mouse-up on the anchor (press; dismisses unconditionally).
    TargetMouseUp,
    /// Pointer entered the floating card.
    CardPointerEnter,
    /// Pointer left the floating card.
    CardPointerLeave,
}

/// Host seam for executing described effects.
///
/// `install` starts the real timer or scroll listener for an effect and
/// returns a ticket; `cancel` stops it. Cancelling a ticket that already
/// fired is a no-op. When an installed effect fires, the host feeds the
/// effect's `emits` action back through
/// [`HoverCardController::dispatch`].
pub trait EffectHost {
    /// Handle to one installed timer or listener.
    type Ticket;

    /// Execute a described effect, returning its ticket.
    fn install(&mut self, effect: Effect) -> Self::Ticket;

    /// Stop a previously installed effect.
    fn cancel(&mut self, ticket: Self::Ticket);
}

/// Which animation variant the mounted card plays.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CardAnimation {
    /// Fade in over [`SHOW_DURATION`].
    FadeIn,
    /// Fade out over [`HIDE_DURATION`].
    FadeOut,
}

impl CardAnimation {
    /// Duration of this variant.
    #[must_use]
    pub const fn duration(self) -> Duration {
        match self {
            Self::FadeIn => SHOW_DURATION,
            Self::FadeOut => HIDE_DURATION,
        }
    }
}

/// Controller for one anchor/card pair.
///
/// Created once per pair, reset to `Hidden` on mount, and torn down with
/// [`teardown`](Self::teardown) on unmount so no timer or listener outlives
/// the pair.
pub struct HoverCardController<H: EffectHost> {
    stage: Stage,
    latch: HoverLatch,
    ticket: Option<H::Ticket>,
    mode: InputMode,
}

impl<H: EffectHost> core::fmt::Debug for HoverCardController<H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("HoverCardController")
            .field("stage", &self.stage)
            .field("latch", &self.latch)
            .field("ticket", &self.ticket.is_some())
            .field("mode", &self.mode)
            .finish()
    }
}

impl<H: EffectHost> HoverCardController<H> {
    /// Create a controller in the given input mode.
    #[must_use]
    pub fn new(mode: InputMode) -> Self {
        Self {
            stage: Stage::Hidden,
            latch: HoverLatch::default(),
            ticket: None,
            mode,
        }
    }

    /// The input mode this controller was constructed with.
    #[must_use]
    pub fn mode(&self) -> InputMode {
        self.mode
    }

    /// Current stage of the hover-intent machine.
    #[must_use]
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Whether the card is currently mounted/rendered.
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.stage.is_mounted()
    }

    /// The animation variant the mounted card plays, if mounted.
    ///
    /// `Hiding` plays the fade-out; every other mounted stage plays the
    /// fade-in. Returning to `Showing` from `MightHide` keeps reporting
    /// `FadeIn`, so the rendering layer does not replay the entry animation.
    #[must_use]
    pub fn animation(&self) -> Option<CardAnimation> {
        if !self.stage.is_mounted() {
            None
        } else if matches!(self.stage, Stage::Hiding) {
            Some(CardAnimation::FadeOut)
        } else {
            Some(CardAnimation::FadeIn)
        }
    }

    /// Feed a raw device event through the controller.
    pub fn on_event(&mut self, host: &mut H, event: CardEvent) {
        if matches!(self.mode, InputMode::Touch) {
            return;
        }
        match event {
            CardEvent::TargetPointerMove | CardEvent::TargetTouchStart => {
                if self.latch.arm() {
                    self.dispatch(host, Action::HoveredTarget);
                }
            }
            CardEvent::TargetPointerLeave => {
                self.latch.reset();
                self.dispatch(host, Action::UnhoveredTarget);
            }
            CardEvent::TargetMouseUp => self.dispatch(host, Action::Pressed),
            CardEvent::CardPointerEnter => self.dispatch(host, Action::HoveredCard),
            CardEvent::CardPointerLeave => self.dispatch(host, Action::UnhoveredCard),
        }
    }

    /// Apply an intent action, swapping effects on a stage change.
    ///
    /// This is also the entry point for the host when an installed effect
    /// fires. Actions that leave the stage unchanged are no-ops and keep the
    /// live effect installed.
    pub fn dispatch(&mut self, host: &mut H, action: Action) {
        if matches!(self.mode, InputMode::Touch) {
            return;
        }
        let entered = next(self.stage, action);
        if entered == self.stage {
            return;
        }
        self.stage = entered;
        if let Some(ticket) = self.ticket.take() {
            host.cancel(ticket);
        }
        self.ticket = entered.effect().map(|effect| host.install(effect));
    }

    /// Release the live effect and reset to `Hidden`.
    ///
    /// Called when the anchor/card pair unmounts; covers the pending timers
    /// of `MightShow`, `MightHide`, and `Hiding` as well as the `Showing`
    /// scroll watch.
    pub fn teardown(&mut self, host: &mut H) {
        if let Some(ticket) = self.ticket.take() {
            host.cancel(ticket);
        }
        self.stage = Stage::Hidden;
        self.latch.reset();
    }
}
