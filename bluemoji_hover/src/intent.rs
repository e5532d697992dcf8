// Copyright 2025 the Bluemoji Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover-intent stage machine: a pure transition function with effects as data.
//!
//! ## Stages
//!
//! | Stage | Meaning | Effect while active |
//! |---|---|---|
//! | [`Stage::Hidden`] | card not shown, no pending decision | none |
//! | [`Stage::MightShow`] | hovering began; waiting out the show delay | [`SHOW_DELAY`] timer |
//! | [`Stage::Showing`] | card is visible and stable | scroll watch |
//! | [`Stage::MightHide`] | hover left; waiting out the hide delay | [`HIDE_DELAY`] timer |
//! | [`Stage::Hiding`] | card is animating out | [`HIDE_DURATION`] timer |
//!
//! At most one stage is active at a time, and each stage carries at most one
//! effect. The host installs the entered stage's effect and cancels the
//! previous one on every transition; a transition that leaks a timer or
//! listener is a correctness bug in the host, not in the machine.
//!
//! ## Grace periods
//!
//! `MightShow` keeps short accidental passes over the anchor from flashing
//! the card. `MightHide` is the debounce that lets the pointer travel from
//! the anchor onto the card itself: re-entering either surface before the
//! hide delay fires returns to `Showing` without the card ever unmounting.
//!
//! ## Scroll asymmetry
//!
//! While `Showing`, a page scroll dismisses the card instantly — but only
//! when the hover reason is the anchor. Scrolling moves the anchor out from
//! under a stationary pointer, so the hover is stale. When the pointer is on
//! the card itself the user is interacting with the card content, and the
//! scroll is ignored.

use core::time::Duration;

/// Delay between hover-start and the card becoming visible.
pub const SHOW_DELAY: Duration = Duration::from_millis(500);

/// Duration of the fade-in animation once the card mounts.
pub const SHOW_DURATION: Duration = Duration::from_millis(300);

/// Delay between hover-end and the card starting to hide.
pub const HIDE_DELAY: Duration = Duration::from_millis(150);

/// Duration of the fade-out animation; `Hiding` lasts exactly this long.
pub const HIDE_DURATION: Duration = Duration::from_millis(200);

/// Which surface the pointer was on when interest began or resumed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Reason {
    /// The inline anchor element.
    Target,
    /// The floating card itself.
    Card,
}

/// Current stage of the hover-intent machine.
///
/// Exactly one stage is active per anchor/card pair. The machine starts in
/// [`Stage::Hidden`] and always settles back there.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Stage {
    /// Card not shown, no pending decision.
    Hidden,
    /// Hovering began; waiting out the show delay before committing.
    MightShow {
        /// Surface that triggered the hover.
        reason: Reason,
    },
    /// Card is visible and stable.
    Showing {
        /// Surface the pointer is resting on.
        reason: Reason,
    },
    /// Hover left; waiting out the hide delay before committing to hide.
    MightHide,
    /// Card is animating out; terminal until the animation completes.
    Hiding,
}

/// Discrete interaction actions consumed by [`next`].
///
/// Actions are produced by the controller from device events, except for
/// [`Action::HoveredLongEnough`], [`Action::UnhoveredLongEnough`], and
/// [`Action::FinishedAnimatingHide`], which the active effect emits when its
/// timer fires, and [`Action::ScrolledWhileShowing`], emitted by the scroll
/// watch.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// Press (mouse-up) on the anchor or the card; dismisses unconditionally.
    Pressed,
    /// First pointer movement over the anchor since the last leave.
    HoveredTarget,
    /// Pointer left the anchor.
    UnhoveredTarget,
    /// Pointer entered the floating card.
    HoveredCard,
    /// Pointer left the floating card.
    UnhoveredCard,
    /// The show-delay timer fired.
    HoveredLongEnough,
    /// The hide-delay timer fired.
    UnhoveredLongEnough,
    /// The page scrolled while the card was showing.
    ScrolledWhileShowing,
    /// The hide animation timer fired.
    FinishedAnimatingHide,
}

/// A deferred side effect described by a stage.
///
/// The machine never executes these. The host installs the effect of the
/// entered stage, and when it fires, feeds `emits` back through [`next`].
/// Cancelling an effect that never fires is a normal no-op.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Run a one-shot timer for `wait`, then emit `emits`.
    Delay {
        /// How long to wait before emitting.
        wait: Duration,
        /// Action fed back into the machine when the timer fires.
        emits: Action,
    },
    /// Watch page scroll; emit `emits` on each scroll while installed.
    WatchScroll {
        /// Action fed back into the machine on scroll.
        emits: Action,
    },
}

impl Stage {
    /// The effect to install while this stage is active, if any.
    #[must_use]
    pub const fn effect(self) -> Option<Effect> {
        match self {
            Self::Hidden => None,
            Self::MightShow { .. } => Some(Effect::Delay {
                wait: SHOW_DELAY,
                emits: Action::HoveredLongEnough,
            }),
            Self::Showing { .. } => Some(Effect::WatchScroll {
                emits: Action::ScrolledWhileShowing,
            }),
            Self::MightHide => Some(Effect::Delay {
                wait: HIDE_DELAY,
                emits: Action::UnhoveredLongEnough,
            }),
            Self::Hiding => Some(Effect::Delay {
                wait: HIDE_DURATION,
                emits: Action::FinishedAnimatingHide,
            }),
        }
    }

    /// Whether the card is mounted/rendered in this stage.
    ///
    /// `MightShow` does not render: nothing is shown until the show delay
    /// elapses.
    #[must_use]
    pub const fn is_mounted(self) -> bool {
        matches!(self, Self::Showing { .. } | Self::MightHide | Self::Hiding)
    }
}

/// Compute the next stage for an action.
///
/// Total over all `(stage, action)` pairs: unhandled actions return the
/// stage unchanged, which is a no-op rather than an error. The function is
/// pure; wall-clock time only enters the system through effects feeding
/// their `emits` action back in.
#[must_use]
pub fn next(stage: Stage, action: Action) -> Stage {
    // Pressing always dismisses, no matter the stage.
    if matches!(action, Action::Pressed) {
        return Stage::Hidden;
    }

    match stage {
        Stage::Hidden => match action {
            Action::HoveredTarget => Stage::MightShow {
                reason: Reason::Target,
            },
            _ => stage,
        },
        Stage::MightShow { reason } => match action {
            Action::UnhoveredTarget | Action::UnhoveredCard => Stage::Hidden,
            Action::HoveredLongEnough => Stage::Showing { reason },
            _ => stage,
        },
        Stage::Showing { reason } => match action {
            Action::UnhoveredTarget | Action::UnhoveredCard => Stage::MightHide,
            // Scrolling away while hovering the anchor hides instantly; a
            // scroll while the pointer is on the card does not.
            Action::ScrolledWhileShowing if matches!(reason, Reason::Target) => Stage::Hiding,
            _ => stage,
        },
        Stage::MightHide => match action {
            // Re-entry cancels the pending hide.
            Action::HoveredTarget => Stage::Showing {
                reason: Reason::Target,
            },
            Action::HoveredCard => Stage::Showing {
                reason: Reason::Card,
            },
            Action::UnhoveredLongEnough => Stage::Hiding,
            _ => stage,
        },
        Stage::Hiding => match action {
            // While hiding, nothing else may interrupt the exit animation.
            Action::FinishedAnimatingHide => Stage::Hidden,
            _ => stage,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_STAGES: [Stage; 7] = [
        Stage::Hidden,
        Stage::MightShow {
            reason: Reason::Target,
        },
        Stage::MightShow {
            reason: Reason::Card,
        },
        Stage::Showing {
            reason: Reason::Target,
        },
        Stage::Showing {
            reason: Reason::Card,
        },
        Stage::MightHide,
        Stage::Hiding,
    ];

    const ALL_ACTIONS: [Action; 9] = [
        Action::Pressed,
        Action::HoveredTarget,
        Action::UnhoveredTarget,
        Action::HoveredCard,
        Action::UnhoveredCard,
        Action::HoveredLongEnough,
        Action::UnhoveredLongEnough,
        Action::ScrolledWhileShowing,
        Action::FinishedAnimatingHide,
    ];

    #[test]
    fn next_is_total() {
        for stage in ALL_STAGES {
            for action in ALL_ACTIONS {
                // Every pair must produce a defined stage without panicking.
                let _ = next(stage, action);
            }
        }
    }

    #[test]
    fn pressed_hides_from_every_stage() {
        for stage in ALL_STAGES {
            let out = next(stage, Action::Pressed);
            assert_eq!(out, Stage::Hidden, "pressed must hide from {stage:?}");
            assert_eq!(out.effect(), None, "hidden must carry no effect");
        }
    }

    #[test]
    fn hover_target_starts_show_countdown() {
        assert_eq!(
            next(Stage::Hidden, Action::HoveredTarget),
            Stage::MightShow {
                reason: Reason::Target
            }
        );
    }

    #[test]
    fn hidden_ignores_everything_but_hover_target() {
        for action in ALL_ACTIONS {
            if matches!(action, Action::HoveredTarget) {
                continue;
            }
            assert_eq!(
                next(Stage::Hidden, action),
                Stage::Hidden,
                "hidden must ignore {action:?}"
            );
        }
    }

    #[test]
    fn unhover_before_delay_aborts_show() {
        let stage = next(Stage::Hidden, Action::HoveredTarget);
        assert!(!stage.is_mounted(), "nothing is shown during the delay");
        assert_eq!(next(stage, Action::UnhoveredTarget), Stage::Hidden);
        assert_eq!(next(stage, Action::UnhoveredCard), Stage::Hidden);
    }

    #[test]
    fn delay_elapsing_shows_with_original_reason() {
        let stage = Stage::MightShow {
            reason: Reason::Card,
        };
        assert_eq!(
            next(stage, Action::HoveredLongEnough),
            Stage::Showing {
                reason: Reason::Card
            }
        );
    }

    #[test]
    fn unhover_while_showing_starts_hide_countdown() {
        for reason in [Reason::Target, Reason::Card] {
            let showing = Stage::Showing { reason };
            assert_eq!(next(showing, Action::UnhoveredTarget), Stage::MightHide);
            assert_eq!(next(showing, Action::UnhoveredCard), Stage::MightHide);
        }
    }

    #[test]
    fn scroll_hides_only_when_hovering_target() {
        assert_eq!(
            next(
                Stage::Showing {
                    reason: Reason::Target
                },
                Action::ScrolledWhileShowing
            ),
            Stage::Hiding
        );
        assert_eq!(
            next(
                Stage::Showing {
                    reason: Reason::Card
                },
                Action::ScrolledWhileShowing
            ),
            Stage::Showing {
                reason: Reason::Card
            }
        );
    }

    #[test]
    fn reentry_cancels_pending_hide() {
        assert_eq!(
            next(Stage::MightHide, Action::HoveredTarget),
            Stage::Showing {
                reason: Reason::Target
            }
        );
        assert_eq!(
            next(Stage::MightHide, Action::HoveredCard),
            Stage::Showing {
                reason: Reason::Card
            }
        );
    }

    #[test]
    fn hide_delay_elapsing_starts_animation() {
        assert_eq!(next(Stage::MightHide, Action::UnhoveredLongEnough), Stage::Hiding);
    }

    #[test]
    fn hiding_is_uninterruptible_until_animation_ends() {
        for action in ALL_ACTIONS {
            let expected = match action {
                Action::Pressed | Action::FinishedAnimatingHide => Stage::Hidden,
                _ => Stage::Hiding,
            };
            assert_eq!(
                next(Stage::Hiding, action),
                expected,
                "hiding must ignore {action:?}"
            );
        }
    }

    #[test]
    fn debounce_keeps_card_mounted_across_surface_change() {
        // Pointer travels from the anchor onto the card: showing → might-hide
        // → showing, mounted the whole way.
        let mut stage = Stage::Showing {
            reason: Reason::Target,
        };
        stage = next(stage, Action::UnhoveredTarget);
        assert_eq!(stage, Stage::MightHide);
        assert!(stage.is_mounted(), "card must not unmount during the grace period");
        stage = next(stage, Action::HoveredCard);
        assert_eq!(
            stage,
            Stage::Showing {
                reason: Reason::Card
            }
        );
        assert!(stage.is_mounted(), "card stays mounted after re-entry");
    }

    #[test]
    fn mounted_stages_are_exactly_showing_might_hide_hiding() {
        for stage in ALL_STAGES {
            let expected = matches!(
                stage,
                Stage::Showing { .. } | Stage::MightHide | Stage::Hiding
            );
            assert_eq!(stage.is_mounted(), expected, "mount derivation for {stage:?}");
        }
    }

    #[test]
    fn each_stage_describes_its_effect() {
        assert_eq!(Stage::Hidden.effect(), None);
        assert_eq!(
            Stage::MightShow {
                reason: Reason::Target
            }
            .effect(),
            Some(Effect::Delay {
                wait: SHOW_DELAY,
                emits: Action::HoveredLongEnough
            })
        );
        assert_eq!(
            Stage::Showing {
                reason: Reason::Card
            }
            .effect(),
            Some(Effect::WatchScroll {
                emits: Action::ScrolledWhileShowing
            })
        );
        assert_eq!(
            Stage::MightHide.effect(),
            Some(Effect::Delay {
                wait: HIDE_DELAY,
                emits: Action::UnhoveredLongEnough
            })
        );
        assert_eq!(
            Stage::Hiding.effect(),
            Some(Effect::Delay {
                wait: HIDE_DURATION,
                emits: Action::FinishedAnimatingHide
            })
        );
    }

    #[test]
    fn timing_constants_match_the_production_values() {
        assert_eq!(SHOW_DELAY.as_millis(), 500);
        assert_eq!(SHOW_DURATION.as_millis(), 300);
        assert_eq!(HIDE_DELAY.as_millis(), 150);
        assert_eq!(HIDE_DURATION.as_millis(), 200);
    }

    #[test]
    fn double_leave_is_harmless() {
        // Two leave events in a row must not get the machine stuck.
        let stage = next(Stage::MightHide, Action::UnhoveredTarget);
        assert_eq!(stage, Stage::MightHide);
        let stage = next(stage, Action::UnhoveredCard);
        assert_eq!(stage, Stage::MightHide);
    }
}
