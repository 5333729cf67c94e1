#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative session state management for Ninja Puzzles.
//!
//! The world owns a single playthrough of one game: the validated [`Deck`], the
//! current [`SessionSnapshot`] and at most one deferred level advance. Every
//! mutation goes through [`apply`], which reports its effects as events.

use std::time::Duration;

use ninja_puzzles_catalog::Deck;
use ninja_puzzles_core::{
    stars_for_attempts, Command, Event, LevelIndex, Phase, SessionSnapshot, TransitionError,
    TutorialIndex, Verdict, WELCOME_BANNER,
};
use thiserror::Error;
use tracing::{debug, info};

/// Level advance queued behind the success delay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingAdvance {
    level: LevelIndex,
    remaining: Duration,
}

impl PendingAdvance {
    /// Level whose completion scheduled the advance.
    #[must_use]
    pub const fn level(&self) -> LevelIndex {
        self.level
    }

    /// Time left before the advance applies.
    #[must_use]
    pub const fn remaining(&self) -> Duration {
        self.remaining
    }
}

/// Reasons a snapshot cannot be restored against a deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum RestoreError {
    /// The snapshot points past the deck's last level.
    #[error("level {} does not exist in a deck of {levels} levels", level.get())]
    LevelOutOfRange {
        /// Level recorded in the snapshot.
        level: LevelIndex,
        /// Number of levels in the deck.
        levels: usize,
    },
    /// The snapshot points past the deck's last tutorial.
    #[error("tutorial {} does not exist in a deck of {tutorials} tutorials", tutorial.get())]
    TutorialOutOfRange {
        /// Tutorial recorded in the snapshot.
        tutorial: TutorialIndex,
        /// Number of tutorials in the deck.
        tutorials: usize,
    },
    /// The snapshot holds more stars than the deck can award.
    #[error("{stars} stars exceed the maximum of {max}")]
    TooManyStars {
        /// Stars recorded in the snapshot.
        stars: u32,
        /// Highest total the deck allows.
        max: u32,
    },
}

/// Represents the authoritative Ninja Puzzles session state.
#[derive(Debug)]
pub struct World {
    banner: &'static str,
    deck: Deck,
    session: SessionSnapshot,
    pending: Option<PendingAdvance>,
    success_delay: Duration,
}

impl World {
    /// Creates a world on the welcome screen using the game's success delay.
    #[must_use]
    pub fn new(deck: Deck) -> Self {
        let success_delay = deck.game().success_delay();
        Self {
            banner: WELCOME_BANNER,
            deck,
            session: SessionSnapshot::fresh(),
            pending: None,
            success_delay,
        }
    }

    /// Overrides the pause between a correct submission and the level advance.
    #[must_use]
    pub fn with_success_delay(mut self, delay: Duration) -> Self {
        self.success_delay = delay;
        self
    }

    /// Recreates a world from a previously exported snapshot.
    pub fn restore(deck: Deck, snapshot: &SessionSnapshot) -> Result<Self, RestoreError> {
        if deck.level(snapshot.level).is_none() {
            return Err(RestoreError::LevelOutOfRange {
                level: snapshot.level,
                levels: deck.level_count(),
            });
        }
        if deck.tutorial(snapshot.tutorial).is_none() {
            return Err(RestoreError::TutorialOutOfRange {
                tutorial: snapshot.tutorial,
                tutorials: deck.tutorials().len(),
            });
        }
        if snapshot.stars > deck.max_stars() {
            return Err(RestoreError::TooManyStars {
                stars: snapshot.stars,
                max: deck.max_stars(),
            });
        }

        let mut world = Self::new(deck);
        world.session = *snapshot;
        debug!(phase = ?snapshot.phase, level = snapshot.level.get(), "restored session");
        Ok(world)
    }

    fn require_phase(&self, expected: Phase) -> Result<(), TransitionError> {
        if self.session.phase == expected {
            Ok(())
        } else {
            Err(TransitionError::InvalidPhase {
                expected,
                actual: self.session.phase,
            })
        }
    }

    fn set_phase(&mut self, to: Phase, out_events: &mut Vec<Event>) {
        let from = self.session.phase;
        if from == to {
            return;
        }
        self.session.phase = to;
        debug!(?from, ?to, "phase changed");
        out_events.push(Event::PhaseChanged { from, to });
    }

    fn start_game(&mut self, out_events: &mut Vec<Event>) -> Result<(), TransitionError> {
        self.require_phase(Phase::Welcome)?;

        let tutorial = self.deck.trigger().opening();
        self.session = SessionSnapshot {
            tutorial,
            ..SessionSnapshot::fresh()
        };
        self.set_phase(Phase::Dialog, out_events);
        out_events.push(Event::TutorialShown { tutorial });
        Ok(())
    }

    fn acknowledge_tutorial(&mut self, out_events: &mut Vec<Event>) -> Result<(), TransitionError> {
        self.require_phase(Phase::Dialog)?;

        self.set_phase(Phase::Playing, out_events);
        out_events.push(Event::LevelStarted {
            level: self.session.level,
        });
        Ok(())
    }

    fn resolve_submission(
        &mut self,
        level: LevelIndex,
        verdict: Verdict,
        out_events: &mut Vec<Event>,
    ) -> Result<(), TransitionError> {
        self.require_phase(Phase::Playing)?;
        if let Some(pending) = self.pending {
            return Err(TransitionError::AdvancePending {
                level: pending.level,
            });
        }
        if level != self.session.level {
            return Err(TransitionError::LevelMismatch {
                expected: self.session.level,
                received: level,
            });
        }

        match verdict {
            Verdict::Incorrect => {
                self.session.attempts = self.session.attempts.saturating_add(1);
                debug!(
                    level = level.get(),
                    attempts = self.session.attempts,
                    "submission rejected"
                );
                out_events.push(Event::SubmissionRejected {
                    level,
                    attempts: self.session.attempts,
                });
            }
            Verdict::Correct => {
                let stars_awarded = stars_for_attempts(self.session.attempts);
                self.session.stars = self.session.stars.saturating_add(stars_awarded);
                debug!(level = level.get(), stars_awarded, "submission accepted");
                out_events.push(Event::SubmissionAccepted {
                    level,
                    stars_awarded,
                    total_stars: self.session.stars,
                });

                let pending = PendingAdvance {
                    level,
                    remaining: self.success_delay,
                };
                out_events.push(Event::AdvanceScheduled {
                    level,
                    delay: pending.remaining,
                });
                if pending.remaining.is_zero() {
                    self.fire_advance(pending, out_events);
                } else {
                    self.pending = Some(pending);
                }
            }
        }
        Ok(())
    }

    fn advance_clock(&mut self, dt: Duration, out_events: &mut Vec<Event>) {
        out_events.push(Event::TimeAdvanced { dt });

        let Some(mut pending) = self.pending.take() else {
            return;
        };
        pending.remaining = pending.remaining.saturating_sub(dt);
        if pending.remaining.is_zero() {
            self.fire_advance(pending, out_events);
        } else {
            self.pending = Some(pending);
        }
    }

    fn fire_advance(&mut self, pending: PendingAdvance, out_events: &mut Vec<Event>) {
        if self.session.phase != Phase::Playing || self.session.level != pending.level {
            debug!(level = pending.level.get(), "discarded stale advance");
            out_events.push(Event::AdvanceDiscarded {
                level: pending.level,
            });
            return;
        }

        if pending.level >= self.deck.last_level() {
            self.set_phase(Phase::Victory, out_events);
            out_events.push(Event::GameCompleted {
                total_stars: self.session.stars,
            });
            return;
        }

        let next = pending.level.next();
        self.session.level = next;
        self.session.attempts = 0;

        match self.deck.trigger().tutorial_before(next) {
            Some(tutorial) => {
                self.session.tutorial = tutorial;
                self.set_phase(Phase::Dialog, out_events);
                out_events.push(Event::TutorialShown { tutorial });
            }
            None => out_events.push(Event::LevelStarted { level: next }),
        }
    }

    fn restart(&mut self, out_events: &mut Vec<Event>) {
        self.pending = None;
        self.set_phase(Phase::Welcome, out_events);
        self.session = SessionSnapshot::fresh();
        out_events.push(Event::SessionReset);
    }
}

/// Applies the provided command to the world, mutating state deterministically.
pub fn apply(world: &mut World, command: Command, out_events: &mut Vec<Event>) {
    let outcome = match command {
        Command::StartGame => world.start_game(out_events),
        Command::AcknowledgeTutorial => world.acknowledge_tutorial(out_events),
        Command::ResolveSubmission { level, verdict } => {
            world.resolve_submission(level, verdict, out_events)
        }
        Command::Tick { dt } => {
            world.advance_clock(dt, out_events);
            Ok(())
        }
        Command::Restart => {
            world.restart(out_events);
            Ok(())
        }
    };

    if let Err(reason) = outcome {
        info!(?reason, "command rejected");
        out_events.push(Event::CommandRejected { reason });
    }
}

/// Query functions that provide read-only access to the world state.
pub mod query {
    use std::time::Duration;

    use super::{PendingAdvance, World};
    use ninja_puzzles_catalog::Deck;
    use ninja_puzzles_core::{GameKind, Level, Phase, SessionSnapshot, Tutorial};

    /// Retrieves the welcome banner that adapters may display to players.
    #[must_use]
    pub fn welcome_banner(world: &World) -> &'static str {
        world.banner
    }

    /// Game being played.
    #[must_use]
    pub fn game(world: &World) -> GameKind {
        world.deck.game()
    }

    /// Screen the session currently presents.
    #[must_use]
    pub fn phase(world: &World) -> Phase {
        world.session.phase
    }

    /// Captures the serializable session state.
    #[must_use]
    pub fn session(world: &World) -> SessionSnapshot {
        world.session
    }

    /// Level in play, or the level the next dialog leads into.
    #[must_use]
    pub fn current_level(world: &World) -> Option<&Level> {
        world.deck.level(world.session.level)
    }

    /// Tutorial most recently selected for presentation.
    #[must_use]
    pub fn current_tutorial(world: &World) -> Option<&Tutorial> {
        world.deck.tutorial(world.session.tutorial)
    }

    /// Hint of the current level.
    #[must_use]
    pub fn hint(world: &World) -> Option<&str> {
        current_level(world).map(|level| level.hint.as_str())
    }

    /// Number of levels in the game.
    #[must_use]
    pub fn level_count(world: &World) -> usize {
        world.deck.level_count()
    }

    /// Highest star total the game can award.
    #[must_use]
    pub fn max_stars(world: &World) -> u32 {
        world.deck.max_stars()
    }

    /// Advance waiting for the success delay to elapse, if any.
    #[must_use]
    pub fn pending_advance(world: &World) -> Option<PendingAdvance> {
        world.pending
    }

    /// Pause applied between a correct submission and its advance.
    #[must_use]
    pub fn success_delay(world: &World) -> Duration {
        world.success_delay
    }

    /// Provides read-only access to the deck being played.
    #[must_use]
    pub fn deck(world: &World) -> &Deck {
        &world.deck
    }
}
