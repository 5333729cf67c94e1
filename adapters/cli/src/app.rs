use std::time::Duration;

use anyhow::Context;
use ninja_puzzles_catalog::deck;
use ninja_puzzles_core::{Command, Event, GameKind, Phase, Puzzle, SessionSnapshot, TransitionError};
use ninja_puzzles_rendering::{
    Feedback, FeedbackMessages, FrameControl, FrameInput, Overlay, PlayingView, Scene, SceneBody,
    VariantView,
};
use ninja_puzzles_system_bootstrap::{Bootstrap, DeckSummary};
use ninja_puzzles_system_choice::{ChoiceInput, ChoicePanel};
use ninja_puzzles_system_grid_painter::{GridPainter, PainterInput};
use ninja_puzzles_world::{self as world, query, World};
use tracing::{debug, warn};

use crate::{
    action::{Action, HELP},
    session_transfer::SessionTransfer,
};

/// Drives the world and its systems from typed player actions.
#[derive(Debug)]
pub(crate) struct App {
    world: World,
    bootstrap: Bootstrap,
    painter: GridPainter,
    panel: ChoicePanel,
    messages: FeedbackMessages,
    seed: u64,
    successes: usize,
    failures: usize,
    feedback: Option<Feedback>,
    overlay: Option<Overlay>,
    quit: bool,
}

impl App {
    /// Starts a fresh session of `game` on the welcome screen.
    pub(crate) fn new(
        game: GameKind,
        seed: u64,
        success_delay: Option<Duration>,
    ) -> anyhow::Result<Self> {
        let deck = deck(game)
            .with_context(|| format!("failed to load the {} deck", game.label()))?;
        Ok(Self::with_world(World::new(deck), seed, success_delay))
    }

    /// Restores a session exported with the `export` action.
    pub(crate) fn resume(
        transfer: &SessionTransfer,
        success_delay: Option<Duration>,
    ) -> anyhow::Result<Self> {
        let game = transfer.game;
        let deck = deck(game)
            .with_context(|| format!("failed to load the {} deck", game.label()))?;
        let world = World::restore(deck, &transfer.session)
            .context("session code does not match the game's levels")?;

        let mut app = Self::with_world(world, transfer.seed, success_delay);
        let puzzle = query::current_level(&app.world).map(|level| &level.puzzle);
        app.painter
            .resume(&transfer.session, puzzle.and_then(Puzzle::as_grid));
        app.panel.resume(&transfer.session, puzzle);
        Ok(app)
    }

    fn with_world(world: World, seed: u64, success_delay: Option<Duration>) -> Self {
        let world = match success_delay {
            Some(delay) => world.with_success_delay(delay),
            None => world,
        };
        let game = query::game(&world);
        Self {
            world,
            bootstrap: Bootstrap,
            painter: GridPainter::new(),
            panel: ChoicePanel::new(game, seed),
            messages: FeedbackMessages::for_game(game),
            seed,
            successes: 0,
            failures: 0,
            feedback: None,
            overlay: None,
            quit: false,
        }
    }

    /// Game being played.
    pub(crate) fn game(&self) -> GameKind {
        query::game(&self.world)
    }

    /// Overview of the deck being played.
    pub(crate) fn deck_summary(&self) -> DeckSummary {
        self.bootstrap.deck_summary(&self.world)
    }

    /// Applies elapsed time and the typed line, then redraws `scene`.
    pub(crate) fn update(
        &mut self,
        dt: Duration,
        input: FrameInput,
        scene: &mut Scene,
    ) -> FrameControl {
        if !dt.is_zero() && query::pending_advance(&self.world).is_some() {
            self.apply(Command::Tick { dt });
        }
        if let Some(line) = input.line {
            self.handle_line(&line);
        }

        *scene = self.scene();
        self.control()
    }

    fn control(&self) -> FrameControl {
        if self.quit {
            return FrameControl::Exit;
        }
        query::pending_advance(&self.world).map_or(FrameControl::AwaitInput, |pending| {
            FrameControl::WakeAfter(pending.remaining())
        })
    }

    fn handle_line(&mut self, line: &str) {
        let action = match line.parse::<Action>() {
            Ok(action) => action,
            Err(error) => {
                debug!(%error, line, "ignored input");
                self.overlay = Some(Overlay::Notice(error.to_string()));
                return;
            }
        };

        if self.overlay == Some(Overlay::ExitConfirmation) {
            match action {
                Action::Yes => {
                    self.overlay = None;
                    self.apply(Command::Restart);
                }
                Action::No => self.overlay = None,
                Action::Quit => self.quit = true,
                _ => {}
            }
            return;
        }

        self.overlay = None;
        self.feedback = None;

        match action {
            Action::Start => self.apply(Command::StartGame),
            Action::Continue => self.apply(Command::AcknowledgeTutorial),
            Action::Color(color) => self.paint(PainterInput {
                select_color: Some(color),
                ..PainterInput::default()
            }),
            Action::Paint(cell) => self.paint(PainterInput {
                paint: Some(cell),
                ..PainterInput::default()
            }),
            Action::Reset => self.paint(PainterInput {
                reset: true,
                ..PainterInput::default()
            }),
            Action::Select(index) => self.choose(ChoiceInput {
                select: Some(index),
                submit: false,
            }),
            Action::Submit => self.submit(),
            Action::Hint => self.hint(),
            Action::Wait => {
                if let Some(pending) = query::pending_advance(&self.world) {
                    self.apply(Command::Tick {
                        dt: pending.remaining(),
                    });
                }
            }
            Action::Export => self.overlay = Some(self.export()),
            Action::Exit => self.overlay = Some(Overlay::ExitConfirmation),
            Action::Yes | Action::No => self.notice("There is nothing to confirm."),
            Action::Restart => self.apply(Command::Restart),
            Action::Help => self.notice(HELP),
            Action::Quit => self.quit = true,
        }
    }

    fn uses_grid(&self) -> bool {
        self.game() == GameKind::CodeBreaker
    }

    fn require_play(&mut self, grid: bool) -> bool {
        if query::phase(&self.world) != Phase::Playing {
            self.notice("That action is only available during a level.");
            return false;
        }
        if grid != self.uses_grid() {
            self.notice(if grid {
                "This game has no canvas. Use 'select <n>' and 'submit'."
            } else {
                "This game has no answer list. Paint the canvas and 'submit'."
            });
            return false;
        }
        true
    }

    fn paint(&mut self, input: PainterInput) {
        if self.require_play(true) {
            self.step(&[], input, ChoiceInput::default());
        }
    }

    fn choose(&mut self, input: ChoiceInput) {
        if !self.require_play(false) {
            return;
        }
        if input.select.is_some_and(|index| index >= self.panel.choices().len()) {
            self.notice("There is no answer with that number.");
            return;
        }
        self.step(&[], PainterInput::default(), input);
    }

    fn submit(&mut self) {
        if self.uses_grid() {
            self.paint(PainterInput {
                submit: true,
                ..PainterInput::default()
            });
        } else if self.panel.selected().is_none() && query::phase(&self.world) == Phase::Playing {
            self.notice("Pick an answer with 'select <n>' first.");
        } else {
            self.choose(ChoiceInput {
                select: None,
                submit: true,
            });
        }
    }

    fn hint(&mut self) {
        if query::phase(&self.world) != Phase::Playing {
            self.notice("Hints are available during a level.");
            return;
        }
        self.overlay = query::hint(&self.world)
            .map(|hint| Overlay::Hint(hint.to_owned()));
    }

    fn export(&self) -> Overlay {
        if query::pending_advance(&self.world).is_some() {
            return Overlay::Notice("Wait for the next level before exporting.".to_owned());
        }
        let transfer = SessionTransfer {
            game: self.game(),
            seed: self.seed,
            session: query::session(&self.world),
        };
        match transfer.encode() {
            Ok(code) => Overlay::Notice(format!("Resume later with: --resume {code}")),
            Err(error) => {
                warn!(%error, "failed to export session");
                Overlay::Notice(format!("Could not export the session: {error}"))
            }
        }
    }

    fn notice(&mut self, message: &str) {
        self.overlay = Some(Overlay::Notice(message.to_owned()));
    }

    fn apply(&mut self, command: Command) {
        let mut events = Vec::new();
        world::apply(&mut self.world, command, &mut events);
        self.observe(&events);
        self.step(&events, PainterInput::default(), ChoiceInput::default());
    }

    fn step(&mut self, events: &[Event], painter_input: PainterInput, choice_input: ChoiceInput) {
        let puzzle = query::current_level(&self.world).map(|level| &level.puzzle);
        let mut commands = Vec::new();
        self.painter.handle(
            events,
            puzzle.and_then(Puzzle::as_grid),
            painter_input,
            &mut commands,
        );
        self.panel
            .handle(events, puzzle, choice_input, &mut commands);

        for command in commands {
            self.apply(command);
        }
    }

    // Feedback raised by a submission survives an advance in the same batch.
    fn observe(&mut self, events: &[Event]) {
        let solved_now = events
            .iter()
            .any(|event| matches!(event, Event::SubmissionAccepted { .. }));

        for event in events {
            match event {
                Event::SubmissionAccepted { .. } => {
                    self.feedback = Some(self.messages.success(self.successes));
                    self.successes += 1;
                }
                Event::SubmissionRejected { .. } => {
                    self.feedback = Some(self.messages.failure(self.failures));
                    self.failures += 1;
                }
                Event::LevelStarted { .. } | Event::TutorialShown { .. } if !solved_now => {
                    self.feedback = None;
                }
                Event::GameCompleted { .. }
                | Event::AdvanceDiscarded { .. }
                | Event::SessionReset => self.feedback = None,
                Event::CommandRejected { reason } => {
                    self.overlay = Some(Overlay::Notice(describe_rejection(reason)));
                }
                _ => {}
            }
        }
    }

    /// Describes the current session as a scene.
    pub(crate) fn scene(&self) -> Scene {
        let session = query::session(&self.world);
        let mut scene = Scene::new(
            self.game(),
            session.stars,
            query::max_stars(&self.world),
            self.body(&session),
        );
        scene.feedback = self.feedback;
        scene.overlay = self.overlay.clone();
        scene
    }

    fn body(&self, session: &SessionSnapshot) -> SceneBody {
        let welcome = || SceneBody::Welcome {
            banner: self.bootstrap.welcome_banner(&self.world).to_owned(),
            tagline: self.game().description(),
        };

        match session.phase {
            Phase::Welcome => welcome(),
            Phase::Dialog => query::current_tutorial(&self.world)
                .cloned()
                .map_or_else(welcome, SceneBody::Dialog),
            Phase::Playing => self
                .playing_view(session)
                .map_or_else(welcome, SceneBody::Playing),
            Phase::Victory => SceneBody::Victory {
                message: self.messages.victory(),
            },
        }
    }

    fn playing_view(&self, session: &SessionSnapshot) -> Option<PlayingView> {
        let level = query::current_level(&self.world)?;
        let variant = match &level.puzzle {
            Puzzle::Grid(puzzle) => VariantView::Grid {
                input: puzzle.input.clone(),
                canvas: self.painter.canvas().clone(),
                selected: self.painter.selected_color(),
            },
            Puzzle::Classification(puzzle) => {
                VariantView::classification(puzzle, self.panel.choices(), self.panel.selected())
            }
            Puzzle::Referent(puzzle) => {
                VariantView::referent(puzzle, self.panel.choices(), self.panel.selected())
            }
        };

        Some(PlayingView {
            level_number: session.level.get() + 1,
            level_count: query::level_count(&self.world),
            level_name: level.name.clone(),
            attempts: session.attempts,
            variant,
        })
    }
}

fn describe_rejection(reason: &TransitionError) -> String {
    match reason {
        TransitionError::InvalidPhase { expected, .. } => {
            let screen = match expected {
                Phase::Welcome => "the welcome screen",
                Phase::Dialog => "a tutorial",
                Phase::Playing => "a level",
                Phase::Victory => "the victory screen",
            };
            format!("That action is only available on {screen}.")
        }
        TransitionError::LevelMismatch { .. } => "That answer was for another level.".to_owned(),
        TransitionError::AdvancePending { .. } => {
            "Level solved! The next one is on its way.".to_owned()
        }
    }
}
