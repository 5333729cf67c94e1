use std::time::Duration;

use ninja_puzzles_catalog::deck;
use ninja_puzzles_core::{Command, Event, GameKind, LevelIndex, Phase};
use ninja_puzzles_system_choice::{shuffle_seed, shuffled, ChoiceInput, ChoicePanel};
use ninja_puzzles_world::{self as world, query, World};

const SEED: u64 = 0x5eed_cafe;

struct Harness {
    world: World,
    panel: ChoicePanel,
    events: Vec<Event>,
}

impl Harness {
    fn new(game: GameKind) -> Self {
        let world = World::new(deck(game).expect("standard deck"))
            .with_success_delay(Duration::ZERO);
        Self {
            world,
            panel: ChoicePanel::new(game, SEED),
            events: Vec::new(),
        }
    }

    fn apply(&mut self, command: Command) {
        let mut events = Vec::new();
        world::apply(&mut self.world, command, &mut events);
        self.step(&events, ChoiceInput::default());
        self.events.extend(events);
    }

    fn step(&mut self, events: &[Event], input: ChoiceInput) {
        let puzzle = query::current_level(&self.world).map(|level| &level.puzzle);
        let mut commands = Vec::new();
        self.panel.handle(events, puzzle, input, &mut commands);
        for command in commands {
            self.apply(command);
        }
    }

    fn choose(&mut self, index: usize) {
        self.step(
            &[],
            ChoiceInput {
                select: Some(index),
                submit: true,
            },
        );
    }

    fn correct_position(&self) -> usize {
        let correct = query::current_level(&self.world)
            .and_then(|level| level.puzzle.correct_choice())
            .expect("multiple choice level");
        self.panel
            .choices()
            .iter()
            .position(|choice| choice == correct)
            .expect("correct choice is dealt")
    }
}

#[test]
fn selecting_correct_rule_solves_every_level() {
    for game in [GameKind::PatternMatcher, GameKind::StorySolver] {
        let mut harness = Harness::new(game);
        harness.apply(Command::StartGame);

        while query::phase(&harness.world) != Phase::Victory {
            if query::phase(&harness.world) == Phase::Dialog {
                harness.apply(Command::AcknowledgeTutorial);
            }
            let index = harness.correct_position();
            harness.choose(index);
        }

        assert_eq!(query::session(&harness.world).stars, 18, "{game:?}");
    }
}

#[test]
fn every_other_choice_is_rejected() {
    let mut harness = Harness::new(GameKind::PatternMatcher);
    harness.apply(Command::StartGame);
    harness.apply(Command::AcknowledgeTutorial);

    let correct = harness.correct_position();
    let wrong: Vec<usize> = (0..harness.panel.choices().len())
        .filter(|&index| index != correct)
        .collect();
    assert_eq!(wrong.len(), 3);

    for index in wrong {
        harness.choose(index);
    }

    let session = query::session(&harness.world);
    assert_eq!(session.attempts, 3);
    assert_eq!(session.level, LevelIndex::new(0));

    harness.choose(correct);
    assert_eq!(query::session(&harness.world).stars, 1);
}

#[test]
fn dealt_order_matches_seeded_shuffle() {
    let mut harness = Harness::new(GameKind::StorySolver);
    harness.apply(Command::StartGame);
    harness.apply(Command::AcknowledgeTutorial);

    let choices = query::current_level(&harness.world)
        .and_then(|level| level.puzzle.choices())
        .expect("multiple choice level");
    let expected = shuffled(
        choices,
        shuffle_seed(SEED, GameKind::StorySolver, LevelIndex::new(0)),
    );

    assert_eq!(harness.panel.choices(), expected.as_slice());
}

#[test]
fn restart_clears_the_dealt_choices() {
    let mut harness = Harness::new(GameKind::StorySolver);
    harness.apply(Command::StartGame);
    harness.apply(Command::AcknowledgeTutorial);
    assert!(!harness.panel.choices().is_empty());

    harness.apply(Command::Restart);

    assert!(harness.panel.choices().is_empty());
    assert!(harness
        .events
        .iter()
        .any(|event| matches!(event, Event::SessionReset)));
}
