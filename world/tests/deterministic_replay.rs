use std::time::Duration;

use ninja_puzzles_catalog::deck;
use ninja_puzzles_core::{
    Command, Event, GameKind, LevelIndex, Phase, SessionSnapshot, TutorialIndex, Verdict,
};
use ninja_puzzles_world::{self as world, query, World};

#[test]
fn deterministic_replay_produces_expected_snapshot() {
    let first = replay(scripted_commands());
    let second = replay(scripted_commands());

    assert_eq!(first, second, "replay diverged between runs");
    assert_eq!(
        first.checkpoint,
        SessionSnapshot {
            phase: Phase::Playing,
            level: LevelIndex::new(3),
            tutorial: TutorialIndex::new(1),
            stars: 9,
            attempts: 0,
        }
    );
    assert_eq!(first.last, SessionSnapshot::fresh());
}

#[test]
fn replay_emits_one_tutorial_per_dialog_entry() {
    let outcome = replay(scripted_commands());
    let tutorials: Vec<TutorialIndex> = outcome
        .events
        .iter()
        .filter_map(|event| match event {
            Event::TutorialShown { tutorial } => Some(*tutorial),
            _ => None,
        })
        .collect();

    assert_eq!(tutorials, vec![TutorialIndex::new(0), TutorialIndex::new(1)]);
    assert!(!outcome
        .events
        .iter()
        .any(|event| matches!(event, Event::CommandRejected { .. })));
}

#[derive(Debug, PartialEq, Eq)]
struct ReplayOutcome {
    checkpoint: SessionSnapshot,
    last: SessionSnapshot,
    events: Vec<Event>,
}

enum Step {
    Apply(Command),
    Checkpoint,
}

fn replay(steps: Vec<Step>) -> ReplayOutcome {
    let mut world = World::new(deck(GameKind::CodeBreaker).expect("standard deck"));
    let mut events = Vec::new();
    let mut checkpoint = SessionSnapshot::fresh();

    for step in steps {
        match step {
            Step::Apply(command) => world::apply(&mut world, command, &mut events),
            Step::Checkpoint => checkpoint = query::session(&world),
        }
    }

    ReplayOutcome {
        checkpoint,
        last: query::session(&world),
        events,
    }
}

fn submit(level: u32, verdict: Verdict) -> Step {
    Step::Apply(Command::ResolveSubmission {
        level: LevelIndex::new(level),
        verdict,
    })
}

fn tick(millis: u64) -> Step {
    Step::Apply(Command::Tick {
        dt: Duration::from_millis(millis),
    })
}

fn scripted_commands() -> Vec<Step> {
    vec![
        Step::Apply(Command::StartGame),
        Step::Apply(Command::AcknowledgeTutorial),
        submit(0, Verdict::Incorrect),
        submit(0, Verdict::Correct),
        tick(1_000),
        tick(500),
        submit(1, Verdict::Correct),
        tick(1_500),
        Step::Apply(Command::AcknowledgeTutorial),
        submit(2, Verdict::Incorrect),
        submit(2, Verdict::Incorrect),
        submit(2, Verdict::Correct),
        tick(2_000),
        submit(3, Verdict::Correct),
        Step::Checkpoint,
        Step::Apply(Command::Restart),
        tick(2_000),
    ]
}
