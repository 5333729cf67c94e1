use std::time::Duration;

use ninja_puzzles_catalog::deck;
use ninja_puzzles_core::{CellColor, CellCoord, Command, Event, GameKind, Grid, Phase, Verdict};
use ninja_puzzles_system_grid_painter::{GridPainter, PainterInput};
use ninja_puzzles_world::{self as world, query, World};

struct Harness {
    world: World,
    painter: GridPainter,
    events: Vec<Event>,
}

impl Harness {
    fn new() -> Self {
        let world = World::new(deck(GameKind::CodeBreaker).expect("standard deck"))
            .with_success_delay(Duration::ZERO);
        Self {
            world,
            painter: GridPainter::new(),
            events: Vec::new(),
        }
    }

    fn apply(&mut self, command: Command) {
        let mut events = Vec::new();
        world::apply(&mut self.world, command, &mut events);
        self.step(&events, PainterInput::default());
        self.events.extend(events);
    }

    fn step(&mut self, events: &[Event], input: PainterInput) {
        let puzzle = query::current_level(&self.world)
            .and_then(|level| level.puzzle.as_grid());
        let mut commands = Vec::new();
        self.painter.handle(events, puzzle, input, &mut commands);
        for command in commands {
            self.apply(command);
        }
    }

    fn input(&mut self, input: PainterInput) {
        self.step(&[], input);
    }

    fn paint_grid(&mut self, grid: &Grid) {
        for (row, cells) in (0_u32..).zip(grid.iter_rows()) {
            for (column, &color) in (0_u32..).zip(cells) {
                if color != CellColor::Empty {
                    self.input(PainterInput {
                        select_color: Some(color),
                        paint: Some(CellCoord::new(column, row)),
                        ..PainterInput::default()
                    });
                }
            }
        }
    }

    fn submit(&mut self) {
        self.input(PainterInput {
            submit: true,
            ..PainterInput::default()
        });
    }
}

#[test]
fn mirror_level_accepts_only_the_mirrored_grid() {
    let mut harness = Harness::new();
    harness.apply(Command::StartGame);
    harness.apply(Command::AcknowledgeTutorial);
    assert_eq!(harness.painter.canvas(), &Grid::blank(3, 3));

    let wrong = Grid::from_palette_rows(&[[1, 0, 0], [0, 2, 0], [0, 0, 3]])
        .expect("valid grid");
    harness.paint_grid(&wrong);
    harness.submit();
    assert_eq!(query::session(&harness.world).attempts, 1);

    harness.input(PainterInput {
        reset: true,
        ..PainterInput::default()
    });
    let solution = Grid::from_palette_rows(&[[0, 0, 1], [0, 2, 0], [3, 0, 0]])
        .expect("valid grid");
    harness.paint_grid(&solution);
    assert_eq!(harness.painter.canvas(), &solution);
    harness.submit();

    let session = query::session(&harness.world);
    assert_eq!(session.stars, 2);
    assert_eq!(session.level.get(), 1);
    assert_eq!(harness.painter.selected_color(), CellColor::Red);
    assert_eq!(harness.painter.canvas(), &Grid::blank(3, 3));
}

#[test]
fn painting_every_solution_completes_the_game() {
    let mut harness = Harness::new();
    harness.apply(Command::StartGame);

    while query::phase(&harness.world) != Phase::Victory {
        if query::phase(&harness.world) == Phase::Dialog {
            harness.apply(Command::AcknowledgeTutorial);
        }
        let solution = query::current_level(&harness.world)
            .and_then(|level| level.puzzle.as_grid())
            .map(|puzzle| puzzle.solution.clone())
            .expect("code breaker level");
        harness.paint_grid(&solution);
        harness.submit();
    }

    assert_eq!(query::session(&harness.world).stars, 18);
    let verdicts = harness
        .events
        .iter()
        .filter(|event| matches!(event, Event::SubmissionAccepted { .. }))
        .count();
    assert_eq!(verdicts, 6);
    assert!(!harness
        .events
        .iter()
        .any(|event| matches!(event, Event::SubmissionRejected { .. })));
}

#[test]
fn transformation_level_grows_canvas_to_four_by_four() {
    let mut harness = Harness::new();
    harness.apply(Command::StartGame);

    for _ in 0..4 {
        if query::phase(&harness.world) == Phase::Dialog {
            harness.apply(Command::AcknowledgeTutorial);
        }
        let level = query::session(&harness.world).level;
        harness.apply(Command::ResolveSubmission {
            level,
            verdict: Verdict::Correct,
        });
    }
    harness.apply(Command::AcknowledgeTutorial);

    assert_eq!(query::session(&harness.world).level.get(), 4);
    assert_eq!(harness.painter.canvas().dimensions(), (4, 4));
}
