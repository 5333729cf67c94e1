#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure canvas system for Code Breaker levels.
//!
//! The painter keeps the player's working grid, applies paint strokes from
//! adapter input and judges the canvas against the level solution when the
//! player submits. Verdicts leave the system as [`Command::ResolveSubmission`].

use ninja_puzzles_core::{
    CellColor, CellCoord, Command, Event, Grid, GridPuzzle, LevelIndex, Phase, SessionSnapshot,
    Verdict,
};

/// Color selected whenever a new level starts.
pub const DEFAULT_COLOR: CellColor = CellColor::Red;

/// Input snapshot distilled from adapter-provided player actions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PainterInput {
    /// Palette entry the player picked on this frame.
    pub select_color: Option<CellColor>,
    /// Cell the player painted on this frame.
    pub paint: Option<CellCoord>,
    /// Indicates whether the player cleared the canvas on this frame.
    pub reset: bool,
    /// Indicates whether the player submitted the canvas on this frame.
    pub submit: bool,
}

/// Compares a painted canvas with the level solution.
///
/// Any difference in dimensions or in a single cell yields
/// [`Verdict::Incorrect`].
#[must_use]
pub fn judge(canvas: &Grid, puzzle: &GridPuzzle) -> Verdict {
    Verdict::from_match(canvas == &puzzle.solution)
}

/// Grid painting system that turns strokes and submissions into verdicts.
#[derive(Debug, Clone)]
pub struct GridPainter {
    phase: Phase,
    level: Option<LevelIndex>,
    canvas: Grid,
    selected: CellColor,
}

impl Default for GridPainter {
    fn default() -> Self {
        Self::new()
    }
}

impl GridPainter {
    /// Creates a painter waiting for the first level to start.
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: Phase::Welcome,
            level: None,
            canvas: Grid::blank(0, 0),
            selected: DEFAULT_COLOR,
        }
    }

    /// Synchronises the painter with a restored session.
    pub fn resume(&mut self, session: &SessionSnapshot, puzzle: Option<&GridPuzzle>) {
        self.phase = session.phase;
        self.start_level(session.level, puzzle);
    }

    /// Consumes world events and adapter input to update the canvas and emit verdicts.
    ///
    /// `puzzle` must be the payload of the world's current level so a freshly
    /// started level gets a canvas of matching dimensions.
    pub fn handle(
        &mut self,
        events: &[Event],
        puzzle: Option<&GridPuzzle>,
        input: PainterInput,
        out: &mut Vec<Command>,
    ) {
        for event in events {
            match event {
                Event::PhaseChanged { to, .. } => self.phase = *to,
                Event::LevelStarted { level } => self.start_level(*level, puzzle),
                Event::SessionReset => {
                    self.level = None;
                    self.canvas = Grid::blank(0, 0);
                    self.selected = DEFAULT_COLOR;
                }
                _ => {}
            }
        }

        if self.phase != Phase::Playing {
            return;
        }

        if let Some(color) = input.select_color {
            self.selected = color;
        }

        if input.reset {
            self.canvas.clear();
        }

        if let Some(cell) = input.paint {
            self.paint(cell);
        }

        if input.submit {
            if let (Some(level), Some(puzzle)) = (self.level, puzzle) {
                out.push(Command::ResolveSubmission {
                    level,
                    verdict: judge(&self.canvas, puzzle),
                });
            }
        }
    }

    /// Player's working grid.
    #[must_use]
    pub fn canvas(&self) -> &Grid {
        &self.canvas
    }

    /// Palette entry applied by the next stroke.
    #[must_use]
    pub const fn selected_color(&self) -> CellColor {
        self.selected
    }

    /// Level the canvas belongs to.
    #[must_use]
    pub const fn level(&self) -> Option<LevelIndex> {
        self.level
    }

    fn start_level(&mut self, level: LevelIndex, puzzle: Option<&GridPuzzle>) {
        self.level = Some(level);
        self.canvas = puzzle.map_or_else(
            || Grid::blank(0, 0),
            |puzzle| Grid::blank(puzzle.input.columns(), puzzle.input.rows()),
        );
        self.selected = DEFAULT_COLOR;
    }

    // Painting a cell that already holds the selected color erases it.
    fn paint(&mut self, cell: CellCoord) {
        let Some(current) = self.canvas.get(cell) else {
            return;
        };
        let color = if current == self.selected {
            CellColor::Empty
        } else {
            self.selected
        };
        let _ = self.canvas.set(cell, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn puzzle() -> GridPuzzle {
        GridPuzzle {
            input: Grid::from_palette_rows(&[[1, 0], [0, 2]])
                .expect("valid grid"),
            solution: Grid::from_palette_rows(&[[0, 1], [2, 0]])
                .expect("valid grid"),
        }
    }

    fn playing_painter(puzzle: &GridPuzzle) -> GridPainter {
        let mut painter = GridPainter::new();
        let mut commands = Vec::new();
        painter.handle(
            &[
                Event::PhaseChanged {
                    from: Phase::Dialog,
                    to: Phase::Playing,
                },
                Event::LevelStarted {
                    level: LevelIndex::new(0),
                },
            ],
            Some(puzzle),
            PainterInput::default(),
            &mut commands,
        );
        assert!(commands.is_empty());
        painter
    }

    fn stroke(painter: &mut GridPainter, puzzle: &GridPuzzle, input: PainterInput) -> Vec<Command> {
        let mut commands = Vec::new();
        painter.handle(&[], Some(puzzle), input, &mut commands);
        commands
    }

    #[test]
    fn level_start_creates_blank_canvas_with_red_selected() {
        let puzzle = puzzle();
        let painter = playing_painter(&puzzle);

        assert_eq!(painter.canvas(), &Grid::blank(2, 2));
        assert_eq!(painter.selected_color(), CellColor::Red);
        assert_eq!(painter.level(), Some(LevelIndex::new(0)));
    }

    #[test]
    fn painting_same_color_twice_erases_the_cell() {
        let puzzle = puzzle();
        let mut painter = playing_painter(&puzzle);
        let cell = CellCoord::new(1, 0);
        let paint = PainterInput {
            paint: Some(cell),
            ..PainterInput::default()
        };

        let _ = stroke(&mut painter, &puzzle, paint);
        assert_eq!(painter.canvas().get(cell), Some(CellColor::Red));

        let _ = stroke(&mut painter, &puzzle, paint);
        assert_eq!(painter.canvas().get(cell), Some(CellColor::Empty));
    }

    #[test]
    fn painting_a_different_color_overwrites() {
        let puzzle = puzzle();
        let mut painter = playing_painter(&puzzle);
        let cell = CellCoord::new(0, 0);

        let _ = stroke(
            &mut painter,
            &puzzle,
            PainterInput {
                paint: Some(cell),
                ..PainterInput::default()
            },
        );
        let _ = stroke(
            &mut painter,
            &puzzle,
            PainterInput {
                select_color: Some(CellColor::Blue),
                paint: Some(cell),
                ..PainterInput::default()
            },
        );

        assert_eq!(painter.canvas().get(cell), Some(CellColor::Blue));
    }

    #[test]
    fn strokes_outside_the_canvas_are_ignored() {
        let puzzle = puzzle();
        let mut painter = playing_painter(&puzzle);

        let _ = stroke(
            &mut painter,
            &puzzle,
            PainterInput {
                paint: Some(CellCoord::new(5, 5)),
                ..PainterInput::default()
            },
        );

        assert_eq!(painter.canvas(), &Grid::blank(2, 2));
    }

    #[test]
    fn reset_clears_canvas_but_keeps_selection() {
        let puzzle = puzzle();
        let mut painter = playing_painter(&puzzle);
        let _ = stroke(
            &mut painter,
            &puzzle,
            PainterInput {
                select_color: Some(CellColor::Green),
                paint: Some(CellCoord::new(0, 1)),
                ..PainterInput::default()
            },
        );

        let _ = stroke(
            &mut painter,
            &puzzle,
            PainterInput {
                reset: true,
                ..PainterInput::default()
            },
        );

        assert_eq!(painter.canvas(), &Grid::blank(2, 2));
        assert_eq!(painter.selected_color(), CellColor::Green);
    }

    #[test]
    fn submit_reports_verdict_for_current_level() {
        let puzzle = puzzle();
        let mut painter = playing_painter(&puzzle);

        let commands = stroke(
            &mut painter,
            &puzzle,
            PainterInput {
                submit: true,
                ..PainterInput::default()
            },
        );
        assert_eq!(
            commands,
            vec![Command::ResolveSubmission {
                level: LevelIndex::new(0),
                verdict: Verdict::Incorrect,
            }]
        );

        let _ = stroke(
            &mut painter,
            &puzzle,
            PainterInput {
                paint: Some(CellCoord::new(1, 0)),
                ..PainterInput::default()
            },
        );
        let commands = stroke(
            &mut painter,
            &puzzle,
            PainterInput {
                select_color: Some(CellColor::Blue),
                paint: Some(CellCoord::new(0, 1)),
                submit: true,
                ..PainterInput::default()
            },
        );
        assert_eq!(
            commands,
            vec![Command::ResolveSubmission {
                level: LevelIndex::new(0),
                verdict: Verdict::Correct,
            }]
        );
    }

    #[test]
    fn input_is_ignored_outside_play() {
        let puzzle = puzzle();
        let mut painter = GridPainter::new();
        let mut commands = Vec::new();

        painter.handle(
            &[],
            Some(&puzzle),
            PainterInput {
                paint: Some(CellCoord::new(0, 0)),
                submit: true,
                ..PainterInput::default()
            },
            &mut commands,
        );

        assert!(commands.is_empty());
        assert_eq!(painter.canvas(), &Grid::blank(0, 0));
    }

    #[test]
    fn judge_rejects_mismatched_dimensions() {
        let puzzle = puzzle();
        assert_eq!(judge(&Grid::blank(3, 3), &puzzle), Verdict::Incorrect);
        assert_eq!(judge(&puzzle.solution, &puzzle), Verdict::Correct);
    }
}
