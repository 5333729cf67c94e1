#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Multiple-choice system shared by Pattern Matcher and Story Solver.
//!
//! Each time a level starts the panel deals its answer choices in a shuffled
//! order. The shuffle is driven by a ChaCha stream seeded from the session
//! seed, the game and the level index, so replaying a session with the same
//! seed deals identical orders.

use ninja_puzzles_core::{
    Command, Event, GameKind, LevelIndex, Phase, Puzzle, SessionSnapshot, Verdict,
};
use rand::{seq::SliceRandom, SeedableRng};
use rand_chacha::ChaCha8Rng;
use sha2::{Digest, Sha256};

/// Derives the shuffle seed for one level of one game.
#[must_use]
pub fn shuffle_seed(session_seed: u64, game: GameKind, level: LevelIndex) -> u64 {
    let mut hasher = Sha256::new();
    hasher.update(session_seed.to_le_bytes());
    hasher.update(game.label().as_bytes());
    hasher.update(level.get().to_le_bytes());
    let digest = hasher.finalize();
    let mut bytes = [0_u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    u64::from_le_bytes(bytes)
}

/// Returns a uniformly shuffled copy of `items`.
#[must_use]
pub fn shuffled<T: Clone>(items: &[T], seed: u64) -> Vec<T> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut order = items.to_vec();
    order.shuffle(&mut rng);
    order
}

/// Compares a chosen answer with the puzzle's correct choice.
///
/// Grid puzzles have no choices, so every answer is incorrect for them.
#[must_use]
pub fn judge(choice: &str, puzzle: &Puzzle) -> Verdict {
    Verdict::from_match(puzzle.correct_choice() == Some(choice))
}

/// Input snapshot distilled from adapter-provided player actions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ChoiceInput {
    /// Zero-based position, in dealt order, of the choice the player picked.
    pub select: Option<usize>,
    /// Indicates whether the player submitted the selected choice.
    pub submit: bool,
}

/// Choice panel that deals shuffled answers and judges the selected one.
#[derive(Debug, Clone)]
pub struct ChoicePanel {
    session_seed: u64,
    game: GameKind,
    phase: Phase,
    level: Option<LevelIndex>,
    dealt: Vec<String>,
    selected: Option<usize>,
}

impl ChoicePanel {
    /// Creates a panel for `game` whose shuffles derive from `session_seed`.
    #[must_use]
    pub const fn new(game: GameKind, session_seed: u64) -> Self {
        Self {
            session_seed,
            game,
            phase: Phase::Welcome,
            level: None,
            dealt: Vec::new(),
            selected: None,
        }
    }

    /// Synchronises the panel with a restored session.
    pub fn resume(&mut self, session: &SessionSnapshot, puzzle: Option<&Puzzle>) {
        self.phase = session.phase;
        self.deal(session.level, puzzle);
    }

    /// Consumes world events and adapter input to emit submission verdicts.
    ///
    /// `puzzle` must be the payload of the world's current level.
    pub fn handle(
        &mut self,
        events: &[Event],
        puzzle: Option<&Puzzle>,
        input: ChoiceInput,
        out: &mut Vec<Command>,
    ) {
        for event in events {
            match event {
                Event::PhaseChanged { to, .. } => self.phase = *to,
                Event::LevelStarted { level } => self.deal(*level, puzzle),
                Event::SessionReset => {
                    self.level = None;
                    self.dealt.clear();
                    self.selected = None;
                }
                _ => {}
            }
        }

        if self.phase != Phase::Playing {
            return;
        }

        if let Some(index) = input.select {
            if index < self.dealt.len() {
                self.selected = Some(index);
            }
        }

        if !input.submit {
            return;
        }
        let (Some(level), Some(choice), Some(puzzle)) = (self.level, self.selected_choice(), puzzle)
        else {
            return;
        };
        out.push(Command::ResolveSubmission {
            level,
            verdict: judge(choice, puzzle),
        });
    }

    /// Choices in the order they are presented.
    #[must_use]
    pub fn choices(&self) -> &[String] {
        &self.dealt
    }

    /// Position of the selected choice, if any.
    #[must_use]
    pub const fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Text of the selected choice, if any.
    #[must_use]
    pub fn selected_choice(&self) -> Option<&str> {
        self.selected
            .and_then(|index| self.dealt.get(index))
            .map(String::as_str)
    }

    fn deal(&mut self, level: LevelIndex, puzzle: Option<&Puzzle>) {
        self.level = Some(level);
        self.selected = None;
        self.dealt = puzzle
            .and_then(Puzzle::choices)
            .map(|choices| shuffled(choices, shuffle_seed(self.session_seed, self.game, level)))
            .unwrap_or_default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ninja_puzzles_core::ReferentPuzzle;

    fn puzzle() -> Puzzle {
        Puzzle::Referent(ReferentPuzzle {
            sentence: "The cat chased the mouse until it got tired.".to_owned(),
            pronoun: "it".to_owned(),
            correct_referent: "the cat".to_owned(),
            choices: vec!["the cat".to_owned(), "the mouse".to_owned()],
        })
    }

    fn playing_panel(puzzle: &Puzzle) -> ChoicePanel {
        let mut panel = ChoicePanel::new(GameKind::StorySolver, 7);
        let mut commands = Vec::new();
        panel.handle(
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
            ChoiceInput::default(),
            &mut commands,
        );
        panel
    }

    #[test]
    fn shuffle_seed_depends_on_every_input() {
        let base = shuffle_seed(1, GameKind::PatternMatcher, LevelIndex::new(0));

        assert_eq!(base, shuffle_seed(1, GameKind::PatternMatcher, LevelIndex::new(0)));
        assert_ne!(base, shuffle_seed(2, GameKind::PatternMatcher, LevelIndex::new(0)));
        assert_ne!(base, shuffle_seed(1, GameKind::StorySolver, LevelIndex::new(0)));
        assert_ne!(base, shuffle_seed(1, GameKind::PatternMatcher, LevelIndex::new(1)));
    }

    #[test]
    fn shuffled_is_a_reproducible_permutation() {
        let items: Vec<u32> = (0..16).collect();
        let first = shuffled(&items, 99);

        assert_eq!(first, shuffled(&items, 99));
        let mut sorted = first.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, items);
        assert!(shuffled::<u32>(&[], 99).is_empty());
    }

    #[test]
    fn level_start_deals_every_choice() {
        let puzzle = puzzle();
        let panel = playing_panel(&puzzle);

        let mut dealt = panel.choices().to_vec();
        dealt.sort();
        assert_eq!(dealt, vec!["the cat".to_owned(), "the mouse".to_owned()]);
        assert_eq!(panel.selected(), None);
    }

    #[test]
    fn submitting_without_selection_is_a_no_op() {
        let puzzle = puzzle();
        let mut panel = playing_panel(&puzzle);
        let mut commands = Vec::new();

        panel.handle(
            &[],
            Some(&puzzle),
            ChoiceInput {
                select: Some(5),
                submit: true,
            },
            &mut commands,
        );

        assert!(commands.is_empty());
        assert_eq!(panel.selected(), None);
    }

    #[test]
    fn submission_is_judged_by_choice_text_not_position() {
        let puzzle = puzzle();
        let mut panel = playing_panel(&puzzle);

        for (index, choice) in panel.choices().to_vec().into_iter().enumerate() {
            let mut commands = Vec::new();
            panel.handle(
                &[],
                Some(&puzzle),
                ChoiceInput {
                    select: Some(index),
                    submit: true,
                },
                &mut commands,
            );
            let expected = Verdict::from_match(choice == "the cat");
            assert_eq!(
                commands,
                vec![Command::ResolveSubmission {
                    level: LevelIndex::new(0),
                    verdict: expected,
                }]
            );
        }
    }

    #[test]
    fn input_is_ignored_outside_play() {
        let puzzle = puzzle();
        let mut panel = ChoicePanel::new(GameKind::StorySolver, 7);
        let mut commands = Vec::new();

        panel.handle(
            &[Event::LevelStarted {
                level: LevelIndex::new(0),
            }],
            Some(&puzzle),
            ChoiceInput {
                select: Some(0),
                submit: true,
            },
            &mut commands,
        );

        assert!(commands.is_empty());
        assert_eq!(panel.selected(), None);
    }

    #[test]
    fn judge_requires_exact_text() {
        let puzzle = puzzle();
        assert_eq!(judge("the cat", &puzzle), Verdict::Correct);
        assert_eq!(judge("The cat", &puzzle), Verdict::Incorrect);
        assert_eq!(judge("the dog", &puzzle), Verdict::Incorrect);
    }
}
