#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure lookup deciding which tutorial dialogs interrupt a level sequence.
//!
//! The first tutorial always opens a playthrough. Every later tutorial is tied
//! to a breakpoint: the level index that must be preceded by a dialog. Tutorial
//! scripts are consumed in breakpoint order, so the tutorial shown before the
//! `n`-th breakpoint is tutorial `n + 1`.

use ninja_puzzles_core::{LevelIndex, TutorialIndex};

/// Breakpoints shared by every six-level game: before the third and fifth levels.
pub const STANDARD_BREAKPOINTS: [LevelIndex; 2] = [LevelIndex::new(2), LevelIndex::new(4)];

/// Maps level indices to the tutorial dialogs that must precede them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TutorialTrigger {
    breakpoints: Vec<LevelIndex>,
}

impl Default for TutorialTrigger {
    fn default() -> Self {
        Self::standard()
    }
}

impl TutorialTrigger {
    /// Creates a trigger for the provided breakpoints.
    ///
    /// Breakpoints are sorted and deduplicated. Level 0 is dropped because the
    /// opening tutorial already precedes it.
    #[must_use]
    pub fn new(breakpoints: impl IntoIterator<Item = LevelIndex>) -> Self {
        let mut breakpoints: Vec<LevelIndex> = breakpoints
            .into_iter()
            .filter(|level| level.get() > 0)
            .collect();
        breakpoints.sort_unstable();
        breakpoints.dedup();
        Self { breakpoints }
    }

    /// Trigger using [`STANDARD_BREAKPOINTS`].
    #[must_use]
    pub fn standard() -> Self {
        Self::new(STANDARD_BREAKPOINTS)
    }

    /// Tutorial presented when a playthrough starts.
    #[must_use]
    pub const fn opening(&self) -> TutorialIndex {
        TutorialIndex::new(0)
    }

    /// Tutorial that must be shown before `level` starts, if any.
    #[must_use]
    pub fn tutorial_before(&self, level: LevelIndex) -> Option<TutorialIndex> {
        let position = self.breakpoints.binary_search(&level).ok()?;
        let position = u32::try_from(position).ok()?;
        Some(TutorialIndex::new(position.saturating_add(1)))
    }

    /// Breakpoints in ascending order.
    #[must_use]
    pub fn breakpoints(&self) -> &[LevelIndex] {
        &self.breakpoints
    }

    /// Number of tutorial scripts a game needs: the opening plus one per breakpoint.
    #[must_use]
    pub fn tutorial_count(&self) -> usize {
        self.breakpoints.len() + 1
    }
}
