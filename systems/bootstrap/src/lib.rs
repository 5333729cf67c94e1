#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure bootstrap system that prepares the Ninja Puzzles experience.

use ninja_puzzles_core::GameKind;
use ninja_puzzles_world::{query, World};

/// Entry of the game selection menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuEntry {
    /// Game launched by the entry.
    pub game: GameKind,
    /// Title shown on the entry.
    pub title: &'static str,
    /// One-line description shown beneath the title.
    pub description: &'static str,
}

/// Overview of the deck loaded into a world.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeckSummary {
    /// Game being played.
    pub game: GameKind,
    /// Number of levels in the deck.
    pub levels: usize,
    /// Number of tutorial dialogs in the deck.
    pub tutorials: usize,
    /// Highest star total the deck can award.
    pub max_stars: u32,
}

/// Produces data required to greet the player.
#[derive(Debug, Default)]
pub struct Bootstrap;

impl Bootstrap {
    /// Derives the banner that should be shown when the experience starts.
    #[must_use]
    pub fn welcome_banner<'world>(&self, world: &'world World) -> &'world str {
        query::welcome_banner(world)
    }

    /// Lists the games offered on the home menu in display order.
    #[must_use]
    pub fn game_menu(&self) -> Vec<MenuEntry> {
        GameKind::ALL
            .into_iter()
            .map(|game| MenuEntry {
                game,
                title: game.title(),
                description: game.description(),
            })
            .collect()
    }

    /// Summarises the deck the world was created with.
    #[must_use]
    pub fn deck_summary(&self, world: &World) -> DeckSummary {
        DeckSummary {
            game: query::game(world),
            levels: query::level_count(world),
            tutorials: query::deck(world).tutorials().len(),
            max_stars: query::max_stars(world),
        }
    }
}
