//! Random self-play.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use shogi_core::Side;
use shogi_engine::Game;

/// Plays `games` games of uniformly random legal moves and prints a
/// one-line summary of each.
pub fn run(games: u32, max_plies: usize, seed: Option<u64>) -> anyhow::Result<()> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut wins = [0u32; 2];
    let mut unfinished = 0u32;

    for index in 1..=games {
        let game = play_one(&mut rng, max_plies)?;
        let pos = game.position();
        let hands = format!(
            "Sente {} / Gote {}",
            pos.hand(Side::Sente),
            pos.hand(Side::Gote)
        );

        match game.result() {
            Some(result) => {
                wins[result.winner().index()] += 1;
                println!(
                    "game {}: {} after {} plies (hands: {})",
                    index,
                    result,
                    game.ply_count(),
                    hands
                );
            }
            None => {
                unfinished += 1;
                println!(
                    "game {}: unfinished after {} plies (hands: {})",
                    index,
                    game.ply_count(),
                    hands
                );
            }
        }
    }

    tracing::info!(
        games,
        sente_wins = wins[Side::Sente.index()],
        gote_wins = wins[Side::Gote.index()],
        unfinished,
        "self-play finished"
    );
    Ok(())
}

fn play_one(rng: &mut StdRng, max_plies: usize) -> anyhow::Result<Game> {
    let mut game = Game::new();
    while !game.is_game_over() && game.ply_count() < max_plies {
        let moves = game.legal_moves();
        let Some(&m) = moves.as_slice().choose(rng) else {
            break;
        };
        game.make_move(m)?;
    }
    Ok(game)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_games_are_reproducible() {
        let a = play_one(&mut StdRng::seed_from_u64(7), 60).unwrap();
        let b = play_one(&mut StdRng::seed_from_u64(7), 60).unwrap();
        assert_eq!(a.move_history(), b.move_history());
        assert_eq!(a.position(), b.position());
    }

    #[test]
    fn respects_ply_limit() {
        let game = play_one(&mut StdRng::seed_from_u64(1), 25).unwrap();
        assert!(game.ply_count() <= 25);
        assert!(game.is_game_over() || game.ply_count() == 25);
        assert_eq!(game.position().piece_count(), 40);
    }
}
