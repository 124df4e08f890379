//! Pieces held in hand.

use crate::PieceType;

/// A side's reserve of captured pieces, available to drop.
///
/// Counts are kept per droppable type in [`PieceType::HAND`] order. Pieces
/// in hand are always unpromoted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Hand {
    counts: [u8; 7],
}

impl Hand {
    /// An empty hand.
    pub const EMPTY: Hand = Hand { counts: [0; 7] };

    /// Returns how many pieces of the given type are held.
    #[inline]
    pub fn count(&self, piece: PieceType) -> u8 {
        piece.hand_index().map_or(0, |i| self.counts[i])
    }

    /// Adds one piece of the given type.
    ///
    /// # Panics
    ///
    /// Panics if `piece` is the King, which can never be held.
    pub fn add(&mut self, piece: PieceType) {
        let i = piece
            .hand_index()
            .unwrap_or_else(|| panic!("{} cannot be held in hand", piece));
        self.counts[i] += 1;
    }

    /// Removes one piece of the given type.
    ///
    /// # Panics
    ///
    /// Panics if no piece of that type is held.
    pub fn remove(&mut self, piece: PieceType) {
        let slot = piece.hand_index().map(|i| &mut self.counts[i]);
        match slot {
            Some(count) if *count > 0 => *count -= 1,
            _ => panic!("no {} in hand to remove", piece),
        }
    }

    /// Returns true if no pieces are held.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// Returns the total number of pieces held.
    #[inline]
    pub fn total(&self) -> u32 {
        self.counts.iter().map(|&c| c as u32).sum()
    }

    /// Iterates over the held piece types and their counts, skipping zeros.
    pub fn iter(&self) -> impl Iterator<Item = (PieceType, u8)> + '_ {
        PieceType::HAND
            .into_iter()
            .zip(self.counts)
            .filter(|&(_, count)| count > 0)
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "-");
        }
        for (piece, count) in self.iter() {
            if count > 1 {
                write!(f, "{}", count)?;
            }
            write!(f, "{}", piece.usi_char())?;
        }
        Ok(())
    }
}
