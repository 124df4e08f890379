//! Player side representation.

/// The two players in shogi. Sente moves first and starts on rows 6-8;
/// Gote starts on rows 0-2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Side {
    Sente = 0,
    Gote = 1,
}

impl Side {
    /// Both sides, Sente first.
    pub const ALL: [Side; 2] = [Side::Sente, Side::Gote];

    /// Returns the other side.
    #[inline]
    pub const fn opponent(self) -> Self {
        match self {
            Side::Sente => Side::Gote,
            Side::Gote => Side::Sente,
        }
    }

    /// Returns the index (0 for Sente, 1 for Gote).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Row delta of a step "forward" for this side (-1 for Sente, +1 for Gote).
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Side::Sente => -1,
            Side::Gote => 1,
        }
    }

    /// The row this side starts its major pieces on.
    #[inline]
    pub const fn back_row(self) -> u8 {
        match self {
            Side::Sente => 8,
            Side::Gote => 0,
        }
    }

    /// The farthest row from this side's back row.
    #[inline]
    pub const fn last_row(self) -> u8 {
        self.opponent().back_row()
    }

    /// How many rows `row` lies from this side's last row (0 = last row).
    #[inline]
    pub const fn rows_from_last(self, row: u8) -> u8 {
        match self {
            Side::Sente => row,
            Side::Gote => 8 - row,
        }
    }

    /// Returns true if `row` lies in this side's promotion zone, the three
    /// rows farthest from its own back row.
    #[inline]
    pub const fn in_promotion_zone(self, row: u8) -> bool {
        self.rows_from_last(row) < 3
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Sente => write!(f, "Sente"),
            Side::Gote => write!(f, "Gote"),
        }
    }
}
