//! Piece catalog: piece types, movement profiles, and promotion rules.
//!
//! Movement vectors are `(row delta, col delta)` pairs written from Sente's
//! point of view, where "forward" decreases the row. Gote uses the same
//! vectors negated; see [`Movement::orient`].

use crate::Side;

const ORTHOGONAL: [(i8, i8); 4] = [(-1, 0), (0, -1), (0, 1), (1, 0)];
const DIAGONAL: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
const KING: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];
const GOLD: [(i8, i8); 6] = [(-1, -1), (-1, 0), (-1, 1), (0, -1), (0, 1), (1, 0)];
const SILVER: [(i8, i8); 5] = [(-1, -1), (-1, 0), (-1, 1), (1, -1), (1, 1)];
const KNIGHT: [(i8, i8); 2] = [(-2, -1), (-2, 1)];
const FORWARD: [(i8, i8); 1] = [(-1, 0)];

/// The eight kinds of shogi pieces, unpromoted.
///
/// Promotion is tracked separately on [`Piece`], so a promoted Silver is
/// still `PieceType::Silver`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum PieceType {
    King = 0,
    Rook = 1,
    Bishop = 2,
    Gold = 3,
    Silver = 4,
    Knight = 5,
    Lance = 6,
    Pawn = 7,
}

/// How a piece moves: rays it can slide along and squares it can step to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Movement {
    /// Directions walked square by square until blocked.
    pub slides: &'static [(i8, i8)],
    /// Offsets reachable in exactly one jump.
    pub steps: &'static [(i8, i8)],
}

impl Movement {
    /// Orients a Sente-relative vector for `side`.
    #[inline]
    pub const fn orient(delta: (i8, i8), side: Side) -> (i8, i8) {
        match side {
            Side::Sente => delta,
            Side::Gote => (-delta.0, -delta.1),
        }
    }
}

impl PieceType {
    /// All piece types in order.
    pub const ALL: [PieceType; 8] = [
        PieceType::King,
        PieceType::Rook,
        PieceType::Bishop,
        PieceType::Gold,
        PieceType::Silver,
        PieceType::Knight,
        PieceType::Lance,
        PieceType::Pawn,
    ];

    /// Piece types that can be held in hand, in hand-index order.
    pub const HAND: [PieceType; 7] = [
        PieceType::Rook,
        PieceType::Bishop,
        PieceType::Gold,
        PieceType::Silver,
        PieceType::Knight,
        PieceType::Lance,
        PieceType::Pawn,
    ];

    /// Returns the index of this piece type (0-7).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the slot of this piece type in a hand, or `None` for the King.
    #[inline]
    pub const fn hand_index(self) -> Option<usize> {
        match self {
            PieceType::King => None,
            _ => Some(self as usize - 1),
        }
    }

    /// Returns the movement profile, oriented for Sente.
    ///
    /// Promoted Rook and Bishop keep their rays and gain the king steps they
    /// lack. Every other promoted piece moves like a Gold.
    pub const fn movement(self, promoted: bool) -> Movement {
        match (self, promoted) {
            (PieceType::King, _) => Movement {
                slides: &[],
                steps: &KING,
            },
            (PieceType::Rook, false) => Movement {
                slides: &ORTHOGONAL,
                steps: &[],
            },
            (PieceType::Rook, true) => Movement {
                slides: &ORTHOGONAL,
                steps: &DIAGONAL,
            },
            (PieceType::Bishop, false) => Movement {
                slides: &DIAGONAL,
                steps: &[],
            },
            (PieceType::Bishop, true) => Movement {
                slides: &DIAGONAL,
                steps: &ORTHOGONAL,
            },
            (PieceType::Silver, false) => Movement {
                slides: &[],
                steps: &SILVER,
            },
            (PieceType::Knight, false) => Movement {
                slides: &[],
                steps: &KNIGHT,
            },
            (PieceType::Lance, false) => Movement {
                slides: &FORWARD,
                steps: &[],
            },
            (PieceType::Pawn, false) => Movement {
                slides: &[],
                steps: &FORWARD,
            },
            (PieceType::Gold, _) | (_, true) => Movement {
                slides: &[],
                steps: &GOLD,
            },
        }
    }

    /// Returns true if the piece has at least one sliding direction.
    #[inline]
    pub const fn is_slider(self, promoted: bool) -> bool {
        !self.movement(promoted).slides.is_empty()
    }

    /// Returns true if this piece type can ever promote.
    #[inline]
    pub const fn can_promote(self) -> bool {
        !matches!(self, PieceType::King | PieceType::Gold)
    }

    /// Returns true if an unpromoted piece of this type owned by `side`
    /// standing on `row` would have no further moves, so it must promote
    /// on arrival and may not be dropped there.
    #[inline]
    pub const fn must_promote(self, side: Side, row: u8) -> bool {
        let depth = side.rows_from_last(row);
        match self {
            PieceType::Pawn | PieceType::Lance => depth == 0,
            PieceType::Knight => depth < 2,
            _ => false,
        }
    }

    /// Returns the USI letter for this piece type (uppercase).
    pub const fn usi_char(self) -> char {
        match self {
            PieceType::King => 'K',
            PieceType::Rook => 'R',
            PieceType::Bishop => 'B',
            PieceType::Gold => 'G',
            PieceType::Silver => 'S',
            PieceType::Knight => 'N',
            PieceType::Lance => 'L',
            PieceType::Pawn => 'P',
        }
    }

    /// Parses a USI piece letter, ignoring case.
    pub const fn from_usi_char(c: char) -> Option<PieceType> {
        match c.to_ascii_uppercase() {
            'K' => Some(PieceType::King),
            'R' => Some(PieceType::Rook),
            'B' => Some(PieceType::Bishop),
            'G' => Some(PieceType::Gold),
            'S' => Some(PieceType::Silver),
            'N' => Some(PieceType::Knight),
            'L' => Some(PieceType::Lance),
            'P' => Some(PieceType::Pawn),
            _ => None,
        }
    }
}

impl std::fmt::Display for PieceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PieceType::King => "King",
            PieceType::Rook => "Rook",
            PieceType::Bishop => "Bishop",
            PieceType::Gold => "Gold",
            PieceType::Silver => "Silver",
            PieceType::Knight => "Knight",
            PieceType::Lance => "Lance",
            PieceType::Pawn => "Pawn",
        };
        write!(f, "{}", name)
    }
}

/// A piece standing on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceType,
    pub owner: Side,
    /// Only ever true for types where [`PieceType::can_promote`] holds.
    pub promoted: bool,
}

impl Piece {
    /// Creates an unpromoted piece.
    #[inline]
    pub const fn new(kind: PieceType, owner: Side) -> Self {
        Piece {
            kind,
            owner,
            promoted: false,
        }
    }

    /// Returns this piece promoted.
    ///
    /// # Panics
    ///
    /// Panics if the piece type cannot promote.
    #[inline]
    pub fn promote(self) -> Self {
        assert!(self.kind.can_promote(), "{} cannot promote", self.kind);
        Piece {
            promoted: true,
            ..self
        }
    }

    /// Returns this piece's movement profile oriented for its owner's
    /// point of view. Use [`Movement::orient`] on each vector before use.
    #[inline]
    pub const fn movement(self) -> Movement {
        self.kind.movement(self.promoted)
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.promoted {
            write!(f, "{} promoted {}", self.owner, self.kind)
        } else {
            write!(f, "{} {}", self.owner, self.kind)
        }
    }
}
