//! Move types and move list.

use std::fmt;
use std::ops::{BitOr, BitOrAssign, Index};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Piece;
use super::square::Square;

/// Set of move-type flags. Flags combine, so a capturing promotion is
/// `MoveType::CAPTURE | MoveType::PROMOTION`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveType(u8);

impl MoveType {
    /// Plain relocation onto an empty square
    pub const NORMAL: MoveType = MoveType(0);
    pub const CAPTURE: MoveType = MoveType(1 << 0);
    pub const EN_PASSANT: MoveType = MoveType(1 << 1);
    pub const CASTLE: MoveType = MoveType(1 << 2);
    pub const PROMOTION: MoveType = MoveType(1 << 3);

    const MASK: u8 = 0b1111;

    /// Returns true if every flag in `other` is set in `self`
    #[inline]
    #[must_use]
    pub const fn contains(self, other: MoveType) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: MoveType) -> MoveType {
        MoveType(self.0 | other.0)
    }

    /// Returns true if no flag is set
    #[inline]
    #[must_use]
    pub const fn is_normal(self) -> bool {
        self.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn from_bits(bits: u8) -> MoveType {
        MoveType(bits & Self::MASK)
    }
}

impl BitOr for MoveType {
    type Output = MoveType;

    fn bitor(self, rhs: MoveType) -> MoveType {
        self.union(rhs)
    }
}

impl BitOrAssign for MoveType {
    fn bitor_assign(&mut self, rhs: MoveType) {
        *self = self.union(rhs);
    }
}

impl fmt::Debug for MoveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_normal() {
            return write!(f, "Normal");
        }
        let names = [
            (MoveType::CAPTURE, "Capture"),
            (MoveType::EN_PASSANT, "EnPassant"),
            (MoveType::CASTLE, "Castle"),
            (MoveType::PROMOTION, "Promotion"),
        ];
        let mut first = true;
        for (flag, name) in names {
            if self.contains(flag) {
                if !first {
                    write!(f, "|")?;
                }
                write!(f, "{name}")?;
                first = false;
            }
        }
        Ok(())
    }
}

/// Compact 32-bit move representation.
///
/// Encoding:
/// - bits 0-5:   from square (0-63)
/// - bits 6-11:  to square (0-63)
/// - bits 12-15: `MoveType` flags
/// - bits 16-18: promotion piece (0 = none, otherwise plane index + 1)
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move(u32);

impl Move {
    /// Create a null/empty move (used for initialization)
    #[inline]
    #[must_use]
    pub const fn null() -> Self {
        Move(0)
    }

    /// Create a move of any type, with an optional promotion piece
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square, kind: MoveType, promotion: Option<Piece>) -> Self {
        let promo = match promotion {
            Some(piece) => piece.index() as u32 + 1,
            None => 0,
        };
        Move(
            from.index() as u32
                | (to.index() as u32) << 6
                | (kind.bits() as u32) << 12
                | promo << 16,
        )
    }

    /// Create a normal (quiet) move
    #[inline]
    #[must_use]
    pub const fn normal(from: Square, to: Square) -> Self {
        Move::new(from, to, MoveType::NORMAL, None)
    }

    /// Create a capture move
    #[inline]
    #[must_use]
    pub const fn capture(from: Square, to: Square) -> Self {
        Move::new(from, to, MoveType::CAPTURE, None)
    }

    /// Create a promotion move (non-capture)
    #[inline]
    #[must_use]
    pub const fn promotion(from: Square, to: Square, piece: Piece) -> Self {
        Move::new(from, to, MoveType::PROMOTION, Some(piece))
    }

    /// Create a promotion that also captures on `to`
    #[inline]
    #[must_use]
    pub const fn promotion_capture(from: Square, to: Square, piece: Piece) -> Self {
        Move::new(
            from,
            to,
            MoveType::CAPTURE.union(MoveType::PROMOTION),
            Some(piece),
        )
    }

    /// Get the source square
    #[inline]
    #[must_use]
    pub const fn from(self) -> Square {
        Square::from_index((self.0 & 0x3F) as u8)
    }

    /// Get the destination square
    #[inline]
    #[must_use]
    pub const fn to(self) -> Square {
        Square::from_index(((self.0 >> 6) & 0x3F) as u8)
    }

    /// Get the move-type flags
    #[inline]
    #[must_use]
    pub const fn kind(self) -> MoveType {
        MoveType::from_bits(((self.0 >> 12) & 0xF) as u8)
    }

    /// Get the promotion piece, if one is encoded
    #[inline]
    #[must_use]
    pub const fn promotion_piece(self) -> Option<Piece> {
        match (self.0 >> 16) & 0x7 {
            0 => None,
            n => Piece::from_index(n as usize - 1),
        }
    }

    /// Returns true if this move captures a piece
    #[inline]
    #[must_use]
    pub const fn is_capture(self) -> bool {
        self.kind().contains(MoveType::CAPTURE)
    }

    /// Returns true if this move is a pawn promotion
    #[inline]
    #[must_use]
    pub const fn is_promotion(self) -> bool {
        self.kind().contains(MoveType::PROMOTION)
    }

    /// Get the raw 32-bit value
    #[inline]
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({}{} {:?}", self.from(), self.to(), self.kind())?;
        if let Some(promo) = self.promotion_piece() {
            write!(f, "={}", promo.to_char().to_ascii_uppercase())?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from(), self.to())?;
        if let Some(promo) = self.promotion_piece() {
            write!(f, "{}", promo.to_char())?;
        }
        Ok(())
    }
}

/// Capacity of a `MoveList`
pub const MAX_MOVES: usize = 256;

/// List of moves with fixed-size backing array.
///
/// Pushing onto a full list drops the move without signaling; generation
/// relies on this instead of growing or erroring.
#[derive(Clone, Debug)]
pub struct MoveList {
    moves: [Move; MAX_MOVES],
    len: usize,
}

impl MoveList {
    #[must_use]
    pub fn new() -> Self {
        MoveList {
            moves: [Move::null(); MAX_MOVES],
            len: 0,
        }
    }

    /// Append a move. Silently dropped once the list holds `MAX_MOVES`.
    pub fn push(&mut self, mv: Move) {
        if self.len < MAX_MOVES {
            self.moves[self.len] = mv;
            self.len += 1;
        } else {
            #[cfg(feature = "logging")]
            log::warn!("move list full, dropping {mv}");
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.len == MAX_MOVES
    }

    pub fn clear(&mut self) {
        self.len = 0;
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.as_slice().iter()
    }

    #[must_use]
    pub fn get(&self, idx: usize) -> Option<Move> {
        self.as_slice().get(idx).copied()
    }

    #[must_use]
    pub fn contains(&self, mv: Move) -> bool {
        self.as_slice().contains(&mv)
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl Default for MoveList {
    fn default() -> Self {
        MoveList::new()
    }
}

impl fmt::Display for MoveList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mv in self {
            writeln!(f, "{mv}")?;
        }
        Ok(())
    }
}

/// Owning iterator over moves in a `MoveList`
pub struct MoveListIntoIter {
    list: MoveList,
    idx: usize,
}

impl Iterator for MoveListIntoIter {
    type Item = Move;

    fn next(&mut self) -> Option<Self::Item> {
        let mv = self.list.get(self.idx)?;
        self.idx += 1;
        Some(mv)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.list.len - self.idx;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for MoveListIntoIter {}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = MoveListIntoIter;

    fn into_iter(self) -> Self::IntoIter {
        MoveListIntoIter { list: self, idx: 0 }
    }
}

impl Index<usize> for MoveList {
    type Output = Move;

    fn index(&self, idx: usize) -> &Self::Output {
        assert!(
            idx < self.len,
            "MoveList index {} out of bounds (len {})",
            idx,
            self.len
        );
        &self.moves[idx]
    }
}
