//! The 26 piece locations of a 3x3x3 and how whole-puzzle rotations permute them.

use crate::error::TryFromIntToEnumError;
use crate::orientation::{Generator, Orientation};

#[cfg(test)]
use proptest_derive::Arbitrary;

/// Sticker colours. In the standard frame white is up, green is front and red is right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Color {
    White,
    Yellow,
    Green,
    Blue,
    Orange,
    Red,
}

impl Color {
    /// The letter used for this colour in location names.
    pub fn letter(self) -> char {
        match self {
            Color::White => 'W',
            Color::Yellow => 'Y',
            Color::Green => 'G',
            Color::Blue => 'B',
            Color::Orange => 'O',
            Color::Red => 'R',
        }
    }
}

/// The kind of piece that lives at a location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum PieceKind {
    Corner,
    Edge,
    Center,
}

/// A piece location, named by the colours of the stickers of the piece that is solved there.
///
/// The declaration order is the canonical order of the textual state encoding; changing it is a
/// breaking format change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
#[allow(missing_docs)]
pub enum Location {
    YGO,
    YGR,
    YBO,
    YBR,
    WGO,
    WGR,
    WBO,
    WBR,
    YG,
    YB,
    YO,
    YR,
    GO,
    GR,
    BO,
    BR,
    WG,
    WB,
    WO,
    WR,
    Y,
    W,
    G,
    B,
    O,
    R,
}

/// `POSITION[p][g]` is where the piece at `p` ends up after the generator `g`.
const POSITION: [[Location; 3]; 26] = {
    use Location::*;
    [
        [YBO, YGR, YGR], // YGO
        [YBR, YBR, WGR], // YGR
        [WBO, YGO, YBR], // YBO
        [WBR, YBO, WBR], // YBR
        [YGO, WGR, YGO], // WGO
        [YGR, WBR, WGO], // WGR
        [WGO, WGO, YBO], // WBO
        [WGR, WBO, WBO], // WBR
        [YB, YR, GR],    // YG
        [WB, YO, BR],    // YB
        [BO, YG, YR],    // YO
        [BR, YB, WR],    // YR
        [YO, GR, YG],    // GO
        [YR, BR, WG],    // GR
        [WO, GO, YB],    // BO
        [WR, BO, WB],    // BR
        [YG, WR, GO],    // WG
        [WG, WO, BO],    // WB
        [GO, WG, YO],    // WO
        [GR, WB, WO],    // WR
        [B, Y, R],       // Y
        [G, W, O],       // W
        [Y, R, G],       // G
        [W, O, B],       // B
        [O, G, Y],       // O
        [R, B, W],       // R
    ]
};

const NAMES: [&str; 26] = [
    "YGO", "YGR", "YBO", "YBR", "WGO", "WGR", "WBO", "WBR", "YG", "YB", "YO", "YR", "GO", "GR",
    "BO", "BR", "WG", "WB", "WO", "WR", "Y", "W", "G", "B", "O", "R",
];

impl Location {
    /// Number of locations.
    pub const COUNT: usize = 26;

    /// Every location in canonical order.
    pub const ARRAY: [Location; 26] = {
        use Location::*;
        [
            YGO, YGR, YBO, YBR, WGO, WGR, WBO, WBR, YG, YB, YO, YR, GO, GR, BO, BR, WG, WB, WO, WR,
            Y, W, G, B, O, R,
        ]
    };

    /// The corner locations.
    pub const CORNERS: [Location; 8] = {
        use Location::*;
        [YGO, YGR, YBO, YBR, WGO, WGR, WBO, WBR]
    };

    /// The edge locations.
    pub const EDGES: [Location; 12] = {
        use Location::*;
        [YG, YB, YO, YR, GO, GR, BO, BR, WG, WB, WO, WR]
    };

    /// The center locations.
    pub const CENTERS: [Location; 6] = {
        use Location::*;
        [Y, W, G, B, O, R]
    };

    /// The index of this location in canonical order.
    pub fn index(self) -> usize {
        self as usize
    }

    /// The letter of this location in positional strings, `A` to `Z` in canonical order.
    pub fn letter(self) -> char {
        (b'A' + self as u8) as char
    }

    /// Inverse of [`letter`](Self::letter).
    pub fn from_letter(c: char) -> Option<Location> {
        let i = (c as u32).checked_sub('A' as u32)?;
        Location::ARRAY.get(i as usize).copied()
    }

    /// The sticker colours of the piece solved at this location, as a string of colour letters.
    pub fn name(self) -> &'static str {
        NAMES[self.index()]
    }

    /// Whether the piece solved here carries a sticker of the given colour.
    pub fn has_color(self, color: Color) -> bool {
        self.name().contains(color.letter())
    }

    /// The kind of piece at this location.
    pub fn kind(self) -> PieceKind {
        match self.name().len() {
            3 => PieceKind::Corner,
            2 => PieceKind::Edge,
            _ => PieceKind::Center,
        }
    }

    /// Where a piece at this location moves under one application of `g`.
    pub fn after(self, g: Generator) -> Location {
        POSITION[self.index()][g.index()]
    }

    /// Where the piece whose home is this location sits when it has orientation `o`.
    pub fn resolve(self, o: Orientation) -> Location {
        o.decomposition().iter().fold(self, |p, &g| p.after(g))
    }
}

impl TryFrom<u8> for Location {
    type Error = TryFromIntToEnumError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Location::ARRAY
            .get(n as usize)
            .copied()
            .ok_or(TryFromIntToEnumError::OutOfBounds)
    }
}

impl From<Location> for u8 {
    fn from(l: Location) -> u8 {
        l as u8
    }
}
