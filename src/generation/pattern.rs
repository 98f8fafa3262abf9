use crate::board::{Board, BoardCell, Colour, Position};
use rand::seq::SliceRandom;
use rand::Rng;
use std::error::Error;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Colour boards are fixed at 5x5: six colours of four tiles each plus
/// the empty cell.
pub const PATTERN_SIZE: usize = 5;

const TILES_PER_COLOUR: usize = 4;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PatternType {
    Rows,
    Columns,
    Diagonals,
    Random,
}

impl PatternType {
    pub fn all() -> &'static [PatternType; 4] {
        &[
            PatternType::Rows,
            PatternType::Columns,
            PatternType::Diagonals,
            PatternType::Random,
        ]
    }
}

/// A pattern was requested with a tag the catalogue does not know. This
/// is a caller error and is surfaced immediately instead of being
/// defaulted away.
#[derive(Debug, PartialEq)]
pub struct UnknownPatternError(String);

impl Display for UnknownPatternError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_fmt(format_args!("unknown pattern type: {}", self.0))
    }
}

impl Error for UnknownPatternError {}

impl FromStr for PatternType {
    type Err = UnknownPatternError;

    fn from_str(tag: &str) -> Result<PatternType, UnknownPatternError> {
        match tag {
            "rows" => Ok(PatternType::Rows),
            "columns" => Ok(PatternType::Columns),
            "diagonals" => Ok(PatternType::Diagonals),
            "random" => Ok(PatternType::Random),
            _ => Err(UnknownPatternError(String::from(tag))),
        }
    }
}

/// Builds the target pattern for a colour game. Deterministic layouts
/// lay the palette out along a fixed cell ordering; `Random` shuffles
/// the tile multiset, which keeps the per-colour counts intact either
/// way.
pub fn generate_pattern<G: Rng>(kind: PatternType, rng: &mut G) -> Board {
    let cells = match kind {
        PatternType::Rows => along_ordering(row_major()),
        PatternType::Columns => along_ordering(column_major()),
        PatternType::Diagonals => along_ordering(diagonal_order()),
        PatternType::Random => {
            let mut cells = along_ordering(row_major());
            cells.shuffle(rng);
            cells
        }
    };

    Board::from_cells(PATTERN_SIZE, cells).unwrap()
}

/// Assigns four tiles of each colour along the given cell ordering; the
/// ordering's final cell stays empty.
fn along_ordering(ordering: Vec<Position>) -> Vec<BoardCell> {
    let count = PATTERN_SIZE * PATTERN_SIZE;
    let mut cells = vec![BoardCell::Empty; count];

    for (index, &position) in ordering.iter().take(count - 1).enumerate() {
        let colour = Colour::all()[index / TILES_PER_COLOUR];

        cells[position.row * PATTERN_SIZE + position.col] = BoardCell::Colour(colour);
    }

    cells
}

fn row_major() -> Vec<Position> {
    (0..PATTERN_SIZE)
        .flat_map(|row| (0..PATTERN_SIZE).map(move |col| Position::new(row, col)))
        .collect()
}

fn column_major() -> Vec<Position> {
    (0..PATTERN_SIZE)
        .flat_map(|col| (0..PATTERN_SIZE).map(move |row| Position::new(row, col)))
        .collect()
}

/// Anti-diagonal sweep from the top-left corner; (4, 4) comes last, so
/// the empty cell lands in the bottom-right corner like the other
/// deterministic layouts.
fn diagonal_order() -> Vec<Position> {
    let mut positions = Vec::with_capacity(PATTERN_SIZE * PATTERN_SIZE);

    for diagonal in 0..(2 * PATTERN_SIZE - 1) {
        for row in 0..PATTERN_SIZE {
            if diagonal >= row && diagonal - row < PATTERN_SIZE {
                positions.push(Position::new(row, diagonal - row));
            }
        }
    }

    positions
}
