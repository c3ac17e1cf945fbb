//! Cells and cell sets for the 3x3 board.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// A cell on the board.
///
/// Cells are indexed 0-8 in row-major order. The named variants exist so
/// call sites read as board locations rather than bare indices.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Cell {
    /// Top-left (index 0)
    TopLeft,
    /// Top-center (index 1)
    TopCenter,
    /// Top-right (index 2)
    TopRight,
    /// Middle-left (index 3)
    MiddleLeft,
    /// Center (index 4)
    Center,
    /// Middle-right (index 5)
    MiddleRight,
    /// Bottom-left (index 6)
    BottomLeft,
    /// Bottom-center (index 7)
    BottomCenter,
    /// Bottom-right (index 8)
    BottomRight,
}

impl Cell {
    /// All 9 cells in index order.
    pub const ALL: [Cell; 9] = [
        Cell::TopLeft,
        Cell::TopCenter,
        Cell::TopRight,
        Cell::MiddleLeft,
        Cell::Center,
        Cell::MiddleRight,
        Cell::BottomLeft,
        Cell::BottomCenter,
        Cell::BottomRight,
    ];

    /// Display label for this cell.
    pub fn label(&self) -> &'static str {
        match self {
            Cell::TopLeft => "Top-left",
            Cell::TopCenter => "Top-center",
            Cell::TopRight => "Top-right",
            Cell::MiddleLeft => "Middle-left",
            Cell::Center => "Center",
            Cell::MiddleRight => "Middle-right",
            Cell::BottomLeft => "Bottom-left",
            Cell::BottomCenter => "Bottom-center",
            Cell::BottomRight => "Bottom-right",
        }
    }

    /// Converts this cell to its board index (0-8).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Creates a cell from a board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Cell::ALL.get(index).copied()
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A set of cells, backed by a 9-bit mask.
///
/// Used for the three board partitions (available, user-owned,
/// computer-owned) and for terminal highlight sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellSet(u16);

impl CellSet {
    /// The empty set.
    pub const EMPTY: CellSet = CellSet(0);

    /// All 9 cells.
    pub const ALL: CellSet = CellSet(0b1_1111_1111);

    /// Checks membership.
    pub fn contains(self, cell: Cell) -> bool {
        self.0 & (1 << cell.index()) != 0
    }

    /// Adds a cell to the set.
    pub fn insert(&mut self, cell: Cell) {
        self.0 |= 1 << cell.index();
    }

    /// Removes a cell from the set.
    pub fn remove(&mut self, cell: Cell) {
        self.0 &= !(1 << cell.index());
    }

    /// Number of cells in the set.
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Checks if the set is empty.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Checks if every cell of `other` is also in this set.
    pub fn contains_all(self, other: CellSet) -> bool {
        self.0 & other.0 == other.0
    }

    /// Checks if the two sets share no cells.
    pub fn is_disjoint(self, other: CellSet) -> bool {
        self.0 & other.0 == 0
    }

    /// The cells present in either set.
    pub fn union(self, other: CellSet) -> CellSet {
        CellSet(self.0 | other.0)
    }

    /// Iterates the cells in the set in index order.
    pub fn iter(self) -> impl Iterator<Item = Cell> {
        Cell::iter().filter(move |cell| self.contains(*cell))
    }
}

impl FromIterator<Cell> for CellSet {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        let mut set = CellSet::EMPTY;
        for cell in iter {
            set.insert(cell);
        }
        set
    }
}

impl<const N: usize> From<[Cell; N]> for CellSet {
    fn from(cells: [Cell; N]) -> Self {
        cells.into_iter().collect()
    }
}

impl std::fmt::Display for CellSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, cell) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", cell.index())?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for (index, cell) in Cell::ALL.iter().enumerate() {
            assert_eq!(cell.index(), index);
            assert_eq!(Cell::from_index(index), Some(*cell));
        }
        assert_eq!(Cell::from_index(9), None);
    }

    #[test]
    fn test_set_membership() {
        let mut set = CellSet::EMPTY;
        assert!(set.is_empty());

        set.insert(Cell::Center);
        set.insert(Cell::TopLeft);
        assert_eq!(set.len(), 2);
        assert!(set.contains(Cell::Center));
        assert!(!set.contains(Cell::BottomRight));

        set.remove(Cell::Center);
        assert!(!set.contains(Cell::Center));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_superset_and_disjoint() {
        let line = CellSet::from([Cell::TopLeft, Cell::TopCenter, Cell::TopRight]);
        let owned: CellSet = [Cell::TopLeft, Cell::TopCenter, Cell::TopRight, Cell::Center]
            .into_iter()
            .collect();

        assert!(owned.contains_all(line));
        assert!(!line.contains_all(owned));
        assert!(line.is_disjoint(CellSet::from([
            Cell::BottomLeft,
            Cell::BottomCenter,
            Cell::BottomRight
        ])));
        assert_eq!(line.union(owned), owned);
    }

    #[test]
    fn test_iter_in_index_order() {
        let set = CellSet::from([Cell::BottomRight, Cell::TopLeft, Cell::Center]);
        let cells: Vec<_> = set.iter().collect();
        assert_eq!(cells, vec![Cell::TopLeft, Cell::Center, Cell::BottomRight]);
    }

    #[test]
    fn test_all_is_full() {
        assert_eq!(CellSet::ALL.len(), 9);
        assert_eq!(Cell::ALL.into_iter().collect::<CellSet>(), CellSet::ALL);
    }
}
