//! Draw detection.

use crate::cell::CellSet;
use tracing::instrument;

/// Checks whether no cells remain to claim.
///
/// An exhausted board with no winning line is a draw.
#[instrument]
pub fn is_exhausted(available: CellSet) -> bool {
    available.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Cell;
    use crate::rules::winning_line;

    #[test]
    fn test_full_board_is_exhausted() {
        assert!(is_exhausted(CellSet::EMPTY));
        assert!(!is_exhausted(CellSet::ALL));
        assert!(!is_exhausted(CellSet::from([Cell::Center])));
    }

    #[test]
    fn test_draw_scenario() {
        // X O X / O X X / O X O
        let user: CellSet = [
            Cell::TopLeft,
            Cell::TopRight,
            Cell::Center,
            Cell::MiddleRight,
            Cell::BottomCenter,
        ]
        .into_iter()
        .collect();
        let computer: CellSet = [
            Cell::TopCenter,
            Cell::MiddleLeft,
            Cell::BottomLeft,
            Cell::BottomRight,
        ]
        .into_iter()
        .collect();

        assert!(is_exhausted(CellSet::ALL.iter().filter(|c| !user.contains(*c) && !computer.contains(*c)).collect()));
        assert_eq!(winning_line(user), None);
        assert_eq!(winning_line(computer), None);
    }
}
