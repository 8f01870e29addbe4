// ABOUTME: Option grid selection model
// ABOUTME: Tracks the applied and selected cells of a three-column picker grid

use serde::Serialize;

use crate::error::{OverlayError, Result};

pub const GRID_COLUMNS: usize = 3;

/// Cells whose activated marker changed after a click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridClick {
    pub deactivated: Option<usize>,
    pub activated: usize,
}

/// A picker grid. The selection starts on the applied item and follows clicks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionGrid<T> {
    items: Vec<T>,
    applied: Option<usize>,
    selected: Option<usize>,
}

impl<T> OptionGrid<T> {
    pub fn new(items: Vec<T>, applied: Option<usize>) -> Self {
        let applied = applied.filter(|&index| index < items.len());
        Self {
            items,
            applied,
            selected: applied,
        }
    }

    pub fn columns(&self) -> usize {
        GRID_COLUMNS
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.items.chunks(GRID_COLUMNS)
    }

    pub fn applied(&self) -> Option<usize> {
        self.applied
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_item(&self) -> Option<&T> {
        self.selected.and_then(|index| self.items.get(index))
    }

    pub fn is_activated(&self, index: usize) -> bool {
        self.selected == Some(index)
    }

    /// Move the activated marker to `index`
    pub fn click(&mut self, index: usize) -> Result<GridClick> {
        if index >= self.items.len() {
            return Err(OverlayError::UnknownChoice(format!("grid cell {}", index)));
        }

        let deactivated = self.selected.filter(|&previous| previous != index);
        self.selected = Some(index);

        Ok(GridClick {
            deactivated,
            activated: index,
        })
    }

    /// Record that the selected item was applied
    pub fn mark_applied(&mut self) {
        self.applied = self.selected;
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn grid(applied: Option<usize>) -> OptionGrid<&'static str> {
        OptionGrid::new(vec!["a", "b", "c", "d", "e"], applied)
    }

    #[test]
    fn test_selection_starts_on_applied() {
        let grid = grid(Some(3));
        assert_eq!(grid.selected(), Some(3));
        assert!(grid.is_activated(3));
        assert!(!grid.is_activated(0));
        assert_eq!(grid.selected_item(), Some(&"d"));
    }

    #[test]
    fn test_out_of_range_applied_is_dropped() {
        let grid = grid(Some(30));
        assert_eq!(grid.applied(), None);
        assert_eq!(grid.selected(), None);
    }

    #[rstest]
    #[case(Some(1), 4, Some(1))]
    #[case(Some(1), 1, None)]
    #[case(None, 0, None)]
    fn test_click_moves_marker(
        #[case] applied: Option<usize>,
        #[case] index: usize,
        #[case] deactivated: Option<usize>,
    ) {
        let mut grid = grid(applied);

        let click = grid.click(index).unwrap();

        assert_eq!(click, GridClick { deactivated, activated: index });
        assert_eq!((0..grid.len()).filter(|&i| grid.is_activated(i)).count(), 1);
        assert_eq!(grid.applied(), applied);

        grid.mark_applied();
        assert_eq!(grid.applied(), Some(index));
    }

    #[test]
    fn test_click_outside_grid() {
        let mut grid = grid(Some(0));
        assert!(grid.click(5).is_err());
        assert_eq!(grid.selected(), Some(0));
    }

    #[test]
    fn test_rows_of_three() {
        let grid = grid(None);
        let rows: Vec<_> = grid.rows().collect();
        assert_eq!(rows, vec![&["a", "b", "c"][..], &["d", "e"][..]]);
        assert_eq!(grid.columns(), 3);
    }
}
