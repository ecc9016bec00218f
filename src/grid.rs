use std::fmt;

use crate::tile::TileType;

/// Rectangular tile map for one dungeon level.
///
/// Cells are addressed as `(x, y)` = `(column, row)` with signed coordinates so
/// neighbour arithmetic can step off the edge; out-of-range lookups return `None`.
/// The map is never mutated once the generator hands it over.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    pub width: usize,
    pub height: usize,
    tiles: Vec<TileType>,
}

impl Grid {
    /// A map where every cell is `tile`.
    pub(crate) fn filled(width: usize, height: usize, tile: TileType) -> Self {
        Self {
            width,
            height,
            tiles: vec![tile; width * height],
        }
    }

    /// Build a map from rows of glyphs (`#` wall, anything else floor).
    ///
    /// Rows shorter than the first are padded with walls.
    pub fn from_ascii(rows: &[&str]) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.chars().count());
        let mut grid = Self::filled(width, height, TileType::Wall);
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().take(width).enumerate() {
                if ch != '#' {
                    grid.set(x as i32, y as i32, TileType::Floor);
                }
            }
        }
        grid
    }

    pub fn get(&self, x: i32, y: i32) -> Option<TileType> {
        if !self.in_bounds(x, y) {
            return None;
        }
        Some(self.tiles[y as usize * self.width + x as usize])
    }

    pub(crate) fn set(&mut self, x: i32, y: i32, tile: TileType) {
        if self.in_bounds(x, y) {
            self.tiles[y as usize * self.width + x as usize] = tile;
        }
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// True for cells with at least one cell of margin from every edge.
    pub fn is_interior(&self, x: i32, y: i32) -> bool {
        x >= 1 && y >= 1 && (x as usize) + 1 < self.width && (y as usize) + 1 < self.height
    }

    pub fn is_floor(&self, x: i32, y: i32) -> bool {
        self.get(x, y) == Some(TileType::Floor)
    }

    /// Center cell, where the walk starts and the player spawns.
    pub fn center(&self) -> (i32, i32) {
        ((self.width / 2) as i32, (self.height / 2) as i32)
    }

    /// Number of interior cells, the most floor the walk can ever carve.
    pub fn interior_cells(&self) -> usize {
        self.width.saturating_sub(2) * self.height.saturating_sub(2)
    }

    pub fn floor_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.is_walkable()).count()
    }

    /// All floor cells in row-major order.
    pub fn floor_tiles(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.tiles
            .iter()
            .enumerate()
            .filter(|(_, t)| t.is_walkable())
            .map(move |(i, _)| ((i % self.width) as i32, (i / self.width) as i32))
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid {}x{}", self.width, self.height)?;
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.tiles.chunks(self.width.max(1)) {
            let line: String = row.iter().map(TileType::glyph).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_bounds_is_none() {
        let grid = Grid::filled(4, 3, TileType::Wall);
        assert_eq!(grid.get(-1, 0), None);
        assert_eq!(grid.get(4, 0), None);
        assert_eq!(grid.get(0, 3), None);
        assert_eq!(grid.get(3, 2), Some(TileType::Wall));
    }

    #[test]
    fn test_from_ascii() {
        let grid = Grid::from_ascii(&["###", "#.#", "###"]);
        assert_eq!(grid.width, 3);
        assert_eq!(grid.height, 3);
        assert!(grid.is_floor(1, 1));
        assert!(!grid.is_floor(0, 1));
        assert_eq!(grid.floor_count(), 1);
        assert_eq!(grid.floor_tiles().collect::<Vec<_>>(), vec![(1, 1)]);
    }

    #[test]
    fn test_interior_excludes_border() {
        let grid = Grid::filled(5, 5, TileType::Wall);
        assert!(!grid.is_interior(0, 2));
        assert!(!grid.is_interior(4, 2));
        assert!(!grid.is_interior(2, 4));
        assert!(grid.is_interior(1, 1));
        assert!(grid.is_interior(3, 3));
        assert_eq!(grid.interior_cells(), 9);
    }

    #[test]
    fn test_display_round_trips_glyphs() {
        let rows = ["####", "#..#", "####"];
        let grid = Grid::from_ascii(&rows);
        assert_eq!(grid.to_string(), "####\n#..#\n####\n");
    }
}
