/// Terrain kind of a single map cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileType {
    Floor,
    Wall,
}

impl TileType {
    pub fn is_walkable(&self) -> bool {
        matches!(self, TileType::Floor)
    }

    /// Glyph used by `Grid`'s text dump
    pub fn glyph(&self) -> char {
        match self {
            TileType::Floor => '.',
            TileType::Wall => '#',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_floor_is_walkable() {
        assert!(TileType::Floor.is_walkable());
        assert!(!TileType::Wall.is_walkable());
    }
}
