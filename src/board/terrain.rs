use crate::path::Cost;

/// The kinds of terrain that can be placed on a [`Board`](super::Board).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TerrainKind {
    Start,
    End,
    Wall,
    Water,
    Mud,
}

/// How expensive it is to enter a cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StepMultiplier {
    /// The base weight of a step into the cell is multiplied by this factor.
    Finite(Cost),
    /// The cell can never be entered.
    Impassable,
}

impl StepMultiplier {
    pub fn is_impassable(self) -> bool {
        matches!(self, StepMultiplier::Impassable)
    }

    /// The factor for walkable cells, `None` if impassable.
    pub fn factor(self) -> Option<Cost> {
        match self {
            StepMultiplier::Finite(factor) => Some(factor),
            StepMultiplier::Impassable => None,
        }
    }
}

impl TerrainKind {
    pub const ALL: [TerrainKind; 5] = [
        TerrainKind::Start,
        TerrainKind::End,
        TerrainKind::Wall,
        TerrainKind::Water,
        TerrainKind::Mud,
    ];

    pub fn multiplier(self) -> StepMultiplier {
        use TerrainKind::*;
        match self {
            Start | End => StepMultiplier::Finite(1.0),
            Wall => StepMultiplier::Impassable,
            Water => StepMultiplier::Finite(2.0),
            Mud => StepMultiplier::Finite(8.0),
        }
    }

    /// Whether a board may hold at most one cell of this kind.
    pub fn is_exclusive(self) -> bool {
        matches!(self, TerrainKind::Start | TerrainKind::End)
    }

    pub fn label(self) -> &'static str {
        use TerrainKind::*;
        match self {
            Start => "Start Point",
            End => "End Point",
            Wall => "Wall",
            Water => "Water",
            Mud => "Mud",
        }
    }

    /// The character used for this kind in the text board format.
    pub fn symbol(self) -> char {
        use TerrainKind::*;
        match self {
            Start => 'S',
            End => 'E',
            Wall => '#',
            Water => '~',
            Mud => '%',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<TerrainKind> {
        TerrainKind::ALL.into_iter().find(|kind| kind.symbol() == symbol)
    }
}

impl std::fmt::Display for TerrainKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
