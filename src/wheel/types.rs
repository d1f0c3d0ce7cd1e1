use crate::wheel::error::WheelError;
use crate::wheel::tables::{DISINTEGRATION, INTEGRATION, TYPE_NAMES, WHEEL_ORDER};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the nine Enneagram types. Always holds a value in `1..=9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct TypeId(u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Triad {
    Gut,
    Heart,
    Head,
}

impl Triad {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gut => "gut",
            Self::Heart => "heart",
            Self::Head => "head",
        }
    }
}

impl fmt::Display for Triad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TypeId {
    /// All types in numeric order.
    pub const ALL: [TypeId; 9] = [
        TypeId(1),
        TypeId(2),
        TypeId(3),
        TypeId(4),
        TypeId(5),
        TypeId(6),
        TypeId(7),
        TypeId(8),
        TypeId(9),
    ];

    pub fn new(raw: u8) -> Result<Self, WheelError> {
        if (1..=9).contains(&raw) {
            Ok(Self(raw))
        } else {
            Err(WheelError::InvalidType(raw))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    fn table_index(self) -> usize {
        usize::from(self.0 - 1)
    }

    /// Position in the clockwise wheel order; 9 sits at index 0.
    pub fn order_index(self) -> usize {
        usize::from(self.0 % 9)
    }

    pub fn integration(self) -> TypeId {
        TypeId(INTEGRATION[self.table_index()])
    }

    pub fn disintegration(self) -> TypeId {
        TypeId(DISINTEGRATION[self.table_index()])
    }

    /// Neighbours on the circle, counter-clockwise first.
    pub fn wings(self) -> [TypeId; 2] {
        let index = self.order_index();
        [
            TypeId(WHEEL_ORDER[(index + 8) % 9]),
            TypeId(WHEEL_ORDER[(index + 1) % 9]),
        ]
    }

    pub fn name(self) -> &'static str {
        TYPE_NAMES[self.table_index()]
    }

    pub fn triad(self) -> Triad {
        match self.0 {
            8 | 9 | 1 => Triad::Gut,
            2..=4 => Triad::Heart,
            _ => Triad::Head,
        }
    }
}

impl TryFrom<u8> for TypeId {
    type Error = WheelError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<TypeId> for u8 {
    fn from(type_id: TypeId) -> Self {
        type_id.0
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
