//! Fixed lookup tables for the wheel. Arrays indexed by `type - 1`
//! unless noted otherwise.

/// Clockwise placement order, starting at 12 o'clock.
pub const WHEEL_ORDER: [u8; 9] = [9, 1, 2, 3, 4, 5, 6, 7, 8];

/// Direction of growth.
pub const INTEGRATION: [u8; 9] = [7, 4, 6, 1, 8, 9, 5, 2, 3];

/// Direction of stress.
pub const DISINTEGRATION: [u8; 9] = [4, 8, 9, 2, 7, 3, 1, 5, 6];

pub const TYPE_NAMES: [&str; 9] = [
    "Reformer",
    "Helper",
    "Achiever",
    "Individualist",
    "Investigator",
    "Loyalist",
    "Enthusiast",
    "Challenger",
    "Peacemaker",
];

/// Inner figure edges: the hexad 1-4-2-8-5-7-1 followed by the triangle 3-6-9-3.
pub const INNER_LINES: [(u8, u8); 9] = [
    (1, 4),
    (4, 2),
    (2, 8),
    (8, 5),
    (5, 7),
    (7, 1),
    (3, 6),
    (6, 9),
    (9, 3),
];
