//! Static level table.

use super::types::LevelDef;

/// All levels, ordered by `level` ascending. Thresholds strictly increase.
pub const LEVELS: &[LevelDef] = &[
    LevelDef {
        level: 1,
        name: "Math Beginner",
        description: "Taking the very first step into math!",
        emoji: "🌱",
        required_exp: 0,
    },
    LevelDef {
        level: 2,
        name: "Math Seedling",
        description: "Growing a little bit every day!",
        emoji: "🌿",
        required_exp: 50,
    },
    LevelDef {
        level: 3,
        name: "Math Sprout",
        description: "Learning new things!",
        emoji: "🌱",
        required_exp: 120,
    },
    LevelDef {
        level: 4,
        name: "Math Kid",
        description: "Math is getting fun!",
        emoji: "👶",
        required_exp: 220,
    },
    LevelDef {
        level: 5,
        name: "Math Student",
        description: "Studying really hard!",
        emoji: "🎒",
        required_exp: 350,
    },
    LevelDef {
        level: 6,
        name: "Math Friend",
        description: "Becoming friends with math!",
        emoji: "🤝",
        required_exp: 520,
    },
    LevelDef {
        level: 7,
        name: "Math Explorer",
        description: "Exploring brand new problems!",
        emoji: "🔍",
        required_exp: 720,
    },
    LevelDef {
        level: 8,
        name: "Math Wizard",
        description: "Learning the magic of math!",
        emoji: "🧙‍♂️",
        required_exp: 950,
    },
    LevelDef {
        level: 9,
        name: "Math Hero",
        description: "A true hero of math!",
        emoji: "🦸‍♂️",
        required_exp: 1220,
    },
    LevelDef {
        level: 10,
        name: "Math Doctor",
        description: "A doctor of mathematics!",
        emoji: "👨‍🎓",
        required_exp: 1550,
    },
];
