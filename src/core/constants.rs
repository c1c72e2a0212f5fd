// Storage keys
pub const PROGRESS_STORAGE_KEY: &str = "bomi_user_progress";
pub const SCORES_STORAGE_KEY: &str = "mathGameScores";

// Data directory
pub const DATA_DIR_ENV: &str = "BOMI_DATA_DIR";
pub const PROGRESS_KEY_ENV: &str = "BOMI_PROGRESS_KEY";
pub const DATA_DIR_NAME: &str = ".bomi";

// Experience rewards per correct answer
pub const EXP_EASY: u32 = 5;
pub const EXP_MEDIUM: u32 = 8;
pub const EXP_HARD: u32 = 12;

// Perfect score: every question right in a session of at least this many
pub const PERFECT_SCORE_MIN_QUESTIONS: u32 = 10;

// Score board
pub const SCORE_BOARD_CAPACITY: usize = 50;
pub const SCORE_BOARD_HOME_ENTRIES: usize = 5;
