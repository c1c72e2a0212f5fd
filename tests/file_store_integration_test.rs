//! Integration test: progress and scores persisted through the file store
//!
//! Uses a unique temporary directory per test so runs never touch the real
//! ~/.bomi directory.

use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

use bomi_progress::core::constants::{PROGRESS_STORAGE_KEY, SCORES_STORAGE_KEY};
use bomi_progress::{
    AchievementId, Config, Difficulty, FileStore, KeyValueStore, ProgressStore, ScoreBoard,
    UserProgress,
};

fn temp_data_dir() -> PathBuf {
    static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);
    let test_id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
    std::env::temp_dir().join(format!(
        "bomi-integration-{}-{}",
        std::process::id(),
        test_id
    ))
}

#[test]
fn test_progress_survives_a_new_session() {
    let dir = temp_data_dir();
    {
        let mut store = ProgressStore::open(FileStore::new(&dir).unwrap());
        for _ in 0..12 {
            store.on_correct_answer("addition", Difficulty::Easy);
        }
        store.on_game_completed("addition", 12);
        store.on_perfect_score(10, 10);
    }

    let store = ProgressStore::open(FileStore::new(&dir).unwrap());
    let progress = store.progress();
    assert_eq!(progress.experience, 60);
    assert_eq!(progress.level, 2);
    assert_eq!(progress.total_games_played, 1);
    assert_eq!(progress.stats("addition").unwrap().best_score, 12);
    assert!(progress.is_unlocked(AchievementId::Perfect10));
    assert!(progress.is_unlocked(AchievementId::Streak10));

    fs::remove_dir_all(dir).ok();
}

#[test]
fn test_save_load_roundtrip_is_lossless() {
    let dir = temp_data_dir();
    let mut store = ProgressStore::open(FileStore::new(&dir).unwrap());
    store.on_correct_answer("multiplication", Difficulty::Hard);
    store.on_incorrect_answer("clock_set");
    store.on_game_completed("pattern", 8);
    let saved = store.progress().clone();

    let reloaded = ProgressStore::open(FileStore::new(&dir).unwrap());
    assert_eq!(reloaded.progress(), &saved);

    fs::remove_dir_all(dir).ok();
}

#[test]
fn test_corrupt_file_starts_fresh() {
    let dir = temp_data_dir();
    let file_store = FileStore::new(&dir).unwrap();
    fs::write(file_store.path_for(PROGRESS_STORAGE_KEY), "{ definitely not json").unwrap();

    let mut store = ProgressStore::open(file_store);
    assert_eq!(store.progress(), &UserProgress::default());

    // The next event overwrites the corrupt file with a valid record
    store.on_correct_answer("addition", Difficulty::Easy);
    let reloaded = ProgressStore::open(FileStore::new(&dir).unwrap());
    assert_eq!(reloaded.progress().experience, 5);

    fs::remove_dir_all(dir).ok();
}

#[test]
fn test_record_from_older_catalog_gains_new_achievements() {
    let dir = temp_data_dir();
    let mut file_store = FileStore::new(&dir).unwrap();

    let mut json = serde_json::to_value(UserProgress::default()).unwrap();
    json["achievements"]
        .as_array_mut()
        .unwrap()
        .retain(|a| a["id"] == "first_correct");
    json["achievements"][0]["unlocked"] = serde_json::json!(true);
    json["achievements"][0]["unlockedAt"] = serde_json::json!(1_650_000_000_000i64);
    json["experience"] = serde_json::json!(5);
    json["totalCorrectAnswers"] = serde_json::json!(1);
    file_store
        .set(PROGRESS_STORAGE_KEY, json.to_string().as_bytes())
        .unwrap();

    let store = ProgressStore::open(file_store);
    let progress = store.progress();
    assert_eq!(progress.achievements.len(), AchievementId::ALL.len());
    assert_eq!(
        progress
            .achievement(AchievementId::FirstCorrect)
            .and_then(|a| a.unlocked_at),
        Some(1_650_000_000_000)
    );
    assert!(!progress.is_unlocked(AchievementId::Level10));

    fs::remove_dir_all(dir).ok();
}

#[test]
fn test_scores_share_the_data_directory() {
    let dir = temp_data_dir();
    let mut file_store = FileStore::new(&dir).unwrap();

    let mut board = ScoreBoard::load(&file_store);
    assert!(board.is_empty());
    board.record("Bomi", "addition", 9, 1_700_000_000_000);
    board.record("Mina", "clock_set", 10, 1_700_000_000_500);
    board.save(&mut file_store).unwrap();

    assert!(file_store.path_for(SCORES_STORAGE_KEY).exists());
    let reloaded = ScoreBoard::load(&FileStore::new(&dir).unwrap());
    assert_eq!(reloaded, board);
    assert_eq!(reloaded.top(1)[0].name, "Mina");

    fs::remove_dir_all(dir).ok();
}

#[test]
fn test_config_points_file_store_at_override() {
    let dir = temp_data_dir();
    let dir_str = dir.to_string_lossy().to_string();
    let config = Config::from_lookup(|name| (name == "BOMI_DATA_DIR").then(|| dir_str.clone()))
        .unwrap();

    let store = config.open_file_store().unwrap();
    assert_eq!(store.dir(), dir.as_path());
    assert!(dir.is_dir());

    fs::remove_dir_all(dir).ok();
}
