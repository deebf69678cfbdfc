//! Integration test: best score on disk
//!
//! Uses a temporary scores file so the user's ~/.skyhop is never touched.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use skyhop::store::{open_or_memory, BestScoreStore, JsonFileStore};
use skyhop::{ArcadeEngine, GameConfig, Phase};

fn open_field() -> GameConfig {
    GameConfig {
        gap_height: 500.0,
        gap_margin: 0.0,
        ..GameConfig::default()
    }
}

#[test]
fn test_best_score_reloads_in_new_engine() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scores.json");

    let mut engine = ArcadeEngine::new(
        open_field(),
        JsonFileStore::at(path.clone()),
        ChaCha8Rng::seed_from_u64(21),
    );
    assert_eq!(engine.best_score(), 0);
    engine.start();

    let mut tick = 0u64;
    while engine.score() < 2 {
        if tick % 20 == 0 {
            engine.jump();
        }
        engine.run_pending_frame(tick as f64 * 16.0);
        tick += 1;
        assert!(tick < 2_000);
    }
    assert!(path.exists());

    let reloaded = ArcadeEngine::new(
        open_field(),
        JsonFileStore::at(path),
        ChaCha8Rng::seed_from_u64(22),
    );
    assert_eq!(reloaded.best_score(), 2);
    assert_eq!(reloaded.phase(), Phase::Idle);
    assert_eq!(reloaded.hud().best, "Best: 2");
}

#[test]
fn test_other_keys_survive_a_save() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scores.json");

    let mut store = JsonFileStore::at(path.clone());
    store.save("otherGame", 9).unwrap();
    store.save("flappyHighScore", 3).unwrap();

    let store = JsonFileStore::at(path);
    assert_eq!(store.load("otherGame"), Some(9));
    assert_eq!(store.load("flappyHighScore"), Some(3));
}

#[test]
fn test_corrupt_scores_file_reads_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scores.json");
    std::fs::write(&path, "not json").unwrap();

    let engine = ArcadeEngine::new(
        GameConfig::default(),
        JsonFileStore::at(path),
        ChaCha8Rng::seed_from_u64(23),
    );
    assert_eq!(engine.best_score(), 0);
}

#[test]
fn test_unwritable_store_does_not_stop_play() {
    let dir = tempfile::tempdir().unwrap();
    // A directory where the file should be makes every write fail
    let path = dir.path().join("scores.json");
    std::fs::create_dir(&path).unwrap();

    let mut engine = ArcadeEngine::new(
        open_field(),
        JsonFileStore::at(path),
        ChaCha8Rng::seed_from_u64(24),
    );
    engine.start();
    let mut tick = 0u64;
    while engine.score() < 1 {
        if tick % 20 == 0 {
            engine.jump();
        }
        engine.run_pending_frame(tick as f64 * 16.0);
        tick += 1;
        assert!(tick < 1_000);
    }
    assert!(engine.is_running());
    assert_eq!(engine.best_score(), 1);
}

#[test]
fn test_game_runs_on_memory_when_scores_dir_cannot_be_made() {
    let dir = tempfile::tempdir().unwrap();
    // A plain file where the data directory should go
    let blocker = dir.path().join("home");
    std::fs::write(&blocker, "").unwrap();

    let store = open_or_memory(Ok(blocker.join("scores.json")));
    let mut engine = ArcadeEngine::new(open_field(), store, ChaCha8Rng::seed_from_u64(25));
    engine.start();
    let mut tick = 0u64;
    while engine.score() < 1 {
        if tick % 20 == 0 {
            engine.jump();
        }
        engine.run_pending_frame(tick as f64 * 16.0);
        tick += 1;
        assert!(tick < 1_000);
    }
    assert_eq!(engine.store().load("flappyHighScore"), Some(1));
}
