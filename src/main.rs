use bomi_progress::build_info;
use bomi_progress::core::constants::SCORE_BOARD_HOME_ENTRIES;
use bomi_progress::utils::now_millis;
use bomi_progress::{
    Config, Difficulty, FileStore, ProgressEvents, ProgressStore, ScoreBoard, StorageError,
};
use std::io;
use std::process;
use tracing_subscriber::EnvFilter;

const PROGRESS_BAR_WIDTH: usize = 20;

fn print_help() {
    println!("Bomi - progress tracker for Bomi's math games\n");
    println!("Usage: bomi <command> [args]\n");
    println!("Commands:");
    println!("  status                            Show level, experience and totals");
    println!("  correct <game> [easy|medium|hard] Record a correct answer");
    println!("  wrong <game>                      Record a wrong answer");
    println!("  complete <game> <score> [name]    Record a finished game");
    println!("  perfect <score> <total>           Report a session result for the perfect badge");
    println!("  achievements                      List achievements");
    println!("  scores                            Show the score board");
    println!("  reset                             Erase all progress");
    println!("  --version                         Show version information");
    println!("  --help                            Show this help message");
    println!("\nProgress is kept in ~/.bomi (override with BOMI_DATA_DIR);");
    println!("BOMI_PROGRESS_KEY selects the progress record within it.");
}

fn usage_error(message: &str) -> ! {
    eprintln!("{}", message);
    eprintln!("Run 'bomi --help' for usage.");
    process::exit(2);
}

fn to_io(e: StorageError) -> io::Error {
    match e {
        StorageError::Io(e) => e,
        other => io::Error::new(io::ErrorKind::Other, other),
    }
}

fn parse_number(arg: Option<&String>, what: &str) -> u32 {
    match arg.map(|s| s.parse::<u32>()) {
        Some(Ok(n)) => n,
        Some(Err(_)) => usage_error(&format!("Invalid {}: expected a whole number", what)),
        None => usage_error(&format!("Missing {}", what)),
    }
}

fn required<'a>(arg: Option<&'a String>, what: &str) -> &'a str {
    match arg {
        Some(s) if !s.trim().is_empty() => s.as_str(),
        _ => usage_error(&format!("Missing {}", what)),
    }
}

fn progress_bar(percent: u32) -> String {
    let filled = (percent.min(100) as usize * PROGRESS_BAR_WIDTH) / 100;
    format!(
        "[{}{}] {}%",
        "#".repeat(filled),
        ".".repeat(PROGRESS_BAR_WIDTH - filled),
        percent
    )
}

fn print_status(store: &ProgressStore<FileStore>) {
    let progress = store.progress();
    match store.current_level() {
        Some(level) => println!(
            "Level {} - {} {}\n  {}",
            level.level, level.name, level.emoji, level.description
        ),
        None => println!("Level {}", progress.level),
    }

    let to_next = store.experience_to_next_level();
    if to_next == 0 {
        println!("Experience: {} (max level)", progress.experience);
    } else {
        println!("Experience: {} ({} to next level)", progress.experience, to_next);
    }
    println!("{}", progress_bar(store.level_progress_percent()));
    println!(
        "Correct answers: {} | Games played: {} | Achievements: {}/{}",
        progress.total_correct_answers,
        progress.total_games_played,
        progress.unlocked_count(),
        progress.achievements.len()
    );

    for (game_type, stats) in &progress.game_stats {
        let accuracy = stats
            .accuracy()
            .map(|a| format!("{:.0}%", a))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "  {:<16} {:>4}/{:<4} correct ({}), best {}, {} games",
            game_type,
            stats.correct_answers,
            stats.total_answers,
            accuracy,
            stats.best_score,
            stats.games_played
        );
    }
}

/// Print queued notifications and acknowledge them.
fn show_notifications(store: &mut ProgressStore<FileStore>, events: &ProgressEvents) {
    if events.is_empty() {
        return;
    }
    if let Some(level) = store.pending_level_up() {
        match store.current_level() {
            Some(def) => println!("🎊 Level up! Now level {} - {} {}", level, def.name, def.emoji),
            None => println!("🎊 Level up! Now level {}", level),
        }
        store.acknowledge_level_up();
    }
    while let Some(achievement) = store.acknowledge_achievement() {
        println!(
            "{} Achievement unlocked: {} - {}",
            achievement.emoji, achievement.name, achievement.description
        );
    }
}

fn print_achievements(store: &ProgressStore<FileStore>) {
    let progress = store.progress();
    println!(
        "Achievements: {}/{} ({:.0}%)",
        progress.unlocked_count(),
        progress.achievements.len(),
        progress.unlock_percentage()
    );
    for achievement in &progress.achievements {
        let mark = if achievement.unlocked { "✔" } else { " " };
        println!(
            "  [{}] {} {:<20} {}",
            mark, achievement.emoji, achievement.name, achievement.description
        );
    }
}

fn print_scores(board: &ScoreBoard) {
    if board.is_empty() {
        println!("No scores yet. Play a game!");
        return;
    }
    for (rank, record) in board.top(SCORE_BOARD_HOME_ENTRIES).iter().enumerate() {
        println!(
            "{:>2}. {:<12} {:>4}  {:<16} {}",
            rank + 1,
            record.name,
            record.score,
            record.game_type,
            record.date
        );
    }
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let command = args.get(1).map(String::as_str).unwrap_or("status");

    match command {
        "--version" | "-v" => {
            println!("{}", build_info::version_line());
            return Ok(());
        }
        "--help" | "-h" => {
            print_help();
            return Ok(());
        }
        _ => {}
    }

    let config = Config::from_env().map_err(to_io)?;
    let file_store = config.open_file_store().map_err(to_io)?;
    let mut store = ProgressStore::open_with_key(file_store.clone(), config.progress_key.clone());

    match command {
        "status" => print_status(&store),
        "correct" => {
            let game_type = required(args.get(2), "game type");
            let difficulty = match args.get(3) {
                Some(name) => Difficulty::from_name(name).unwrap_or_else(|| {
                    usage_error(&format!("Unknown difficulty: {}", name))
                }),
                None => Difficulty::default(),
            };
            let events = store.on_correct_answer(game_type, difficulty);
            println!(
                "Correct! +{} exp ({} total)",
                difficulty.reward(),
                store.progress().experience
            );
            show_notifications(&mut store, &events);
        }
        "wrong" => {
            let game_type = required(args.get(2), "game type");
            store.on_incorrect_answer(game_type);
            println!("Not quite. Keep trying!");
        }
        "complete" => {
            let game_type = required(args.get(2), "game type");
            let score = parse_number(args.get(3), "score");
            let events = store.on_game_completed(game_type, score);
            println!("Game finished with score {}", score);
            show_notifications(&mut store, &events);

            let name = args.get(4).map(String::as_str).unwrap_or_default();
            let mut scores_store = file_store;
            let mut board = ScoreBoard::load(&scores_store);
            if let Some(rank) = board.record(name, game_type, score, now_millis()) {
                println!("Score board rank: {}", rank + 1);
            }
            if let Some(best) = board.best_for(game_type) {
                println!("Best {} score: {} by {}", game_type, best.score, best.name);
            }
            board.save(&mut scores_store).map_err(to_io)?;
        }
        "perfect" => {
            let score = parse_number(args.get(2), "score");
            let total = parse_number(args.get(3), "total");
            let events = store.on_perfect_score(score, total);
            if events.unlocked.is_empty() {
                println!("{}/{} recorded", score, total);
            }
            show_notifications(&mut store, &events);
        }
        "achievements" => print_achievements(&store),
        "scores" => print_scores(&ScoreBoard::load(&file_store)),
        "reset" => {
            store.reset_progress();
            println!("Progress reset.");
        }
        other => usage_error(&format!("Unknown command: {}", other)),
    }

    Ok(())
}
