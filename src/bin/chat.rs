use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};

use calm_mind::{EmotionalEngine, Role, Settings};

fn run() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let settings = Settings::load()?;
    let mut engine = EmotionalEngine::with_config(settings.engine);

    println!("{}", engine.get_greeting());
    println!("(/history, /reset, /quit)");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read from stdin")?;
        match line.trim() {
            "" => continue,
            "/quit" => break,
            "/reset" => {
                engine.clear_history();
                println!("{}", engine.get_greeting());
            }
            "/history" => {
                for turn in engine.history() {
                    let who = match turn.role {
                        Role::User => "you",
                        Role::Assistant => "calm-mind",
                    };
                    println!("[{}] {}: {}", turn.timestamp.format("%H:%M:%S"), who, turn.content);
                }
            }
            input => {
                let result = engine.process(input);
                println!("{}", result.message);
                if let Some(exercise) = result.suggested_exercise {
                    println!("  -> exercise: {}", exercise.as_str());
                }
            }
        }
        stdout.flush()?;
    }
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error in chat session: {:?}", e);
        std::process::exit(1);
    }
}
