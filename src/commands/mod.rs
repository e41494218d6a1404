pub mod contact;
pub mod show;

use std::io::IsTerminal;

use rand::rngs::StdRng;
use rand::SeedableRng;

use neonfolio_utils::{Config, Section, ThemeContext};

/// Single-threaded: everything the page runs is timers
pub fn runtime() -> std::io::Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
}

/// Seeded from the config when it pins one, otherwise from the OS
pub fn rng(config: &Config) -> StdRng {
    match config.seed {
        Some(seed) => {
            log::debug!("Using fixed seed {}", seed);
            StdRng::seed_from_u64(seed)
        },
        None => StdRng::from_entropy(),
    }
}

/// Colour only when stdout is a terminal
pub fn theme_context(config: &Config) -> ThemeContext {
    if std::io::stdout().is_terminal() {
        ThemeContext::new(config.theme)
    } else {
        ThemeContext::plain(config.theme)
    }
}

pub fn section_lines() -> Vec<String> {
    Section::ALL
        .iter()
        .map(|section| format!("#{} -> {}", section.anchor(), section.title()))
        .collect()
}

pub fn list_sections() {
    for line in section_lines() {
        println!("{}", line);
    }
}

pub fn print_config(config: &Config, dump: bool) -> anyhow::Result<()> {
    if dump {
        println!("{}", serde_json::to_string_pretty(config)?);
        return Ok(());
    }
    let seed = config
        .seed
        .map(|seed| seed.to_string())
        .unwrap_or_else(|| "random".to_string());
    println!("theme:    {}", config.theme);
    println!("seed:     {}", seed);
    println!(
        "preloader: progress every {:?}, completes {:?} after 100%",
        config.preloader.progress_interval(),
        config.preloader.completion_delay()
    );
    println!(
        "contact:  sends in {:?}, resets {:?} after success",
        config.contact.send_delay(),
        config.contact.reset_delay()
    );
    Ok(())
}
