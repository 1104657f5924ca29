//! Display functions for command results

use super::formatters::{create_progress_bar, spaced, tries_indicator, tries_label};
use crate::commands::FairnessReport;
use crate::engine::{GameState, Outcome, RoundEvent};
use crate::session::Submission;
use colored::Colorize;

/// Print the simple-mode welcome banner
pub fn print_banner(mistake_limit: u32) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "WORD SCRAMBLE".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!("\nUnscramble the word. You have {mistake_limit} tries per game.");
    println!(
        "Commands: {} next word, {} new game, {} exit\n",
        "skip".yellow(),
        "new".yellow(),
        "quit".yellow()
    );
}

pub fn print_goodbye() {
    println!("\n👋 Thanks for playing!\n");
}

/// Print the start (or failure) of a round
pub fn print_round(event: &RoundEvent) {
    match event {
        RoundEvent::Started { scrambled } => {
            println!(
                "🔀 Scrambled: {}\n",
                spaced(scrambled).bright_yellow().bold()
            );
        }
        RoundEvent::Failed { error } => {
            println!("{} {}\n", "❌".red(), error.user_message().red());
        }
    }
}

/// Print the outcome of one guess and any follow-up round
pub fn print_submission(submission: &Submission, state: &GameState) {
    let text = submission.outcome.status_text();
    match submission.outcome {
        Outcome::Incomplete => println!("{} {}\n", "⚠️".yellow(), text.yellow()),
        Outcome::Correct { .. } => {
            println!(
                "{} {}  Words guessed: {}\n",
                "✅".green(),
                text.green().bold(),
                state.success_count().to_string().green().bold()
            );
        }
        Outcome::Incorrect {
            mistake_count,
            mistake_limit,
        } => {
            println!(
                "{} {}  {} {}\n",
                "❌".red(),
                text.red(),
                tries_label(mistake_count, mistake_limit),
                tries_indicator(mistake_count, mistake_limit).red()
            );
        }
        Outcome::GameOver { .. } => {
            println!("\n{}", "═".repeat(60).red());
            println!(" {} ", "GAME OVER".red().bold());
            println!(" {text}");
            println!("{}\n", "═".repeat(60).red());
        }
    }

    if let Some(round) = &submission.round {
        print_round(round);
    }
}

/// Print a single scramble
pub fn print_scramble(word: &str, scrambled: &str) {
    println!(
        "{} → {}",
        word.bright_white(),
        scrambled.bright_yellow().bold()
    );
}

/// Print the result of a fairness run
pub fn print_fairness_report(report: &FairnessReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "SCRAMBLE FAIRNESS:".bright_cyan().bold(),
        report.word.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Run:".bright_cyan().bold());
    println!("   Samples:          {}", report.samples);
    println!(
        "   Unchanged:        {} ({:.2}%)",
        report.identity_count,
        report.identity_rate() * 100.0
    );
    println!(
        "   Max deviation:    {}",
        format!("{:.4}", report.max_deviation).bright_yellow().bold()
    );
    println!("   Time taken:       {:.2}s", report.duration.as_secs_f64());

    if report.samples == 0 {
        return;
    }

    println!("\n📈 {}", "Letter share per position:".bright_cyan().bold());
    let mut letters: Vec<char> = report.word.chars().collect();
    letters.sort_unstable();
    letters.dedup();

    for ch in letters {
        println!("   {}", ch.to_string().bold());
        for (pos, observed) in report.positions.iter().enumerate() {
            let share = observed.get(&ch).copied().unwrap_or(0) as f64 / report.samples as f64;
            println!(
                "     {}: {} {:5.1}%",
                pos + 1,
                create_progress_bar(share, 1.0, 30).green(),
                share * 100.0
            );
        }
    }
}
