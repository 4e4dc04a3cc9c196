//! CLI blackjack demo.

use std::io::{self, Write};
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use bitjack::{MemoryWallet, Phase, RevealSequence, Round, RoundSnapshot, Table, UserId};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .init();

    println!("Blackjack CLI demo (type 'q' to quit)");

    let user = UserId::new("demo-player");
    let mut wallet = MemoryWallet::new();
    wallet.fund(user.clone(), 500);
    let mut table = Table::new(wallet, user);

    loop {
        let balance = table.balance().unwrap_or(0);
        if balance == 0 {
            println!("You are out of money. Game over.");
            break;
        }

        let limit = balance.min(table.rules().max_wager);
        let Some(wager) = prompt_usize(&format!("\nBalance ${balance}. Wager (1-{limit}, 0 to quit): "))
        else {
            break;
        };

        if wager == 0 {
            println!("Goodbye.");
            break;
        }

        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();

        match table.start_round(wager, seed) {
            Ok(reveals) => play_reveals(reveals),
            Err(err) => {
                println!("Start error: {err}");
                continue;
            }
        }

        while table.phase() == Phase::AwaitingDecision {
            let menu = if table.round().is_some_and(Round::can_double) {
                "[h]it / [s]tand / [d]ouble"
            } else {
                "[h]it / [s]tand"
            };

            let action = prompt_line(&format!("Action ({menu}): "));
            let result = match action.as_str() {
                "h" | "hit" => table.hit(),
                "s" | "stand" => table.stand(),
                "d" | "double" => table.double_down(),
                "q" | "quit" => return,
                _ => {
                    println!("Unknown action.");
                    continue;
                }
            };

            match result {
                Ok(reveals) => play_reveals(reveals),
                Err(err) => println!("Wallet error: {err}"),
            }
        }
    }
}

/// Prints each snapshot with a short pause, standing in for the dealing
/// animation the sequence was designed to drive.
fn play_reveals(reveals: RevealSequence) {
    for snapshot in reveals {
        print_snapshot(&snapshot);
        thread::sleep(Duration::from_millis(600));
    }
}

fn print_snapshot(snapshot: &RoundSnapshot) {
    println!();
    println!(
        "Dealer: {} ({})",
        format_cards(&snapshot.dealer_cards),
        snapshot.dealer_score
    );
    println!(
        "Player: {} ({})",
        format_cards(&snapshot.player_cards),
        snapshot.player_score
    );
    if let Some(message) = snapshot.message {
        println!("{message}");
    }
}

fn format_cards(codes: &[String]) -> String {
    if codes.is_empty() {
        return "(no cards)".to_string();
    }
    codes.join(" ")
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn prompt_usize(prompt: &str) -> Option<usize> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<usize>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}
