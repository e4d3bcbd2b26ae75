//! CLI Flip 7 example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use flip7::{
    Card, DrawOutcome, Game, GameOptions, JsonLinesLogger, Player, TurnChoice, TurnOutcome,
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    println!("Flip 7 CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = GameOptions::default();
    let mut game = Game::new(options, seed);

    let logger = match JsonLinesLogger::in_dir("logs") {
        Ok(logger) => {
            println!("Logging to {}", logger.path().display());
            Some(logger)
        }
        Err(err) => {
            println!("Event log disabled: {err}");
            None
        }
    };
    if let Some(logger) = logger {
        game = game.with_sink(logger);
    }

    let Some(count) = prompt_usize("Number of players (2+): ") else {
        return;
    };
    for seat in 1..=count.max(flip7::MIN_PLAYERS) {
        let name = prompt_line(&format!("Name of player {seat}: "));
        let name = if name.is_empty() {
            format!("Player{seat}")
        } else {
            name
        };
        if let Err(err) = game.join(name) {
            println!("Join error: {err}");
            break;
        }
    }

    loop {
        if let Err(err) = game.start_new_round() {
            println!("Round error: {err}");
            return;
        }

        while !game.is_round_over() {
            print_table(&game);

            let name = game.current_player().name().to_string();
            println!("{name}'s turn. [d]raw or [s]top");
            let input = prompt_line("> ");
            if input == "q" || input == "quit" {
                return;
            }
            let Ok(choice) = input.parse::<TurnChoice>() else {
                println!("Unknown action.");
                continue;
            };

            match game.take_turn(choice) {
                Ok(TurnOutcome::Drew(outcomes)) => report_draws(&name, &outcomes),
                Ok(TurnOutcome::Stopped) => println!("{name} stops for this round."),
                Err(err) => println!("Action error: {err}"),
            }
        }

        print_table(&game);
        let round = game.round();
        match game.end_round_and_apply_scores() {
            Ok(result) => {
                println!("=== End of round {round} ===");
                for player in result.players {
                    let gained = if player.busted {
                        colorize("BUST (0)", "31")
                    } else {
                        format!("+{}", player.gained)
                    };
                    println!("{}: {gained} | Total: {}", player.name, player.total);
                }
            }
            Err(err) => {
                println!("Scoring error: {err}");
                return;
            }
        }

        if let Some(winner) = game.winner() {
            println!(
                "\n{} wins the game with {} points!",
                winner.name(),
                winner.total_score()
            );
            break;
        }

        let input = prompt_line("\nNext round? (Enter, or q to quit) ");
        if input == "q" || input == "quit" {
            break;
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_string()
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

fn report_draws(name: &str, outcomes: &[DrawOutcome]) {
    for outcome in outcomes {
        match outcome {
            DrawOutcome::Drawn(resolution) => {
                println!("{name} draws {}", format_card(&resolution.card));
                if resolution.saved_by_chance {
                    println!("{name} is saved by CHANCE!");
                }
                if resolution.busted {
                    println!("{name} {}", colorize("BUSTS!", "31"));
                }
            }
            DrawOutcome::DeckEmpty => println!("The pile is empty. {name} is stopped."),
        }
    }
}

fn print_table(game: &Game) {
    let snapshot = game.snapshot();
    println!(
        "\n=== Flip 7 | Round {} | Pile: {} cards ===",
        snapshot.round, snapshot.cards_remaining
    );

    for player in &snapshot.players {
        let marker = if snapshot.current_player == Some(player.id()) {
            "*"
        } else {
            " "
        };
        println!(
            "{} {} | {} | Hand: {} | Round: {} | Total: {}",
            marker,
            player.name(),
            format_status(player),
            format_hand(player),
            player.round_score(),
            player.total_score()
        );
    }
    println!();
}

fn format_status(player: &Player) -> String {
    if player.is_busted() {
        colorize("BUST", "31")
    } else if player.is_stopped() {
        colorize("STOP", "90")
    } else {
        colorize("IN", "32")
    }
}

fn format_hand(player: &Player) -> String {
    let cards = player.hand().cards();
    if cards.is_empty() {
        return "(empty)".to_string();
    }
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

fn format_card(card: &Card) -> String {
    match card {
        Card::Number(_) => card.to_string(),
        Card::Special(_) => colorize(&card.to_string(), "33"),
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
