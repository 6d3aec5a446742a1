//! CLI example: plays a session in the terminal.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use itemjack::{Card, Game, GameOptions, InputRequest, ItemError, Suit, TableView, TurnReport};

fn main() {
    println!("Item blackjack CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = Game::new(GameOptions::default(), seed);

    loop {
        print_table(&game.view());

        if game.current_match().round().is_over() {
            match prompt_line("[n]ext round or [q]uit: ").as_str() {
                "q" | "quit" => return,
                _ => {
                    if game.next_round() {
                        println!("A new match begins.");
                    }
                }
            }
            continue;
        }

        println!("{}", format_actions(&game.view()));
        let report = match prompt_line("Action: ").as_str() {
            "h" | "hit" => game.player_hit(),
            "s" | "stand" => game.player_stand(),
            "i" | "item" => match game.use_item_with(&mut ask) {
                Ok(report) => report,
                Err(ItemError::Cancelled) => continue,
                Err(err) => {
                    println!("{err}");
                    continue;
                }
            },
            "q" | "quit" => return,
            _ => {
                println!("Unknown action.");
                continue;
            }
        };

        print_report(&report);
    }
}

/// Answers the engine's number requests from stdin; an empty line cancels.
fn ask(request: &InputRequest) -> Option<String> {
    println!("{}", request.message);
    let reply = prompt_line(&format!("(1-{}, empty to cancel): ", request.max));
    if reply.is_empty() || reply == "q" {
        None
    } else {
        Some(reply)
    }
}

fn print_report(report: &TurnReport) {
    if let Some(status) = report.round {
        println!("{}", status.message());
    }
    if let Some(item) = report.item_granted {
        println!("You found an item: {item}");
    }
    if let Some(outcome) = report.match_outcome {
        println!("{}", outcome.message());
    }
    if let Some(end) = report.session_end {
        println!("{}", colorize(end.message(), "33"));
    }
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

fn print_table(view: &TableView) {
    println!(
        "\nDeck: {} | Health: {} | Score: {} | Rounds: {}",
        view.deck_name, view.health, view.score, view.rounds_played
    );
    let items = if view.items.is_empty() {
        "None".to_string()
    } else {
        view.items
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    };
    println!("Items: {items}");
    println!("Match: {}", format_history(&view.history));

    let dealer_value = view
        .dealer_value
        .map_or_else(|| "?".to_string(), |value| value.to_string());
    let hidden = if view.dealer_hidden { " [?]" } else { "" };
    println!(
        "\nDealer: {}{hidden} (value {dealer_value})",
        format_cards(&view.dealer_cards)
    );
    println!(
        "Player: {} (value {})\n",
        format_cards(&view.player_cards),
        view.player_value
    );
}

fn format_history(history: &[bool]) -> String {
    if history.is_empty() {
        return "-".to_string();
    }
    history
        .iter()
        .map(|won| {
            if *won {
                colorize("W", "32")
            } else {
                colorize("L", "31")
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_actions(view: &TableView) -> String {
    let parts = [
        format_action("hit", "h", true),
        format_action("stand", "s", true),
        format_action("item", "i", !view.items.is_empty()),
    ];
    format!("Actions: {}", parts.join(" "))
}

fn format_action(label: &str, key: &str, allowed: bool) -> String {
    let text = format!("[{key}]{label}");
    if allowed {
        colorize(&text, "32")
    } else {
        colorize(&text, "90")
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "(no cards)".to_string();
    }
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}
