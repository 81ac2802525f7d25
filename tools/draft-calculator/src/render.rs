//! Terminal rendering of draft summaries

use clap::ValueEnum;
use colored::*;
use draft_board::{DraftSession, DraftSummary, PriceTier};
use rust_decimal::Decimal;
use std::fmt::Write;

/// How the board is laid out on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LayoutMode {
    /// Rounds and budget side by side
    Wide,
    /// Everything stacked in one column
    Compact,
}

const PROGRESS_WIDTH: usize = 30;

pub fn format_price(price: Decimal) -> String {
    format!("{} M", price.normalize())
}

fn colour_for(tier: PriceTier, text: &str) -> ColoredString {
    match tier {
        PriceTier::Low => text.green(),
        PriceTier::Mid => text.yellow(),
        PriceTier::High => text.red(),
    }
}

pub fn progress_bar(ratio: f64) -> String {
    let filled = (ratio.clamp(0.0, 1.0) * PROGRESS_WIDTH as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(PROGRESS_WIDTH - filled))
}

fn rounds_lines(session: &DraftSession) -> Vec<String> {
    session
        .slots()
        .iter()
        .map(|slot| match &slot.pick {
            Some(name) => {
                let price = session.catalog().price_of(name);
                format!("Round {}: {} ({})", slot.round, name, format_price(price))
            }
            None => format!("Round {}: {}", slot.round, "-- no player --".dimmed()),
        })
        .collect()
}

fn budget_lines(summary: &DraftSummary) -> Vec<String> {
    let budget = &summary.budget;
    let mut lines = vec![
        format!("Initial budget: {}", format_price(budget.initial_budget)),
        format!("Total spend:    {}", format_price(budget.spend)),
        format!("Remaining:      {}", format_price(budget.remaining)),
        progress_bar(budget.progress_ratio()),
    ];
    if budget.overspend {
        lines.push("You are over budget!".red().bold().to_string());
    }
    lines
}

fn composition_lines(summary: &DraftSummary) -> Vec<String> {
    summary
        .composition
        .groups()
        .map(|group| {
            let cap = group.cap.map_or_else(|| "-".to_string(), |cap| cap.to_string());
            let names: Vec<&str> = group.players.iter().map(|p| p.name.as_str()).collect();
            let line = format!("{}: {}/{} {}", group.position, group.count, cap, names.join(", "));
            if group.over_cap() {
                line.red().to_string()
            } else {
                line
            }
        })
        .collect()
}

fn picks_line(summary: &DraftSummary) -> String {
    if summary.picks.is_empty() {
        return "No players selected".dimmed().to_string();
    }
    summary
        .picks
        .iter()
        .map(|card| {
            colour_for(card.tier, &format!("[{} {}]", card.name, format_price(card.price)))
                .to_string()
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render the whole board as text
pub fn render(session: &DraftSession, summary: &DraftSummary, layout: LayoutMode) -> String {
    let mut out = String::new();
    let rounds = rounds_lines(session);
    let budget = budget_lines(summary);

    let _ = writeln!(out, "{}", "Fantasy Draft Calculator".bold());
    match layout {
        LayoutMode::Wide => {
            let width = rounds.iter().map(String::as_str).map(console_width).max().unwrap_or(0) + 4;
            for i in 0..rounds.len().max(budget.len()) {
                let left = rounds.get(i).map(String::as_str).unwrap_or("");
                let right = budget.get(i).map(String::as_str).unwrap_or("");
                let padding = " ".repeat(width.saturating_sub(console_width(left)));
                let _ = writeln!(out, "{left}{padding}{right}");
            }
        }
        LayoutMode::Compact => {
            for line in rounds.iter().chain(budget.iter()) {
                let _ = writeln!(out, "{line}");
            }
        }
    }

    let _ = writeln!(out, "\n{}", "Positions".bold());
    for line in composition_lines(summary) {
        let _ = writeln!(out, "  {line}");
    }

    let _ = writeln!(out, "\n{}", "Selected players".bold());
    let _ = writeln!(out, "  {}", picks_line(summary));
    out
}

/// Visible width of a line, ignoring ANSI colour codes
fn console_width(line: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in line.chars() {
        match (in_escape, c) {
            (false, '\u{1b}') => in_escape = true,
            (true, 'm') => in_escape = false,
            (true, _) => {}
            (false, _) => width += 1,
        }
    }
    width
}
