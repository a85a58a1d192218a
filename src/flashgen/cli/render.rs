//! # Rendering Module
//!
//! Cards are drawn as boxes: the term on the front, the definition on the
//! back once the card is flipped.
//!
//! ```text
//! ╭──────────────────────────────╮
//! │ 1. Photosynthesis            │
//! ├──────────────────────────────┤
//! │ Turning light into sugar.    │
//! ╰──────────────────────────────╯
//! ```
//!
//! Layout (wrapping, padding) is computed on plain text with Unicode-aware
//! widths; styles are applied afterwards so escape codes never skew the
//! borders.

use super::styles::{CARD_BORDER, CARD_HINT, CARD_INDEX, CARD_TERM};
use colored::Colorize;
use flashgen::api::{CmdMessage, MessageLevel};
use flashgen::model::Card;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const MAX_CARD_WIDTH: usize = 72;
pub const MIN_CARD_WIDTH: usize = 24;
const HIDDEN_HINT: &str = "(flip to reveal)";

/// Width available for a card in the current terminal.
pub fn card_width() -> usize {
    let (_, cols) = console::Term::stdout().size();
    (cols as usize).clamp(MIN_CARD_WIDTH, MAX_CARD_WIDTH)
}

/// Render the whole deck. `flipped[i]` says whether card `i` shows its back;
/// missing entries count as not flipped.
pub fn render_deck(cards: &[Card], flipped: &[bool], width: usize) -> String {
    if cards.is_empty() {
        return format!("{}\n", "No flashcards yet.".dimmed());
    }

    cards
        .iter()
        .enumerate()
        .map(|(i, card)| {
            let is_flipped = flipped.get(i).copied().unwrap_or(false);
            render_card(i + 1, card, is_flipped, width)
        })
        .collect()
}

pub fn render_card(number: usize, card: &Card, flipped: bool, width: usize) -> String {
    let inner = width.max(MIN_CARD_WIDTH) - 4;
    let rule = "─".repeat(inner + 2);
    let mut out = String::new();

    out.push_str(&format!("{}\n", CARD_BORDER.apply_to(format!("╭{}╮", rule))));

    let label = format!("{}. ", number);
    let term_lines = wrap(&card.term, inner.saturating_sub(label.width()));
    for (i, line) in term_lines.iter().enumerate() {
        let prefix = if i == 0 {
            CARD_INDEX.apply_to(label.clone()).to_string()
        } else {
            " ".repeat(label.width())
        };
        let used = label.width() + line.width();
        push_row(&mut out, &format!("{}{}", prefix, CARD_TERM.apply_to(line)), used, inner);
    }

    out.push_str(&format!("{}\n", CARD_BORDER.apply_to(format!("├{}┤", rule))));

    if flipped {
        for line in wrap(&card.definition, inner) {
            let used = line.width();
            push_row(&mut out, &line, used, inner);
        }
    } else {
        push_row(
            &mut out,
            &CARD_HINT.apply_to(HIDDEN_HINT).to_string(),
            HIDDEN_HINT.width(),
            inner,
        );
    }

    out.push_str(&format!("{}\n", CARD_BORDER.apply_to(format!("╰{}╯", rule))));
    out
}

/// One bordered row. `used` is the display width of the unstyled content.
fn push_row(out: &mut String, styled: &str, used: usize, inner: usize) {
    let border = CARD_BORDER.apply_to("│");
    out.push_str(&format!(
        "{} {}{} {}\n",
        border,
        styled,
        " ".repeat(inner.saturating_sub(used)),
        border
    ));
}

/// Greedy word wrap by display width. Words wider than a line are split.
/// Always returns at least one (possibly empty) line.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let sep = if current.is_empty() { 0 } else { 1 };
            if current.width() + sep + word.width() <= width {
                if sep == 1 {
                    current.push(' ');
                }
                current.push_str(word);
                continue;
            }

            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            if word.width() <= width {
                current.push_str(word);
                continue;
            }
            for c in word.chars() {
                if current.width() + c.width().unwrap_or(0) > width {
                    lines.push(std::mem::take(&mut current));
                }
                current.push(c);
            }
        }
        lines.push(current);
    }

    // `split` never yields nothing, so `lines` is non-empty here
    lines
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    messages
        .iter()
        .map(|message| {
            let styled = match message.level {
                MessageLevel::Info => message.content.dimmed(),
                MessageLevel::Success => message.content.green(),
                MessageLevel::Warning => message.content.yellow(),
                MessageLevel::Error => message.content.red(),
            };
            format!("{}\n", styled)
        })
        .collect()
}

pub fn print_messages(messages: &[CmdMessage]) {
    print!("{}", render_messages(messages));
}

/// Print a deck with every card showing both sides.
pub fn print_open_deck(cards: &[Card]) {
    print!("{}", render_deck(cards, &vec![true; cards.len()], card_width()));
}
