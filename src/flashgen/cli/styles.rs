use console::Style;
use once_cell::sync::Lazy;

pub static CARD_INDEX: Lazy<Style> = Lazy::new(|| Style::new().yellow());
pub static CARD_TERM: Lazy<Style> = Lazy::new(|| Style::new().bold());
pub static CARD_BORDER: Lazy<Style> = Lazy::new(|| Style::new().color256(245));
pub static CARD_HINT: Lazy<Style> = Lazy::new(|| Style::new().dim().italic());
pub static PROMPT: Lazy<Style> = Lazy::new(|| Style::new().cyan().bold());
