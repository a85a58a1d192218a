use crate::commands::{CmdMessage, CmdResult};
use crate::store::CardStore;

pub fn run(store: &mut CardStore) -> CmdResult {
    let state = store.clear();
    let mut result = CmdResult::default().with_cards(&[], state);
    result.add_message(CmdMessage::info("Enter a topic to generate flashcards."));
    result
}
