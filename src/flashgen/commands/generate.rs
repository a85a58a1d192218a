use crate::commands::{count_label, CmdMessage, CmdResult};
use crate::controls::Controls;
use crate::error::{FlashError, Result};
use crate::generate::Generator;
use crate::parser;
use crate::store::CardStore;
use tracing::info;

pub fn run<G: Generator>(
    store: &mut CardStore,
    controls: &Controls,
    generator: &G,
    topic: &str,
) -> Result<CmdResult> {
    let topic = topic.trim();
    if topic.is_empty() {
        controls.ensure_generate_enabled()?;
        store.clear();
        return Err(FlashError::EmptyTopic);
    }

    // Held until this function returns, whatever the outcome.
    let _busy = controls.begin_generation()?;

    let outcome = generator
        .generate(topic)
        .and_then(|text| parser::classify_response(&text));
    let state = store.settle_generation(outcome)?;
    info!(topic, cards = store.len(), "generated flashcards");

    let mut result = CmdResult::default().with_cards(store.cards(), state);
    result.add_message(CmdMessage::success(format!(
        "Generated {} about \"{}\".",
        count_label(store.len()),
        topic
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Card;
    use crate::store::StoreState;
    use crate::test_utils::StaticGenerator;

    fn seeded_store() -> CardStore {
        let mut store = CardStore::new();
        store
            .settle_load(Ok(vec![Card::new("old", "card")]))
            .unwrap();
        store
    }

    #[test]
    fn test_generate_replaces_store() {
        let mut store = seeded_store();
        let controls = Controls::new();
        let generator = StaticGenerator::new("Mitosis: cell division\nMeiosis: makes gametes");

        let result = run(&mut store, &controls, &generator, "  cell biology ").unwrap();

        assert_eq!(result.state, Some(StoreState::Populated(2)));
        assert_eq!(store.cards()[0], Card::new("Mitosis", "cell division"));
        assert_eq!(generator.topics(), vec!["cell biology"]);
        assert!(result.messages[0].content.contains("2 flashcards"));
    }

    #[test]
    fn test_three_valid_two_invalid() {
        let mut store = CardStore::new();
        let controls = Controls::new();
        let generator = StaticGenerator::new("A: 1\nnoise\nB: 2\n: x\nC: 3");

        run(&mut store, &controls, &generator, "letters").unwrap();
        assert_eq!(
            store.cards(),
            &[Card::new("A", "1"), Card::new("B", "2"), Card::new("C", "3")]
        );
    }

    #[test]
    fn test_empty_topic() {
        let mut store = seeded_store();
        let controls = Controls::new();
        let generator = StaticGenerator::new("A: b");

        let err = run(&mut store, &controls, &generator, "   ").unwrap_err();
        assert!(matches!(err, FlashError::EmptyTopic));
        assert!(store.is_empty());
        assert!(generator.topics().is_empty());
    }

    #[test]
    fn test_empty_response_is_distinct_from_no_valid_lines() {
        let controls = Controls::new();

        let mut store = seeded_store();
        let err = run(&mut store, &controls, &StaticGenerator::new(""), "x").unwrap_err();
        assert!(matches!(err, FlashError::EmptyResponse));
        assert!(store.is_empty());

        let mut store = seeded_store();
        let err = run(&mut store, &controls, &StaticGenerator::new("no cards"), "x").unwrap_err();
        assert!(matches!(err, FlashError::NoValidLines));
        assert!(store.is_empty());
    }

    #[test]
    fn test_generation_failure_clears_store() {
        let mut store = seeded_store();
        let controls = Controls::new();
        let err = run(
            &mut store,
            &controls,
            &StaticGenerator::failing("quota exceeded"),
            "x",
        )
        .unwrap_err();
        assert!(err.to_string().contains("quota exceeded"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_load_control_disabled_during_successful_generation() {
        let mut store = CardStore::new();
        let controls = Controls::new();
        let generator = StaticGenerator::new("A: b").observing(&controls);

        assert!(controls.load_enabled());
        run(&mut store, &controls, &generator, "x").unwrap();

        assert_eq!(generator.load_enabled_during_call(), Some(false));
        assert!(controls.load_enabled());
        assert!(controls.generate_enabled());
    }

    #[test]
    fn test_load_control_disabled_during_failed_generation() {
        let mut store = CardStore::new();
        let controls = Controls::new();
        let generator = StaticGenerator::failing("offline").observing(&controls);

        run(&mut store, &controls, &generator, "x").unwrap_err();

        assert_eq!(generator.load_enabled_during_call(), Some(false));
        assert!(controls.load_enabled());
        assert!(controls.generate_enabled());
    }

    #[test]
    fn test_refused_while_busy_keeps_store() {
        let mut store = seeded_store();
        let controls = Controls::new();
        let _in_flight = controls.begin_generation().unwrap();

        let err = run(&mut store, &controls, &StaticGenerator::new("A: b"), "x").unwrap_err();
        assert!(matches!(err, FlashError::Busy));
        assert_eq!(store.len(), 1);
    }
}
