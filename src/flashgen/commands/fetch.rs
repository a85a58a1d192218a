use crate::bootstrap;
use crate::commands::{count_label, CmdMessage, CmdResult};
use crate::controls::Controls;
use crate::error::Result;
use crate::fetch::Fetcher;
use crate::store::CardStore;
use crate::validate::validate_str;
use tracing::info;

/// Replace the deck with the JSON document behind `url`.
pub fn run<F: Fetcher>(
    store: &mut CardStore,
    controls: &Controls,
    fetcher: &F,
    url: &str,
) -> Result<CmdResult> {
    controls.ensure_load_enabled()?;

    let outcome = fetcher.fetch(url).and_then(|body| validate_str(&body));
    let state = store.settle_load(outcome)?;
    info!(%url, cards = store.len(), "loaded deck from URL");

    let mut result = CmdResult::default().with_cards(store.cards(), state);
    if store.is_empty() {
        result.add_message(CmdMessage::info(format!("{} contains no flashcards.", url)));
    } else {
        result.add_message(CmdMessage::success(format!(
            "Loaded {} from {}.",
            count_label(store.len()),
            url
        )));
    }
    Ok(result)
}

/// Open a shared page link: when it carries a `file` parameter, load that
/// deck and switch to display mode.
///
/// A link without the parameter leaves the store and the controls untouched.
pub fn bootstrap<F: Fetcher>(
    store: &mut CardStore,
    controls: &Controls,
    fetcher: &F,
    page_url: &str,
) -> Result<CmdResult> {
    let url = match bootstrap::payload_url(page_url) {
        Ok(Some(url)) => url,
        Ok(None) => {
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::info(format!(
                "No \"{}\" parameter in {}; nothing to open.",
                bootstrap::FILE_PARAM,
                page_url
            )));
            return Ok(result);
        }
        Err(e) => {
            store.clear();
            return Err(e);
        }
    };

    let result = run(store, controls, fetcher, &url)?;
    controls.suppress_inputs();
    Ok(result.in_display_mode())
}
