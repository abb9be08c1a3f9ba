use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use lingo_ai::GeminiClient;
use lingo_config::store::StoreConfig;
use lingo_core::document::Document;
use lingo_core::draft::TermDraft;
use lingo_types::{AppEvent, CATEGORY_WILDCARD};

use crate::state::AppState;

pub mod categories;
pub mod define;
pub mod edit;
pub mod search;
pub mod transfer;

use categories::{handle_add_category, handle_delete_category};
use define::handle_definition_request;
use edit::{
    handle_add_meaning, handle_delete_term, handle_discard_draft, handle_remove_meaning,
    handle_save_draft, handle_set_draft_category, handle_set_pronunciation, handle_show_draft,
    handle_start_draft, handle_update_meaning,
};
use search::{handle_set_category, render_view};
use transfer::{handle_export, handle_import};

/// Editor state owned by the event loop. Single writer: no other task
/// touches the document or the draft.
pub struct Session {
    pub document: Document,
    pub draft: Option<TermDraft>,
    pub query: String,
    pub active_category: String,
}

impl Session {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            draft: None,
            query: String::new(),
            active_category: CATEGORY_WILDCARD.to_string(),
        }
    }
}

/// App's main loop. Commands are handled one at a time, so a definition
/// request finishes before the next command is read and the AI path never
/// runs concurrently with itself.
pub async fn event_loop(
    state: Arc<AppState>,
    document: Document,
    definer: Option<GeminiClient>,
    io_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let store = {
        let config = state.config.read().await;
        config.store.clone()
    };

    let mut session = Session::new(document);

    render_view(&session, &app_to_ui_tx).await?;

    loop {
        let event = io_to_app_rx.recv().await?;
        tracing::debug!("event: {:?}", std::mem::discriminant(&event));

        match event {
            AppEvent::Quit => break,
            AppEvent::Search(query) => {
                session.query = query;
                render_view(&session, &app_to_ui_tx).await?;
            }
            AppEvent::SetCategory(category) => {
                handle_set_category(&mut session, category, &app_to_ui_tx).await?;
            }
            AppEvent::ListTerms => render_view(&session, &app_to_ui_tx).await?,
            AppEvent::StartDraft(term) => {
                handle_start_draft(&mut session, term, &app_to_ui_tx).await?;
            }
            AppEvent::SetPronunciation(pronunciation) => {
                handle_set_pronunciation(&mut session, pronunciation, &app_to_ui_tx).await?;
            }
            AppEvent::AddMeaning(meaning) => {
                handle_add_meaning(&mut session, meaning, &app_to_ui_tx).await?;
            }
            AppEvent::UpdateMeaning(index, meaning) => {
                handle_update_meaning(&mut session, index, meaning, &app_to_ui_tx).await?;
            }
            AppEvent::RemoveMeaning(index) => {
                handle_remove_meaning(&mut session, index, &app_to_ui_tx).await?;
            }
            AppEvent::SetDraftCategory(category) => {
                handle_set_draft_category(&mut session, category, &app_to_ui_tx).await?;
            }
            AppEvent::ShowDraft => handle_show_draft(&session, &app_to_ui_tx).await?,
            AppEvent::RequestDefinition => {
                handle_definition_request(&mut session, definer.as_ref(), &app_to_ui_tx).await?;
            }
            AppEvent::SaveDraft => handle_save_draft(&mut session, &store, &app_to_ui_tx).await?,
            AppEvent::DiscardDraft => handle_discard_draft(&mut session, &app_to_ui_tx).await?,
            AppEvent::DeleteTerm(id) => {
                handle_delete_term(&mut session, &store, id, &app_to_ui_tx).await?;
            }
            AppEvent::AddCategory(name) => {
                handle_add_category(&mut session, &store, name, &app_to_ui_tx).await?;
            }
            AppEvent::DeleteCategory(name) => {
                handle_delete_category(&mut session, &store, name, &app_to_ui_tx).await?;
            }
            AppEvent::ImportFile(path) => {
                handle_import(&mut session, &store, path, &app_to_ui_tx).await?;
            }
            AppEvent::ExportFile(path) => {
                handle_export(&session, &store, path, &app_to_ui_tx).await?;
            }
            // UI-bound events pass through untouched
            AppEvent::ShowEntries { .. } | AppEvent::Notice(_) | AppEvent::ShowHelp => {
                app_to_ui_tx.send(event).await?;
            }
        }
    }

    Ok(())
}

pub(crate) async fn notice(
    app_to_ui_tx: &AsyncSender<AppEvent>,
    text: impl Into<String>,
) -> anyhow::Result<()> {
    app_to_ui_tx.send(AppEvent::Notice(text.into())).await?;
    Ok(())
}

/// Cache write failure is non-fatal; it is logged and the session
/// continues.
pub(crate) async fn persist(store: &StoreConfig, document: &Document) {
    if let Err(e) = lingo_store::save_cache(store, document.data()).await {
        tracing::warn!("Failed to update cache {}: {e}", store.cache_path);
    }
}
