use std::time::{SystemTime, UNIX_EPOCH};

use kanal::AsyncSender;
use lingo_config::store::StoreConfig;
use lingo_core::draft::TermDraft;
use lingo_types::{AppEvent, Meaning};

use super::{Session, notice, persist, search};

pub async fn handle_start_draft(
    session: &mut Session,
    term: String,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let category = session.document.default_category();
    session.draft = Some(TermDraft::new(term.clone(), category));
    notice(
        app_to_ui_tx,
        format!("Drafting `{term}`. Fill it with `mean`, `pron`, `setcat`; then `save`."),
    )
    .await
}

pub async fn handle_set_pronunciation(
    session: &mut Session,
    pronunciation: String,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let Some(draft) = session.draft.as_mut() else {
        return no_draft(app_to_ui_tx).await;
    };
    draft.pronunciation = pronunciation;
    show_draft(draft, app_to_ui_tx).await
}

pub async fn handle_add_meaning(
    session: &mut Session,
    meaning: Meaning,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let Some(draft) = session.draft.as_mut() else {
        return no_draft(app_to_ui_tx).await;
    };
    draft.push_meaning(meaning);
    show_draft(draft, app_to_ui_tx).await
}

pub async fn handle_update_meaning(
    session: &mut Session,
    index: usize,
    meaning: Meaning,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let Some(draft) = session.draft.as_mut() else {
        return no_draft(app_to_ui_tx).await;
    };
    if !draft.update_meaning(index, meaning) {
        return notice(app_to_ui_tx, format!("No meaning row {}.", index + 1)).await;
    }
    show_draft(draft, app_to_ui_tx).await
}

pub async fn handle_remove_meaning(
    session: &mut Session,
    index: usize,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let Some(draft) = session.draft.as_mut() else {
        return no_draft(app_to_ui_tx).await;
    };
    if !draft.remove_meaning(index) {
        return notice(
            app_to_ui_tx,
            "Cannot remove that row; a draft keeps at least one meaning.",
        )
        .await;
    }
    show_draft(draft, app_to_ui_tx).await
}

pub async fn handle_set_draft_category(
    session: &mut Session,
    category: String,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    if !session.document.has_category(&category) {
        return notice(app_to_ui_tx, format!("Unknown category `{category}`.")).await;
    }
    let Some(draft) = session.draft.as_mut() else {
        return no_draft(app_to_ui_tx).await;
    };
    draft.category = category;
    show_draft(draft, app_to_ui_tx).await
}

pub async fn handle_show_draft(
    session: &Session,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    match session.draft.as_ref() {
        Some(draft) => show_draft(draft, app_to_ui_tx).await,
        None => no_draft(app_to_ui_tx).await,
    }
}

/// Submission appends a finalized entry to the front of the document. A
/// failed validation leaves the draft open for fixing and mutates nothing.
pub async fn handle_save_draft(
    session: &mut Session,
    store: &StoreConfig,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let Some(draft) = session.draft.as_ref() else {
        return no_draft(app_to_ui_tx).await;
    };

    match draft
        .clone()
        .finalize(uuid::Uuid::new_v4().to_string(), epoch_millis())
    {
        Ok(term) => {
            let name = term.term.clone();
            session.draft = None;
            session.document.add_term(term);
            persist(store, &session.document).await;
            notice(app_to_ui_tx, format!("Saved `{name}`.")).await?;
            search::render_view(session, app_to_ui_tx).await
        }
        Err(e) => notice(app_to_ui_tx, format!("Cannot save: {e}.")).await,
    }
}

pub async fn handle_discard_draft(
    session: &mut Session,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    match session.draft.take() {
        Some(draft) => notice(app_to_ui_tx, format!("Discarded draft `{}`.", draft.term)).await,
        None => no_draft(app_to_ui_tx).await,
    }
}

pub async fn handle_delete_term(
    session: &mut Session,
    store: &StoreConfig,
    id: String,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    if !session.document.remove_term(&id) {
        return notice(app_to_ui_tx, format!("No term with id `{id}`.")).await;
    }

    persist(store, &session.document).await;
    notice(app_to_ui_tx, format!("Deleted term `{id}`.")).await?;
    search::render_view(session, app_to_ui_tx).await
}

async fn no_draft(app_to_ui_tx: &AsyncSender<AppEvent>) -> anyhow::Result<()> {
    notice(app_to_ui_tx, "No draft open. Start one with `new <term>`.").await
}

async fn show_draft(draft: &TermDraft, app_to_ui_tx: &AsyncSender<AppEvent>) -> anyhow::Result<()> {
    let mut lines = vec![format!("Draft: {} [{}]", draft.term, draft.category)];
    if !draft.pronunciation.is_empty() {
        lines.push(format!("  {}", draft.pronunciation));
    }
    for (row, meaning) in draft.meanings.iter().enumerate() {
        let definition = if meaning.definition.is_empty() {
            "(empty)"
        } else {
            &meaning.definition
        };
        lines.push(format!(
            "  {}. ({}) {definition}",
            row + 1,
            meaning.part_of_speech
        ));
        if let Some(example) = meaning.example.as_deref().filter(|e| !e.is_empty()) {
            lines.push(format!("     \"{example}\""));
        }
    }
    notice(app_to_ui_tx, lines.join("\n")).await
}

fn epoch_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}
