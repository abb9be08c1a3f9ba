use kanal::AsyncSender;
use lingo_core::filter::filter_terms;
use lingo_types::{AppEvent, CATEGORY_WILDCARD, DisplayEntry};

use super::{Session, notice};

/// Recompute the filtered view and push it to the terminal.
pub async fn render_view(
    session: &Session,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let entries: Vec<DisplayEntry> = filter_terms(
        session.document.terms(),
        &session.query,
        &session.active_category,
    )
    .into_iter()
    .map(|term| DisplayEntry {
        id: term.id.clone(),
        term: term.term.clone(),
        pronunciation: term.pronunciation.clone(),
        category: term.category.clone(),
        meanings: term.meanings.clone(),
        ai_generated: term.is_ai_generated,
    })
    .collect();

    app_to_ui_tx
        .send(AppEvent::ShowEntries {
            entries,
            total: session.document.terms().len(),
        })
        .await?;

    Ok(())
}

pub async fn handle_set_category(
    session: &mut Session,
    category: String,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    if category != CATEGORY_WILDCARD && !session.document.has_category(&category) {
        return notice(app_to_ui_tx, format!("Unknown category `{category}`.")).await;
    }

    session.active_category = category;
    render_view(session, app_to_ui_tx).await
}
