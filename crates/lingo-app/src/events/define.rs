use kanal::AsyncSender;
use lingo_ai::{Definer, GeminiClient};
use lingo_types::AppEvent;

use super::{Session, edit, notice};

/// AI assist for the open draft. Failure of any kind surfaces as one
/// notice instructing manual entry; the draft is never partially updated.
pub async fn handle_definition_request(
    session: &mut Session,
    definer: Option<&GeminiClient>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let Some(client) = definer else {
        return notice(
            app_to_ui_tx,
            "AI assist is not configured. Set GEMINI_API_KEY and restart.",
        )
        .await;
    };

    let known_categories = session.document.categories().to_vec();
    let Some(draft) = session.draft.as_mut() else {
        return notice(app_to_ui_tx, "No draft open. Start one with `new <term>`.").await;
    };

    if draft.term.trim().is_empty() {
        return notice(app_to_ui_tx, "The draft has no term name to define.").await;
    }

    tracing::info!("Requesting definition for `{}`", draft.term);

    match client.define(&draft.term).await {
        Ok(definition) => {
            draft.apply_definition(&definition, &known_categories);
            notice(app_to_ui_tx, format!("AI drafted `{}`.", draft.term)).await?;
            edit::handle_show_draft(session, app_to_ui_tx).await
        }
        Err(e) => {
            tracing::error!("Definition request failed: {e}");
            notice(app_to_ui_tx, "AI failed to define. Please try manually.").await
        }
    }
}
