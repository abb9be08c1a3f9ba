use kanal::AsyncSender;
use lingo_config::store::StoreConfig;
use lingo_types::{AppEvent, CATEGORY_WILDCARD, GENERAL_CATEGORY};

use super::{Session, notice, persist, search};

pub async fn handle_add_category(
    session: &mut Session,
    store: &StoreConfig,
    name: String,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    if !session.document.add_category(&name) {
        return notice(
            app_to_ui_tx,
            format!("Category `{name}` already exists or is empty."),
        )
        .await;
    }

    persist(store, &session.document).await;
    notice(app_to_ui_tx, format!("Added category `{name}`.")).await
}

pub async fn handle_delete_category(
    session: &mut Session,
    store: &StoreConfig,
    name: String,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    if name == GENERAL_CATEGORY {
        return notice(app_to_ui_tx, "The General category cannot be deleted.").await;
    }

    if !session.document.remove_category(&name) {
        return notice(app_to_ui_tx, format!("Unknown category `{name}`.")).await;
    }

    // the deleted category may be the active filter
    if session.active_category == name {
        session.active_category = CATEGORY_WILDCARD.to_string();
    }

    persist(store, &session.document).await;
    notice(
        app_to_ui_tx,
        format!("Deleted category `{name}`; its terms moved to {GENERAL_CATEGORY}."),
    )
    .await?;
    search::render_view(session, app_to_ui_tx).await
}
