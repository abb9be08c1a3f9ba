use std::path::PathBuf;

use kanal::AsyncSender;
use lingo_config::store::StoreConfig;
use lingo_types::AppEvent;

use super::{Session, notice, persist, search};

/// Import replaces the document wholesale; a rejected file leaves it
/// untouched.
pub async fn handle_import(
    session: &mut Session,
    store: &StoreConfig,
    path: PathBuf,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    match lingo_store::import(&path).await {
        Ok(data) => {
            session.document.replace(data);
            persist(store, &session.document).await;
            notice(app_to_ui_tx, "Dictionary updated successfully!").await?;
            search::render_view(session, app_to_ui_tx).await
        }
        Err(e) => {
            tracing::error!("Import failed for {}: {e}", path.display());
            notice(app_to_ui_tx, "Invalid JSON file.").await
        }
    }
}

pub async fn handle_export(
    session: &Session,
    store: &StoreConfig,
    path: Option<PathBuf>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let path = path.unwrap_or_else(|| PathBuf::from(&store.export_path));

    match lingo_store::export(&path, session.document.data()).await {
        Ok(()) => notice(app_to_ui_tx, format!("Exported {}.", path.display())).await,
        Err(e) => {
            tracing::error!("Export failed for {}: {e}", path.display());
            notice(app_to_ui_tx, format!("Export failed: {e}.")).await
        }
    }
}
