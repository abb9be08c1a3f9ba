use kanal::AsyncSender;
use lingo_core::preprocess::normalize_input;
use lingo_types::AppEvent;
use tokio::io::AsyncBufReadExt;
use tokio_util::sync::CancellationToken;

use crate::command;

/// Stdin watcher: normalizes each line, parses it into an editor event and
/// forwards it to the app. EOF or `quit` ends the session.
pub async fn watcher_io(
    cancel: CancellationToken,
    event_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    tracing::info!("Reading commands from stdin (type `help` for the list)");

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Input watcher stopping");
                break;
            }
            line = lines.next_line() => {
                match line {
                    Ok(Some(raw)) => {
                        let line = normalize_input(&raw);
                        if line.is_empty() {
                            continue;
                        }

                        match command::parse_line(&line) {
                            Ok(event) => {
                                let quit = matches!(event, AppEvent::Quit);
                                event_tx.send(event).await?;
                                if quit {
                                    break;
                                }
                            }
                            Err(message) => {
                                event_tx.send(AppEvent::Notice(message)).await?;
                            }
                        }
                    }
                    Ok(None) => {
                        event_tx.send(AppEvent::Quit).await?;
                        break;
                    }
                    Err(e) => {
                        tracing::error!("stdin read failed: {e}");
                        break;
                    }
                }
            }
        }
    }

    Ok(())
}
