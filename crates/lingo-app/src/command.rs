use std::path::PathBuf;

use lingo_types::{AppEvent, Meaning};

/// Parse one normalized input line into an editor event.
///
/// Meaning rows use a pipe-separated form: `<part of speech>|<definition>`
/// with an optional third `|<example>` segment.
pub fn parse_line(line: &str) -> Result<AppEvent, String> {
    let (cmd, rest) = match line.split_once(char::is_whitespace) {
        Some((cmd, rest)) => (cmd, rest.trim()),
        None => (line, ""),
    };

    match cmd {
        "search" => Ok(AppEvent::Search(rest.to_string())),
        "cat" => non_empty(rest, "cat <name|All>").map(|c| AppEvent::SetCategory(c.to_string())),
        "list" => Ok(AppEvent::ListTerms),
        "new" => non_empty(rest, "new <term>").map(|t| AppEvent::StartDraft(t.to_string())),
        "pron" => Ok(AppEvent::SetPronunciation(rest.to_string())),
        "mean" => parse_meaning(rest).map(AppEvent::AddMeaning),
        "edit" => parse_edit(rest),
        "unmean" => parse_row_number(rest).map(AppEvent::RemoveMeaning),
        "setcat" => {
            non_empty(rest, "setcat <name>").map(|c| AppEvent::SetDraftCategory(c.to_string()))
        }
        "draft" => Ok(AppEvent::ShowDraft),
        "ai" => Ok(AppEvent::RequestDefinition),
        "save" => Ok(AppEvent::SaveDraft),
        "discard" => Ok(AppEvent::DiscardDraft),
        "drop" => non_empty(rest, "drop <id>").map(|id| AppEvent::DeleteTerm(id.to_string())),
        "addcat" => non_empty(rest, "addcat <name>").map(|c| AppEvent::AddCategory(c.to_string())),
        "delcat" => {
            non_empty(rest, "delcat <name>").map(|c| AppEvent::DeleteCategory(c.to_string()))
        }
        "import" => non_empty(rest, "import <path>").map(|p| AppEvent::ImportFile(PathBuf::from(p))),
        "export" => Ok(AppEvent::ExportFile(
            (!rest.is_empty()).then(|| PathBuf::from(rest)),
        )),
        "help" => Ok(AppEvent::ShowHelp),
        "quit" | "exit" => Ok(AppEvent::Quit),
        other => Err(format!(
            "Unknown command `{other}`. Type `help` for the command list."
        )),
    }
}

fn non_empty<'a>(rest: &'a str, usage: &str) -> Result<&'a str, String> {
    if rest.is_empty() {
        Err(format!("Usage: {usage}"))
    } else {
        Ok(rest)
    }
}

fn parse_meaning(raw: &str) -> Result<Meaning, String> {
    let mut parts = raw.splitn(3, '|').map(str::trim);
    let part_of_speech = parts.next().unwrap_or_default();
    let definition = parts.next().unwrap_or_default();
    let example = parts.next().filter(|e| !e.is_empty());

    if part_of_speech.is_empty() || definition.is_empty() {
        return Err("Usage: mean <part of speech>|<definition>[|<example>]".to_string());
    }

    Ok(Meaning {
        part_of_speech: part_of_speech.to_string(),
        definition: definition.to_string(),
        example: example.map(|e| e.to_string()),
    })
}

fn parse_edit(rest: &str) -> Result<AppEvent, String> {
    let usage = "Usage: edit <row> <part of speech>|<definition>[|<example>]";
    let (row, meaning) = rest.split_once(char::is_whitespace).ok_or_else(|| usage.to_string())?;
    let index = parse_row(row).ok_or_else(|| usage.to_string())?;
    Ok(AppEvent::UpdateMeaning(index, parse_meaning(meaning.trim())?))
}

fn parse_row_number(rest: &str) -> Result<usize, String> {
    parse_row(rest).ok_or_else(|| "Usage: unmean <row-number>".to_string())
}

/// Rows are 1-based for the user, 0-based internally.
fn parse_row(raw: &str) -> Option<usize> {
    raw.parse::<usize>().ok().and_then(|n| n.checked_sub(1))
}
