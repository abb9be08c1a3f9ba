use kanal::AsyncReceiver;
use lingo_types::{AppEvent, DisplayEntry};

/// Fixed contribution-form link shown alongside the term list. Purely
/// informational; nothing reads it back.
const SUBMIT_FORM_URL: &str =
    "https://docs.google.com/forms/d/e/1FAIpQLSfP8y9_k1m6m7P_your_form_id/viewform";

/// Terminal renderer. Consumes view events until the channel closes.
pub async fn ui_loop(app_to_ui_rx: AsyncReceiver<AppEvent>) -> anyhow::Result<()> {
    loop {
        let event = app_to_ui_rx.recv().await?;
        match event {
            AppEvent::ShowEntries { entries, total } => render_entries(&entries, total),
            AppEvent::Notice(text) => println!("{text}"),
            AppEvent::ShowHelp => print_help(),
            _ => {}
        }
    }
}

fn render_entries(entries: &[DisplayEntry], total: usize) {
    println!();

    if entries.is_empty() {
        println!("The dictionary is currently silent.");
        println!("Submit a new entry: {SUBMIT_FORM_URL}");
        println!();
        return;
    }

    for entry in entries {
        let mut header = format!("* {}", entry.term);
        if let Some(pronunciation) = entry.pronunciation.as_deref().filter(|p| !p.is_empty()) {
            header.push_str(&format!("  {pronunciation}"));
        }
        header.push_str(&format!("  [{}]", entry.category));
        if entry.ai_generated {
            header.push_str("  (AI assisted)");
        }
        println!("{header}  <{}>", entry.id);

        for (row, meaning) in entry.meanings.iter().enumerate() {
            println!(
                "  {}. ({}) {}",
                row + 1,
                meaning.part_of_speech,
                meaning.definition
            );
            if let Some(example) = meaning.example.as_deref().filter(|e| !e.is_empty()) {
                println!("     \"{example}\"");
            }
        }
        println!();
    }

    println!("{total} definitions distributed");
    println!("Want to add a word? {SUBMIT_FORM_URL}");
    println!();
}

fn print_help() {
    println!(
        "\
Commands:
  search <text>          filter terms by name or definition
  cat <name|All>         restrict the view to one category
  list                   re-render the current view
  new <term>             start a term draft
  pron <text>            set the draft pronunciation
  mean <pos>|<def>[|<ex>]  add a meaning row
  edit <row> <pos>|<def>[|<ex>]  replace a meaning row
  unmean <row>           remove a meaning row
  setcat <name>          set the draft category
  ai                     let the AI draft pronunciation and meanings
  draft                  show the open draft
  save                   validate and append the draft
  discard                abandon the open draft
  drop <id>              delete a term by id
  addcat <name>          add a category
  delcat <name>          delete a category (terms move to General)
  import <path>          replace the dictionary from a JSON file
  export [path]          write the dictionary as pretty JSON (default words.json)
  help                   this list
  quit                   exit"
    );
}
