use serde_json::{Value, json};

/// System-level steering for the definition endpoint.
pub const SYSTEM_INSTRUCTION: &str = "You are an expert etymologist specializing in niche \
    community jargon and tech slang. Keep definitions sleek, witty, and accurate. For \
    meanings, always return an array even if there is only one.";

/// Instruction template sent together with the raw term.
pub fn definition_prompt(term: &str) -> String {
    format!(
        "Provide a pronunciation guide (IPA or phonetic) and a list of meanings for the \
         jargon term: \"{term}\". Include different parts of speech if applicable \
         (e.g. noun, verb)."
    )
}

/// Response schema the endpoint output is constrained to.
///
/// Every element of `meanings` must carry `partOfSpeech` and `definition`;
/// `example` stays optional. A payload that does not decode against this
/// shape is a hard failure, not a partial success.
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "pronunciation": { "type": "STRING" },
            "meanings": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "partOfSpeech": { "type": "STRING", "description": "e.g., noun, verb, adjective" },
                        "definition": { "type": "STRING" },
                        "example": { "type": "STRING" }
                    },
                    "required": ["partOfSpeech", "definition"]
                }
            },
            "category": { "type": "STRING" },
            "tags": {
                "type": "ARRAY",
                "items": { "type": "STRING" }
            }
        },
        "required": ["pronunciation", "meanings", "category", "tags"]
    })
}
