use lingo_types::{CATEGORY_WILDCARD, JargonTerm};

/// Case-insensitive view filter over the term list.
///
/// A term matches when the query is a substring of its name or of any
/// meaning's definition. The active category restricts the view unless it
/// is the "All" wildcard. Results come back newest first; equal timestamps
/// keep their document order.
pub fn filter_terms<'a>(
    terms: &'a [JargonTerm],
    search_query: &str,
    active_category: &str,
) -> Vec<&'a JargonTerm> {
    let query = search_query.to_lowercase();

    let mut matches: Vec<&JargonTerm> = terms
        .iter()
        .filter(|t| active_category == CATEGORY_WILDCARD || t.category == active_category)
        .filter(|t| {
            query.is_empty()
                || t.term.to_lowercase().contains(&query)
                || t.meanings
                    .iter()
                    .any(|m| m.definition.to_lowercase().contains(&query))
        })
        .collect();

    // sort_by is stable, so insertion order survives timestamp ties
    matches.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    matches
}
