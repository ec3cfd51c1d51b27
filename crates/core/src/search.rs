//! Full-text search constants and match-query construction.
//!
//! This module lives in `core` (zero internal deps) so it can be used by the
//! repository layer and any future CLI or loader tooling.
//!
//! Ranking function, precisely: the engine matches against an SQLite FTS5
//! table using the `unicode61` tokenizer with **no stop-word list and no
//! minimum token length**; relevance is FTS5's built-in bm25. Search terms
//! are OR-combined, so a row matches when ANY term appears in the target
//! column — natural-language semantics, matching MySQL's natural-language
//! `MATCH ... AGAINST`. The match decides row-set membership only; final
//! ordering is by revenue or popularity, per query contract.

// ---------------------------------------------------------------------------
// Row caps
// ---------------------------------------------------------------------------

/// Maximum rows returned by concept/title search (both modes).
pub const CONCEPT_SEARCH_LIMIT: i64 = 20;

/// Maximum rows returned by the actor-pair collaboration ranking.
pub const ACTOR_PAIR_LIMIT: i64 = 15;

/// Maximum rows returned by the genre-pair revenue ranking.
pub const GENRE_PAIR_LIMIT: i64 = 15;

// ---------------------------------------------------------------------------
// Query-shaping constants
// ---------------------------------------------------------------------------

/// Billing-rank cutoff: cast rows with `cast_order` below this count as
/// principal cast. Keeps the pair self-join fan-out tractable.
pub const PRINCIPAL_CAST_CUTOFF: i64 = 10;

/// Crew job string identifying a director credit.
pub const DIRECTOR_JOB: &str = "Director";

// ---------------------------------------------------------------------------
// Match-query construction
// ---------------------------------------------------------------------------

/// Sanitize user input into a list of terms suitable for FTS5 match
/// construction.
///
/// - Splits on whitespace.
/// - Removes every non-alphanumeric character (except `_`) from each term,
///   interior ones included, so quotes can never leak into the match
///   expression.
/// - Drops empty terms.
///
/// Returns `None` if the input yields no usable terms.
fn sanitize_terms(query: &str) -> Option<Vec<String>> {
    let terms: Vec<String> = query
        .split_whitespace()
        .map(|t| {
            t.chars()
                .filter(|c| c.is_alphanumeric() || *c == '_')
                .collect::<String>()
        })
        .filter(|t| !t.is_empty())
        .collect();

    if terms.is_empty() {
        None
    } else {
        Some(terms)
    }
}

/// Build an FTS5 match expression restricted to one indexed column.
///
/// Terms are double-quoted (so FTS5 query operators in user input are inert)
/// and OR-combined under a column filter. The result is bound as a data
/// parameter, never spliced into SQL.
///
/// # Examples
///
/// ```
/// use greenlight_core::search::build_match_query;
/// assert_eq!(
///     build_match_query("title", "space heist!"),
///     Some(r#"title : ("space" OR "heist")"#.to_string())
/// );
/// assert_eq!(build_match_query("overview", "  "), None);
/// ```
pub fn build_match_query(column: &str, query: &str) -> Option<String> {
    let terms = sanitize_terms(query)?;
    let quoted: Vec<String> = terms.iter().map(|t| format!("\"{t}\"")).collect();
    Some(format!("{column} : ({})", quoted.join(" OR ")))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn match_single_term() {
        assert_eq!(
            build_match_query("overview", "heist"),
            Some(r#"overview : ("heist")"#.to_string())
        );
    }

    #[test]
    fn match_multiple_terms_joined_with_or() {
        assert_eq!(
            build_match_query("title", "space heist"),
            Some(r#"title : ("space" OR "heist")"#.to_string())
        );
    }

    #[test]
    fn match_trims_special_characters() {
        assert_eq!(
            build_match_query("title", "hello! world?"),
            Some(r#"title : ("hello" OR "world")"#.to_string())
        );
    }

    #[test]
    fn match_removes_interior_quotes_and_punctuation() {
        assert_eq!(
            build_match_query("overview", "hei\"st"),
            Some(r#"overview : ("heist")"#.to_string())
        );
        assert_eq!(
            build_match_query("title", "don't o'brien"),
            Some(r#"title : ("dont" OR "obrien")"#.to_string())
        );
    }

    #[test]
    fn match_neutralizes_fts_operators() {
        // A lone operator sanitizes away entirely.
        assert_eq!(build_match_query("title", "NOT"), Some(r#"title : ("NOT")"#.to_string()));
        assert_eq!(build_match_query("title", "* ^ ("), None);
    }

    #[test]
    fn match_empty_returns_none() {
        assert_eq!(build_match_query("title", ""), None);
    }

    #[test]
    fn match_whitespace_only_returns_none() {
        assert_eq!(build_match_query("overview", "   "), None);
    }

    #[test]
    fn match_preserves_underscores() {
        assert_eq!(
            build_match_query("title", "snake_case"),
            Some(r#"title : ("snake_case")"#.to_string())
        );
    }
}
