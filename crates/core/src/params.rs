//! Validated parameter types for the analytical queries.
//!
//! Each parameter struct is a `Deserialize` DTO with a `validate` method
//! that rejects out-of-range input before any SQL executes, naming the
//! offending field.

use serde::Deserialize;

use crate::error::CoreError;

/// Which movie text column a concept search runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// Match against `movies.overview`, rank results by revenue.
    Plot,
    /// Match against `movies.title`, rank results by popularity.
    Title,
}

/// Parameters for the concept/title full-text search.
#[derive(Debug, Clone, Deserialize)]
pub struct ConceptSearchParams {
    pub mode: SearchMode,
    pub search_text: String,
}

impl ConceptSearchParams {
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.search_text.trim().is_empty() {
            return Err(CoreError::invalid_parameter(
                "search_text",
                "must not be empty",
            ));
        }
        Ok(())
    }
}

/// Parameters for the actor-pair collaboration ranking.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ActorPairParams {
    /// Minimum number of shared principal-cast movies for a pair to qualify.
    pub min_movies_together: i64,
}

impl ActorPairParams {
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.min_movies_together < 1 {
            return Err(CoreError::invalid_parameter(
                "min_movies_together",
                format!("must be >= 1, got {}", self.min_movies_together),
            ));
        }
        Ok(())
    }
}

/// Parameters for the director revenue ranking.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct DirectorRankingParams {
    /// Number of top-grossing directors to return.
    pub top_n: i64,
}

impl DirectorRankingParams {
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.top_n < 1 {
            return Err(CoreError::invalid_parameter(
                "top_n",
                format!("must be >= 1, got {}", self.top_n),
            ));
        }
        Ok(())
    }
}

/// Parameters for the genre-pair revenue ranking.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct GenrePairParams {
    /// Only movies grossing at least this much contribute to a pair.
    pub min_revenue: i64,
}

impl GenrePairParams {
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.min_revenue < 0 {
            return Err(CoreError::invalid_parameter(
                "min_revenue",
                format!("must be >= 0, got {}", self.min_revenue),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_of(err: CoreError) -> &'static str {
        err.field()
    }

    #[test]
    fn search_text_must_not_be_blank() {
        let params = ConceptSearchParams {
            mode: SearchMode::Plot,
            search_text: "   ".into(),
        };
        assert_eq!(field_of(params.validate().unwrap_err()), "search_text");
    }

    #[test]
    fn search_text_accepts_nonempty() {
        let params = ConceptSearchParams {
            mode: SearchMode::Title,
            search_text: "space".into(),
        };
        assert!(params.validate().is_ok());
    }

    #[test]
    fn min_movies_together_must_be_positive() {
        for bad in [0, -3] {
            let err = ActorPairParams {
                min_movies_together: bad,
            }
            .validate()
            .unwrap_err();
            assert_eq!(field_of(err), "min_movies_together");
        }
        assert!(ActorPairParams {
            min_movies_together: 1
        }
        .validate()
        .is_ok());
    }

    #[test]
    fn top_n_must_be_positive() {
        let err = DirectorRankingParams { top_n: 0 }.validate().unwrap_err();
        assert_eq!(field_of(err), "top_n");
        assert!(DirectorRankingParams { top_n: 5 }.validate().is_ok());
    }

    #[test]
    fn min_revenue_must_be_non_negative() {
        let err = GenrePairParams { min_revenue: -1 }.validate().unwrap_err();
        assert_eq!(field_of(err), "min_revenue");
        assert!(GenrePairParams { min_revenue: 0 }.validate().is_ok());
    }

    #[test]
    fn search_mode_deserializes_lowercase() {
        let mode: SearchMode = serde_json::from_str("\"plot\"").unwrap();
        assert_eq!(mode, SearchMode::Plot);
    }
}
