//! Built-in stock-photo library.
//!
//! Stands in for a real image-search service. Any replacement implementation
//! must keep the contract: case-insensitive substring/keyword matching and a
//! never-empty result when the underlying catalog is non-empty.

use async_trait::async_trait;

use crate::ports::{StockImage, StockImagePort};

/// Generic lighting terms; a query containing any of them matches the whole
/// library.
const GENERIC_KEYWORDS: [&str; 4] = ["light", "led", "lamp", "ceiling"];

/// The fixed candidate catalog of lighting photos.
pub struct FixedStockLibrary {
    candidates: Vec<StockImage>,
}

impl FixedStockLibrary {
    #[must_use]
    pub fn new() -> Self {
        Self {
            candidates: vec![
                candidate("1", 1_571_460, "Modern LED Ceiling Light"),
                candidate("2", 1_571_461, "Flush Mount LED Light"),
                candidate("3", 1_571_462, "Smart WiFi Ceiling Light"),
                candidate("4", 1_571_463, "LED Ceiling Fan with Light"),
                candidate("5", 1_571_464, "Smart Ceiling Fan"),
                candidate("6", 1_571_465, "6 Inch LED Recessed Light"),
            ],
        }
    }

    /// Candidates whose name contains the query, or the whole catalog when
    /// the query carries a generic lighting keyword. An empty match falls
    /// back to the first three candidates.
    fn filter(&self, query: &str) -> Vec<StockImage> {
        let query = query.to_lowercase();
        let matched: Vec<StockImage> = self
            .candidates
            .iter()
            .filter(|image| {
                image.name.to_lowercase().contains(&query)
                    || GENERIC_KEYWORDS.iter().any(|keyword| query.contains(keyword))
            })
            .cloned()
            .collect();

        if matched.is_empty() {
            self.candidates.iter().take(3).cloned().collect()
        } else {
            matched
        }
    }
}

fn candidate(id: &str, photo: u32, name: &str) -> StockImage {
    StockImage {
        id: id.to_string(),
        url: format!(
            "https://images.pexels.com/photos/{photo}/pexels-photo-{photo}.jpeg?auto=compress&cs=tinysrgb&w=800"
        ),
        name: name.to_string(),
        photographer: "Pexels".to_string(),
    }
}

#[async_trait]
impl StockImagePort for FixedStockLibrary {
    async fn search(&self, query: &str) -> Vec<StockImage> {
        self.filter(query)
    }
}

impl Default for FixedStockLibrary {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generic_keyword_query_matches_everything() {
        let library = FixedStockLibrary::new();
        assert_eq!(library.filter("led").len(), 6);
        assert_eq!(library.filter("ceiling lamp").len(), 6);
    }

    #[test]
    fn test_name_substring_match() {
        let library = FixedStockLibrary::new();
        let results = library.filter("flush");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Flush Mount LED Light");
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let library = FixedStockLibrary::new();
        assert_eq!(library.filter("FLUSH").len(), 1);
        assert_eq!(library.filter("LED").len(), 6);
    }

    #[test]
    fn test_nonsense_query_falls_back_to_first_three() {
        let library = FixedStockLibrary::new();
        let results = library.filter("xyzzy");
        assert_eq!(results.len(), 3);
        let ids: Vec<&str> = results.iter().map(|image| image.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_candidate_urls_are_pexels_photos() {
        let library = FixedStockLibrary::new();
        let all = library.filter("light");
        assert!(all.iter().all(|image| {
            image.url.starts_with("https://images.pexels.com/photos/")
                && image.photographer == "Pexels"
        }));
    }
}
