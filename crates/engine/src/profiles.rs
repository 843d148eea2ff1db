//! Item content profiles.
//!
//! A one-time build derives a text document per catalog item, fits the shared
//! TF-IDF vocabulary over the whole corpus, and freezes the resulting
//! item-by-term matrix together with an explicit item-id to matrix-row
//! mapping. Queries only ever project into this space; the catalog must be
//! rebuilt to change it.

use std::collections::HashMap;

use recommender_core::math::SparseVector;
use recommender_core::CatalogItem;
use tracing::info;

use crate::vectorizer::TfidfVectorizer;
use crate::{EngineError, Result};

/// Frozen output of the one-time profile build.
#[derive(Debug, Clone)]
pub struct ContentProfiles {
    vectorizer: TfidfVectorizer,
    matrix: Vec<SparseVector>,
    row_of: HashMap<u64, usize>,
}

impl ContentProfiles {
    /// The fitted vectorizer, for projecting query text.
    pub fn vectorizer(&self) -> &TfidfVectorizer {
        &self.vectorizer
    }

    /// Matrix row for an item id, resolved through the explicit mapping
    /// built alongside the matrix.
    pub fn row(&self, item_id: u64) -> Option<&SparseVector> {
        self.row_of.get(&item_id).map(|&row| &self.matrix[row])
    }

    /// Number of item rows in the matrix.
    pub fn len(&self) -> usize {
        self.matrix.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matrix.is_empty()
    }
}

/// Builds [`ContentProfiles`] from the catalog.
pub struct ContentProfileBuilder;

impl ContentProfileBuilder {
    /// Derive per-item text documents, fit the vocabulary once, and freeze
    /// the content matrix.
    ///
    /// Attaches the derived `text_features` string to each item as a cache
    /// (recomputing yields the identical string). Items with no keywords and
    /// no description get a zero row, never an error.
    ///
    /// # Errors
    ///
    /// Duplicate item ids are rejected: two rows for one id would make every
    /// id-to-row lookup ambiguous and corrupt scoring for the whole catalog.
    pub fn build(items: &mut [CatalogItem]) -> Result<ContentProfiles> {
        let mut row_of = HashMap::with_capacity(items.len());
        for (row, item) in items.iter().enumerate() {
            if row_of.insert(item.id, row).is_some() {
                return Err(EngineError::DuplicateItemId { id: item.id });
            }
        }

        let corpus: Vec<String> = items
            .iter_mut()
            .map(|item| {
                let text = derive_text_features(item);
                item.text_features = Some(text.clone());
                text
            })
            .collect();

        let vectorizer = TfidfVectorizer::fit_corpus(&corpus);
        let matrix = vectorizer.transform_corpus(&corpus);

        info!(
            items = matrix.len(),
            vocabulary = vectorizer.vocabulary_size(),
            "content profiles built"
        );

        Ok(ContentProfiles {
            vectorizer,
            matrix,
            row_of,
        })
    }
}

/// The item's text document: keyword tags joined with the description.
fn derive_text_features(item: &CatalogItem) -> String {
    let mut text = item.keywords.join(" ");
    if !item.description.is_empty() {
        if !text.is_empty() {
            text.push(' ');
        }
        text.push_str(&item.description);
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u64, keywords: &[&str], description: &str) -> CatalogItem {
        CatalogItem::new(
            id,
            format!("item-{id}"),
            "general",
            description,
            keywords.iter().map(|s| s.to_string()).collect(),
        )
    }

    #[test]
    fn test_build_attaches_text_features() {
        let mut items = vec![
            item(1, &["fitness"], "running shoes"),
            item(2, &[], "desk chair"),
            item(3, &["audio", "wireless"], ""),
        ];

        let profiles = ContentProfileBuilder::build(&mut items).unwrap();

        assert_eq!(profiles.len(), 3);
        assert_eq!(items[0].text_features.as_deref(), Some("fitness running shoes"));
        assert_eq!(items[1].text_features.as_deref(), Some("desk chair"));
        assert_eq!(items[2].text_features.as_deref(), Some("audio wireless"));
    }

    #[test]
    fn test_build_is_deterministic() {
        let mut first = vec![item(1, &["fitness"], "shoes"), item(2, &["office"], "chair")];
        let mut second = first.clone();

        ContentProfileBuilder::build(&mut first).unwrap();
        ContentProfileBuilder::build(&mut second).unwrap();

        assert_eq!(first[0].text_features, second[0].text_features);
    }

    #[test]
    fn test_empty_text_yields_zero_row() {
        let mut items = vec![item(1, &[], ""), item(2, &["office"], "chair")];
        let profiles = ContentProfileBuilder::build(&mut items).unwrap();

        assert!(profiles.row(1).unwrap().is_empty());
        assert!(!profiles.row(2).unwrap().is_empty());
    }

    #[test]
    fn test_row_lookup_is_by_id_not_position() {
        let mut items = vec![item(42, &["fitness"], ""), item(7, &["office"], "")];
        let profiles = ContentProfileBuilder::build(&mut items).unwrap();

        assert!(profiles.row(42).is_some());
        assert!(profiles.row(7).is_some());
        assert!(profiles.row(0).is_none());
    }

    #[test]
    fn test_duplicate_item_ids_are_rejected() {
        let mut items = vec![item(1, &["a"], ""), item(1, &["b"], "")];
        let err = ContentProfileBuilder::build(&mut items).unwrap_err();
        assert!(matches!(err, EngineError::DuplicateItemId { id: 1 }));
    }
}
