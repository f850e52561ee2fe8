//! Mock implementations for testing
//!
//! This module provides mockall-backed doubles for the two outbound seams,
//! the generative model and the photo search providers, so features can be
//! tested in isolation without network access.

#![allow(dead_code)]

use async_trait::async_trait;
use mockall::mock;

use crate::core::llm::{GenAiError, GenerationConfig, GenerativeModel};
use crate::core::photos::{ImageSearch, PhotoError, PhotoHit};

// ============================================================================
// Generative Model Mock
// ============================================================================

mock! {
    pub Model {}

    #[async_trait]
    impl GenerativeModel for Model {
        fn id(&self) -> &str;
        fn model(&self) -> &str;
        async fn generate(
            &self,
            prompt: &str,
            config: &GenerationConfig,
        ) -> crate::core::llm::Result<String>;
    }
}

/// Create a mock model that replies with the given raw text on every call.
pub fn scripted_model(raw: &str) -> MockModel {
    let raw = raw.to_string();
    let mut mock = MockModel::new();
    mock.expect_id().return_const("mock".to_string());
    mock.expect_model().return_const("mock-model-v1".to_string());
    mock.expect_generate()
        .returning(move |_prompt, _config| Ok(raw.clone()));
    mock
}

/// Create a mock model that reports upstream throttling on every call.
pub fn rate_limited_model() -> MockModel {
    let mut mock = MockModel::new();
    mock.expect_id().return_const("mock".to_string());
    mock.expect_model().return_const("mock-model-v1".to_string());
    mock.expect_generate().returning(|_prompt, _config| {
        Err(GenAiError::RateLimited {
            message: "429 resource exhausted".to_string(),
        })
    });
    mock
}

/// Create a mock model that fails every call with a non-throttling error.
pub fn failing_model() -> MockModel {
    let mut mock = MockModel::new();
    mock.expect_id().return_const("mock".to_string());
    mock.expect_model().return_const("mock-model-v1".to_string());
    mock.expect_generate().returning(|_prompt, _config| {
        Err(GenAiError::Api {
            status: 500,
            message: "internal error".to_string(),
        })
    });
    mock
}

// ============================================================================
// Photo Search Mock
// ============================================================================

mock! {
    pub PhotoSearch {}

    #[async_trait]
    impl ImageSearch for PhotoSearch {
        fn label(&self) -> &'static str;
        async fn search(&self, keyword: &str) -> crate::core::photos::Result<Option<PhotoHit>>;
    }
}

/// Create a mock search returning one deterministic hit per keyword.
pub fn stock_photo_search() -> MockPhotoSearch {
    let mut mock = MockPhotoSearch::new();
    mock.expect_label().return_const("Unsplash");
    mock.expect_search().returning(|keyword| {
        Ok(Some(PhotoHit {
            url: format!("https://images.example.com/{keyword}"),
            photographer: "Ada Lensweaver".to_string(),
        }))
    });
    mock
}

/// Create a mock search that never has a match.
pub fn empty_photo_search() -> MockPhotoSearch {
    let mut mock = MockPhotoSearch::new();
    mock.expect_label().return_const("Pexels");
    mock.expect_search().returning(|_keyword| Ok(None));
    mock
}

/// Create a mock search that fails every request.
pub fn failing_photo_search() -> MockPhotoSearch {
    let mut mock = MockPhotoSearch::new();
    mock.expect_label().return_const("Unsplash");
    mock.expect_search().returning(|_keyword| {
        Err(PhotoError::Api {
            status: 500,
            message: "server error".to_string(),
        })
    });
    mock
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_scripted_model_replies() {
        let mock = scripted_model("{\"sentiment\":\"neutral\"}");
        assert_eq!(mock.id(), "mock");
        let reply = mock
            .generate("any prompt", &GenerationConfig::new())
            .await
            .unwrap();
        assert!(reply.contains("neutral"));
    }

    #[tokio::test]
    async fn test_rate_limited_model_is_classified() {
        let mock = rate_limited_model();
        let err = mock
            .generate("any prompt", &GenerationConfig::new())
            .await
            .unwrap_err();
        assert!(err.is_rate_limited());
    }

    #[tokio::test]
    async fn test_stock_photo_search_hits() {
        let mock = stock_photo_search();
        assert_eq!(mock.label(), "Unsplash");
        let hit = mock.search("sunrise").await.unwrap().unwrap();
        assert!(hit.url.ends_with("/sunrise"));
        assert_eq!(hit.photographer, "Ada Lensweaver");
    }

    #[tokio::test]
    async fn test_empty_photo_search_returns_none() {
        let mock = empty_photo_search();
        assert!(mock.search("anything").await.unwrap().is_none());
    }
}
