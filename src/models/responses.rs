//! Response DTOs for the search client
//!
//! Defines the decoded backend payloads and the empty shapes returned
//! when a search fails.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Page size assumed when a failed pet search did not request one
pub const DEFAULT_PAGE_LIMIT: u32 = 12;

fn default_true() -> bool {
    true
}

/// Pagination block attached to list responses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub total_pages: u32,
    pub has_next: bool,
    pub has_prev: bool,
}

/// Paginated list envelope returned by pet search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    #[serde(default = "default_true")]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    pub pagination: Pagination,
}

impl<T> PaginatedResponse<T> {
    /// Empty, well-formed response substituted for a failed search.
    pub fn failed(page: u32, limit: u32) -> Self {
        Self {
            data: Vec::new(),
            success: false,
            message: Some("Search failed".to_string()),
            timestamp: Some(chrono::Utc::now().to_rfc3339()),
            pagination: Pagination {
                page,
                limit,
                ..Pagination::default()
            },
        }
    }
}

/// A single ranked hit from pet or faceted search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub id: String,
    #[serde(rename = "type")]
    pub result_type: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub metadata: Map<String, Value>,
    #[serde(default)]
    pub relevance_score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// A message matched by message search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageSearchResult {
    pub id: String,
    pub conversation_id: String,
    pub content: String,
    pub sender_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_name: Option<String>,
    pub created_at: String,
    /// Content with matched terms marked up
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlight: Option<String>,
}

/// Result page returned by message search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageSearchResponse {
    pub results: Vec<MessageSearchResult>,
    pub total: u64,
    pub page: u32,
    pub total_pages: u32,
    pub has_next: bool,
    pub has_prev: bool,
    /// Query time in milliseconds
    #[serde(default)]
    pub query_time: u64,
}

impl MessageSearchResponse {
    /// Empty response substituted for a failed search.
    pub fn empty(page: u32, query_time: u64) -> Self {
        Self {
            results: Vec::new(),
            total: 0,
            page,
            total_pages: 0,
            has_next: false,
            has_prev: false,
            query_time,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacetValue {
    pub value: String,
    pub count: u64,
}

/// Aggregate counts for one facet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Facet {
    pub name: String,
    pub values: Vec<FacetValue>,
}

/// Results plus facet aggregates returned by faceted search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacetedSearchResponse {
    pub results: Vec<SearchResult>,
    pub facets: Vec<Facet>,
    pub total: u64,
    pub page: u32,
    pub total_pages: u32,
    #[serde(default)]
    pub query_time: u64,
}

impl FacetedSearchResponse {
    /// Empty response substituted for a failed search.
    pub fn empty(query_time: u64) -> Self {
        Self {
            results: Vec::new(),
            facets: Vec::new(),
            total: 0,
            page: 1,
            total_pages: 0,
            query_time,
        }
    }
}

/// Autocomplete suggestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchSuggestion {
    pub text: String,
    /// Suggestion kind reported by the backend (e.g. `query`, `filter`)
    #[serde(rename = "type")]
    pub suggestion_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_failed_pet_response_shape() {
        let resp: PaginatedResponse<SearchResult> = PaginatedResponse::failed(3, 24);
        assert!(!resp.success);
        assert!(resp.data.is_empty());
        assert_eq!(resp.message.as_deref(), Some("Search failed"));
        assert!(resp.timestamp.is_some());
        assert_eq!(resp.pagination.page, 3);
        assert_eq!(resp.pagination.limit, 24);
        assert_eq!(resp.pagination.total, 0);
        assert!(!resp.pagination.has_next);
        assert!(!resp.pagination.has_prev);
    }

    #[test]
    fn test_paginated_response_deserialize() {
        let payload = json!({
            "data": [{
                "id": "pet-123",
                "type": "pet",
                "title": "Buddy - Golden Retriever",
                "metadata": { "breed": "Golden Retriever", "age": 2 },
                "relevanceScore": 0.95
            }],
            "pagination": {
                "page": 1, "limit": 12, "total": 1,
                "totalPages": 1, "hasNext": false, "hasPrev": false
            }
        });

        let resp: PaginatedResponse<SearchResult> = serde_json::from_value(payload).unwrap();
        assert!(resp.success, "missing success flag defaults to true");
        assert_eq!(resp.data[0].result_type, "pet");
        assert_eq!(resp.data[0].metadata["age"], 2);
        assert_eq!(resp.pagination.total, 1);
    }

    #[test]
    fn test_message_response_empty() {
        let resp = MessageSearchResponse::empty(2, 17);
        assert!(resp.results.is_empty());
        assert_eq!(resp.page, 2);
        assert_eq!(resp.query_time, 17);
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["totalPages"], 0);
        assert_eq!(json["queryTime"], 17);
    }

    #[test]
    fn test_faceted_response_empty() {
        let resp = FacetedSearchResponse::empty(5);
        assert!(resp.results.is_empty());
        assert!(resp.facets.is_empty());
        assert_eq!(resp.page, 1);
        assert_eq!(resp.total, 0);
    }

    #[test]
    fn test_suggestion_deserialize() {
        let suggestion: SearchSuggestion =
            serde_json::from_value(json!({ "text": "large dogs", "type": "filter", "category": "size" }))
                .unwrap();
        assert_eq!(suggestion.suggestion_type, "filter");
        assert_eq!(suggestion.category.as_deref(), Some("size"));
        assert!(suggestion.count.is_none());
    }
}
