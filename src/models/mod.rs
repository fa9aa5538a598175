//! Request and Response models for the search client
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing search parameters and deserializing backend responses.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub(crate) use requests::FacetedSearchRequest;
pub use requests::{
    AdvancedSearchOptions, DateRange, GeoLocation, MessageSearchOptions, MessageSortBy,
    PetSearchFilters, SearchOptions, SortOrder, SuggestionScope,
};
pub use responses::{
    Facet, FacetValue, FacetedSearchResponse, MessageSearchResponse, MessageSearchResult,
    PaginatedResponse, Pagination, SearchResult, SearchSuggestion, DEFAULT_PAGE_LIMIT,
};
