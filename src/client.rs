//! Search Client
//!
//! Orchestrates pet, message and faceted search behind a read-through result
//! cache, records query analytics, and owns the background expiry sweep.
//!
//! Every search method is best-effort: upstream failures are logged (in debug
//! mode) and replaced by an empty, well-formed response of the operation's
//! type. Failed attempts still count as cache misses with their latency.
//!
//! Concurrent misses for the same key are not coalesced; each caller issues
//! its own request.

use std::sync::Arc;
use std::time::Instant;

use serde::Serialize;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::cache::{generate_cache_key, CacheStats, CachedPayload, SearchCache};
use crate::config::SearchConfig;
use crate::error::Result;
use crate::metrics::{QueryCategory, SearchMetrics};
use crate::models::{
    AdvancedSearchOptions, FacetedSearchRequest, FacetedSearchResponse, MessageSearchOptions,
    MessageSearchResponse, PaginatedResponse, PetSearchFilters, SearchOptions, SearchResult,
    SearchSuggestion, SuggestionScope, DEFAULT_PAGE_LIMIT,
};
use crate::tasks::spawn_cleanup_task;
use crate::transport::{decode, HttpTransport, SearchTransport};

/// Path prefix of every search endpoint, relative to the API URL
pub const SEARCH_BASE_PATH: &str = "/api/v1/search";

fn endpoint(name: &str) -> String {
    format!("{}/{}", SEARCH_BASE_PATH, name)
}

fn elapsed_ms(started: Instant) -> u64 {
    started.elapsed().as_millis() as u64
}

// == Search Client ==
/// API-backed search client with result caching and analytics.
///
/// Must be constructed inside a Tokio runtime: construction spawns the
/// expiry sweep, which runs until [`SearchClient::shutdown`] or drop.
pub struct SearchClient {
    config: SearchConfig,
    transport: Arc<dyn SearchTransport>,
    cache: Arc<RwLock<SearchCache>>,
    metrics: RwLock<SearchMetrics>,
    cleanup_handle: JoinHandle<()>,
}

impl SearchClient {
    // == Constructors ==
    /// Creates a client talking to `config.api_url` over HTTP.
    pub fn new(config: SearchConfig) -> Result<Self> {
        let transport = HttpTransport::new(&config)?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Creates a client over any transport implementation.
    pub fn with_transport(config: SearchConfig, transport: Arc<dyn SearchTransport>) -> Self {
        let cache = Arc::new(RwLock::new(SearchCache::new(
            config.max_cache_size,
            config.cache_ttl,
        )));
        let cleanup_handle = spawn_cleanup_task(cache.clone(), config.cleanup_interval);

        debug!(
            api_url = %config.api_url,
            max_cache_size = config.max_cache_size,
            cache_ttl = ?config.cache_ttl,
            "search client initialized"
        );

        Self {
            config,
            transport,
            cache,
            metrics: RwLock::new(SearchMetrics::new()),
            cleanup_handle,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    // == Pet Search ==
    /// Searches pets, serving repeated identical filter sets from the cache.
    pub async fn search_pets(
        &self,
        filters: &PetSearchFilters,
        options: SearchOptions,
    ) -> PaginatedResponse<SearchResult> {
        let started = Instant::now();
        let cache_key = self.cache_key(QueryCategory::Pets, filters, options);

        if let Some(key) = &cache_key {
            if let Some(CachedPayload::Pets(cached)) = self.cache_lookup(key).await {
                self.record(QueryCategory::Pets, started, true).await;
                return cached;
            }
        }

        match self.fetch_pets(filters).await {
            Ok(response) => {
                if let Some(key) = cache_key {
                    self.cache_store(key, CachedPayload::Pets(response.clone()))
                        .await;
                }
                self.record(QueryCategory::Pets, started, false).await;
                response
            }
            Err(err) => {
                self.record(QueryCategory::Pets, started, false).await;
                if self.config.debug {
                    warn!(error = %err, "Pet search failed");
                }
                PaginatedResponse::failed(
                    filters.page.filter(|p| *p > 0).unwrap_or(1),
                    filters.limit.filter(|l| *l > 0).unwrap_or(DEFAULT_PAGE_LIMIT),
                )
            }
        }
    }

    async fn fetch_pets(&self, filters: &PetSearchFilters) -> Result<PaginatedResponse<SearchResult>> {
        let params = filters.to_query_params()?;
        let payload = self.transport.get(&endpoint("pets"), &params).await?;
        decode(payload)
    }

    // == Message Search ==
    /// Searches messages, serving repeated identical option sets from the cache.
    pub async fn search_messages(
        &self,
        options: &MessageSearchOptions,
        request_options: SearchOptions,
    ) -> MessageSearchResponse {
        let started = Instant::now();
        let cache_key = self.cache_key(QueryCategory::Messages, options, request_options);

        if let Some(key) = &cache_key {
            if let Some(CachedPayload::Messages(cached)) = self.cache_lookup(key).await {
                self.record(QueryCategory::Messages, started, true).await;
                return cached;
            }
        }

        match self.fetch_messages(options).await {
            Ok(response) => {
                if let Some(key) = cache_key {
                    self.cache_store(key, CachedPayload::Messages(response.clone()))
                        .await;
                }
                self.record(QueryCategory::Messages, started, false).await;
                response
            }
            Err(err) => {
                self.record(QueryCategory::Messages, started, false).await;
                if self.config.debug {
                    warn!(error = %err, "Message search failed");
                }
                MessageSearchResponse::empty(
                    options.page.filter(|p| *p > 0).unwrap_or(1),
                    elapsed_ms(started),
                )
            }
        }
    }

    async fn fetch_messages(&self, options: &MessageSearchOptions) -> Result<MessageSearchResponse> {
        let params = options.to_query_params();
        let payload = self.transport.get(&endpoint("messages"), &params).await?;
        decode(payload)
    }

    // == Faceted Search ==
    /// Runs a faceted search. Results are never cached, but the call is
    /// counted as an executed query.
    pub async fn faceted_search(
        &self,
        query: &str,
        options: &AdvancedSearchOptions,
    ) -> FacetedSearchResponse {
        let started = Instant::now();
        let result = self.fetch_faceted(query, options).await;
        self.record(QueryCategory::Faceted, started, false).await;

        match result {
            Ok(response) => response,
            Err(err) => {
                if self.config.debug {
                    warn!(error = %err, "Faceted search failed");
                }
                FacetedSearchResponse::empty(elapsed_ms(started))
            }
        }
    }

    async fn fetch_faceted(
        &self,
        query: &str,
        options: &AdvancedSearchOptions,
    ) -> Result<FacetedSearchResponse> {
        let body = serde_json::to_value(FacetedSearchRequest { query, options })?;
        let payload = self.transport.post(&endpoint("faceted"), &body).await?;
        decode(payload)
    }

    // == Suggestions ==
    /// Fetches autocomplete suggestions. Uncached and not counted in metrics.
    pub async fn get_search_suggestions(
        &self,
        query: &str,
        scope: SuggestionScope,
    ) -> Vec<SearchSuggestion> {
        let params = vec![
            ("q".to_string(), query.to_string()),
            ("type".to_string(), scope.as_str().to_string()),
        ];

        let result: Result<Vec<SearchSuggestion>> =
            match self.transport.get(&endpoint("suggestions"), &params).await {
                Ok(payload) => decode(payload),
                Err(err) => Err(err),
            };

        result.unwrap_or_else(|err| {
            if self.config.debug {
                warn!(error = %err, "Failed to get search suggestions");
            }
            Vec::new()
        })
    }

    // == Introspection ==
    /// Returns a snapshot of the search metrics.
    pub async fn get_search_metrics(&self) -> SearchMetrics {
        self.metrics.read().await.clone()
    }

    /// Returns cache occupancy and hit rate.
    pub async fn get_cache_stats(&self) -> CacheStats {
        let (size, max_size) = {
            let cache = self.cache.read().await;
            (cache.len(), cache.max_size())
        };
        let metrics = self.metrics.read().await;

        CacheStats::new(size, metrics.cache_hits, metrics.cache_misses, max_size)
    }

    /// Empties the result cache. Metrics are kept.
    pub async fn clear_cache(&self) {
        self.cache.write().await.clear();
        debug!("Search cache cleared");
    }

    // == Lifecycle ==
    /// Stops the background expiry sweep.
    ///
    /// Searches keep working afterwards; expired entries are then only
    /// dropped when read.
    pub fn shutdown(&self) {
        self.cleanup_handle.abort();
        debug!("search client expiry sweep stopped");
    }

    /// Returns true while the background expiry sweep is alive.
    pub fn is_running(&self) -> bool {
        !self.cleanup_handle.is_finished()
    }

    // == Helpers ==
    fn cache_key<T: Serialize + ?Sized>(
        &self,
        category: QueryCategory,
        params: &T,
        options: SearchOptions,
    ) -> Option<String> {
        if !options.use_cache {
            return None;
        }

        match generate_cache_key(category, params) {
            Ok(key) => Some(key),
            Err(err) => {
                debug!(error = %err, %category, "cache key unavailable, bypassing cache");
                None
            }
        }
    }

    async fn cache_lookup(&self, key: &str) -> Option<CachedPayload> {
        let hit = self.cache.write().await.get(key);
        debug!(key, hit = hit.is_some(), "cache lookup");
        hit
    }

    async fn cache_store(&self, key: String, payload: CachedPayload) {
        let evicted = self.cache.write().await.insert(key, payload);
        if let Some(evicted) = evicted {
            debug!(key = %evicted, "cache full, evicted oldest entry");
        }
    }

    async fn record(&self, category: QueryCategory, started: Instant, cache_hit: bool) {
        self.metrics
            .write()
            .await
            .record(category, elapsed_ms(started), cache_hit);
    }
}

impl Drop for SearchClient {
    fn drop(&mut self) {
        self.cleanup_handle.abort();
    }
}
