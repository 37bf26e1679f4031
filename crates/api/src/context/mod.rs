//! Application context - dependency injection container

use std::sync::Arc;

use a11ylens_core::{
    store_retry, AnalysisRepository, AnalysisService, ConnectionService, PageFetcher,
    QuizRepository, QuizService, StoreHealth, TagCounter,
};
use a11ylens_domain::{Config, Result};
use a11ylens_infra::{HttpPageFetcher, RestStoreClient, ScraperTagCounter, UnconfiguredStore};
use tracing::{info, warn};

/// Adapters the services are built from
///
/// [`AppContext::new`] builds the production set; tests pass their own.
pub struct Adapters {
    pub fetcher: Arc<dyn PageFetcher>,
    pub counter: Arc<dyn TagCounter>,
    pub analyses: Arc<dyn AnalysisRepository>,
    pub quiz: Arc<dyn QuizRepository>,
    pub health: Arc<dyn StoreHealth>,
}

impl Adapters {
    /// Build the production adapters from configuration.
    ///
    /// Without store credentials every store port is an [`UnconfiguredStore`],
    /// so analysis keeps working and only persistence reports errors.
    pub fn from_config(config: &Config) -> Result<Self> {
        let fetcher: Arc<dyn PageFetcher> = Arc::new(HttpPageFetcher::new(&config.fetcher)?);
        let counter: Arc<dyn TagCounter> = Arc::new(ScraperTagCounter::new());

        if !config.store.is_configured() {
            warn!("Store credentials not configured; analyses will not be persisted");
            let store = Arc::new(UnconfiguredStore);
            return Ok(Self {
                fetcher,
                counter,
                analyses: store.clone(),
                quiz: store.clone(),
                health: store,
            });
        }

        let store = Arc::new(RestStoreClient::new(&config.store)?);
        info!(schema = %config.store.schema, "Store client configured");
        Ok(Self { fetcher, counter, analyses: store.clone(), quiz: store.clone(), health: store })
    }
}

/// Application context - holds all services and dependencies
pub struct AppContext {
    pub config: Config,
    pub analysis: AnalysisService,
    pub quiz: QuizService,
    pub connection: ConnectionService,
}

impl AppContext {
    /// Create the context with production adapters.
    ///
    /// # Errors
    /// Returns `A11yError::Config` for an invalid retry policy, store URL or
    /// HTTP client setting.
    pub fn new(config: Config) -> Result<Self> {
        let adapters = Adapters::from_config(&config)?;
        Self::with_adapters(config, adapters)
    }

    /// Create the context around the given adapters.
    ///
    /// Both store-facing services share one retry policy built from
    /// `config.retry`. The connection check is not retried.
    pub fn with_adapters(config: Config, adapters: Adapters) -> Result<Self> {
        let retry = store_retry(&config.retry)?;

        let analysis =
            AnalysisService::new(adapters.fetcher, adapters.counter, adapters.analyses.clone())
                .with_retry(retry.clone());
        let quiz = QuizService::new(adapters.analyses, adapters.quiz).with_retry(retry);
        let connection = ConnectionService::new(adapters.health);

        info!(
            max_attempts = config.retry.max_attempts,
            initial_delay_ms = config.retry.initial_delay_ms,
            "Application context initialised"
        );

        Ok(Self { config, analysis, quiz, connection })
    }
}
