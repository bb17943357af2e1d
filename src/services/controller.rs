use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use tokio::sync::RwLock;

use crate::{
    config::{Config, DEFAULT_RESULT_LIMIT},
    error::AppResult,
    models::Movie,
    services::providers::MovieCatalog,
    view::{self, Page},
};

/// Everything the renderer needs to draw the page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    /// Current result set in server order
    pub items: Vec<Movie>,
    pub is_loading: bool,
    /// Set only when the most recently settled request failed
    pub error_message: Option<String>,
    /// Last submitted search, empty while showing recommendations
    pub active_query_text: String,
}

/// How settlements of overlapping requests are reconciled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SettlementPolicy {
    /// Whichever request settles last overwrites the state, even if it was
    /// dispatched first.
    #[default]
    LastSettledWins,
    /// Settlements of requests superseded by a later dispatch are dropped.
    LatestDispatchWins,
}

/// A user-triggered request to populate the result set
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Recommend,
    Search(String),
}

impl Intent {
    fn query_text(&self) -> &str {
        match self {
            Intent::Recommend => "",
            Intent::Search(query) => query,
        }
    }
}

/// What a settled request did to the view state
#[derive(Debug, Clone, PartialEq)]
pub enum Settlement {
    /// `items` was replaced; zero is a valid count
    Loaded { count: usize },
    /// `error_message` was set and `items` left untouched
    Failed { message: String },
    /// A later request was dispatched first and this outcome was dropped
    Superseded,
}

struct Inner {
    view: ViewState,
    /// Sequence number of the most recently dispatched request
    latest_dispatch: u64,
}

/// Owner of the view state and the only writer to it
///
/// State transitions happen under a single write lock, so a reader never sees
/// loading cleared without the matching items or error committed.
pub struct FetchController {
    catalog: Arc<dyn MovieCatalog>,
    limit: u32,
    policy: SettlementPolicy,
    inner: RwLock<Inner>,
    mounted: AtomicBool,
}

impl FetchController {
    /// Creates an idle controller; nothing is fetched until `attach`
    pub fn new(catalog: Arc<dyn MovieCatalog>) -> Self {
        Self {
            catalog,
            limit: DEFAULT_RESULT_LIMIT,
            policy: SettlementPolicy::default(),
            inner: RwLock::new(Inner {
                view: ViewState::default(),
                latest_dispatch: 0,
            }),
            mounted: AtomicBool::new(false),
        }
    }

    /// Creates a controller with limit and policy taken from configuration
    pub fn from_config(catalog: Arc<dyn MovieCatalog>, config: &Config) -> AppResult<Self> {
        config.validate()?;
        let policy = if config.discard_stale_responses {
            SettlementPolicy::LatestDispatchWins
        } else {
            SettlementPolicy::LastSettledWins
        };
        Ok(Self::new(catalog)
            .with_limit(config.result_limit)
            .with_policy(policy))
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_policy(mut self, policy: SettlementPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Constructs the controller and runs the initial recommendation load
    pub async fn mount(catalog: Arc<dyn MovieCatalog>) -> Self {
        let controller = Self::new(catalog);
        controller.attach().await;
        controller
    }

    /// Lifecycle hook for the view being attached
    ///
    /// The first call triggers `load_recommendations`; later calls are no-ops
    /// and return `None`.
    pub async fn attach(&self) -> Option<Settlement> {
        if self.mounted.swap(true, Ordering::SeqCst) {
            tracing::debug!("Controller already attached, skipping initial load");
            return None;
        }
        Some(self.load_recommendations().await)
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn policy(&self) -> SettlementPolicy {
        self.policy
    }

    /// Fetches a fresh set of recommendations
    pub async fn load_recommendations(&self) -> Settlement {
        self.dispatch(Intent::Recommend).await
    }

    /// Searches by free text; a blank query loads recommendations instead
    pub async fn run_search(&self, query_text: &str) -> Settlement {
        if query_text.trim().is_empty() {
            tracing::debug!("Blank search query, loading recommendations");
            return self.load_recommendations().await;
        }
        self.dispatch(Intent::Search(query_text.to_string())).await
    }

    /// Consistent copy of the current view state
    pub async fn snapshot(&self) -> ViewState {
        self.inner.read().await.view.clone()
    }

    /// Renders the current state
    pub async fn render(&self) -> Page {
        view::render(&self.inner.read().await.view)
    }

    async fn dispatch(&self, intent: Intent) -> Settlement {
        let seq = self.begin(&intent).await;

        let outcome = match &intent {
            Intent::Recommend => self.catalog.fetch_recommendations(self.limit).await,
            Intent::Search(query) => self.catalog.search_movies(query, self.limit).await,
        };

        self.settle(seq, &intent, outcome).await
    }

    /// Idle -> Loading
    async fn begin(&self, intent: &Intent) -> u64 {
        let mut inner = self.inner.write().await;
        inner.latest_dispatch += 1;
        inner.view.is_loading = true;
        inner.view.error_message = None;
        inner.view.active_query_text = intent.query_text().to_string();

        tracing::info!(
            seq = inner.latest_dispatch,
            intent = ?intent,
            limit = self.limit,
            "Dispatching catalog request"
        );
        inner.latest_dispatch
    }

    /// Loading -> Success | Failure -> Idle
    async fn settle(
        &self,
        seq: u64,
        intent: &Intent,
        outcome: AppResult<Vec<Movie>>,
    ) -> Settlement {
        let mut inner = self.inner.write().await;

        if self.policy == SettlementPolicy::LatestDispatchWins && seq != inner.latest_dispatch {
            tracing::debug!(
                seq,
                latest = inner.latest_dispatch,
                intent = ?intent,
                "Dropping settlement of superseded request"
            );
            return Settlement::Superseded;
        }

        inner.view.is_loading = false;
        match outcome {
            Ok(movies) => {
                let count = movies.len();
                inner.view.items = movies;
                inner.view.error_message = None;
                tracing::info!(seq, intent = ?intent, results = count, "Catalog request settled");
                Settlement::Loaded { count }
            }
            Err(e) => {
                let message = e.to_string();
                inner.view.error_message = Some(message.clone());
                tracing::warn!(seq, intent = ?intent, error = %e, "Catalog request failed");
                Settlement::Failed { message }
            }
        }
    }
}
