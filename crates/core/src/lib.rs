pub mod auth;
pub mod client;
pub mod config;
pub mod errors;
pub mod form;
pub mod models;
pub mod providers;
pub mod services;

use tracing::debug;

use auth::{AuthContext, User};
use client::assets::AssetApiClient;
use client::prices::PriceApiClient;
use config::Config;
use errors::CoreError;
use form::AssetForm;
use models::aggregate::PortfolioOverview;
use models::asset::{AssetEdit, AssetRecord};
use models::chart::{ChartPoint, ChartSlice, GrowthBar};
use models::snapshot::PriceSnapshot;
use providers::polygon::PolygonProvider;
use services::chart::ChartService;
use services::ticker_search::{SearchOutcome, TickerSearchService};
use services::valuation::ValuationService;

/// Main entry point for the Financify core library.
///
/// Owns the auth context, the API clients, and the transient view state
/// (asset list + price snapshot for the current fetch cycle). The API
/// server remains the source of truth; everything here is a cached copy
/// discarded on logout.
#[must_use]
pub struct Financify {
    config: Config,
    auth: AuthContext,
    asset_api: AssetApiClient,
    price_api: PriceApiClient,
    valuation: ValuationService,
    charts: ChartService,
    /// Present only when a ticker-search API key is configured.
    ticker_search: Option<TickerSearchService>,
    assets: Vec<AssetRecord>,
    snapshot: Option<PriceSnapshot>,
}

impl std::fmt::Debug for Financify {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Financify")
            .field("api_base_url", &self.config.api_base_url)
            .field("authenticated", &self.auth.is_authenticated())
            .field("assets", &self.assets.len())
            .field("has_snapshot", &self.snapshot.is_some())
            .finish()
    }
}

impl Financify {
    pub fn new(config: Config) -> Self {
        let ticker_search = config
            .polygon_api_key
            .clone()
            .map(|key| TickerSearchService::new(Box::new(PolygonProvider::new(key))));

        Self {
            asset_api: AssetApiClient::new(config.clone()),
            price_api: PriceApiClient::new(config.clone()),
            valuation: ValuationService::new(),
            charts: ChartService::new(),
            ticker_search,
            auth: AuthContext::new(),
            assets: Vec::new(),
            snapshot: None,
            config,
        }
    }

    /// Build from `FINANCIFY_*` environment variables.
    pub fn from_env() -> Result<Self, CoreError> {
        Ok(Self::new(Config::from_env()?))
    }

    // ── Auth ────────────────────────────────────────────────────────

    /// Store the user/token pair after a successful login.
    pub fn login(&mut self, user: User, token: impl Into<String>) {
        self.auth.login(user, token);
    }

    /// Drop the session and all view state fetched under it.
    pub fn logout(&mut self) {
        self.auth.logout();
        self.assets.clear();
        self.snapshot = None;
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.auth.is_authenticated()
    }

    #[must_use]
    pub fn current_user(&self) -> Option<&User> {
        self.auth.current_user()
    }

    // ── Fetch cycle ─────────────────────────────────────────────────

    /// Fetch the asset list and a fresh price snapshot.
    ///
    /// All-or-nothing: if any request fails, the previous view state is
    /// left untouched and the error is surfaced for display.
    pub async fn refresh(&mut self) -> Result<(), CoreError> {
        let token = self.auth.bearer_token()?.to_string();
        let assets = self.asset_api.list_assets(&token).await?;
        let snapshot = self.price_api.fetch_snapshot(&token).await?;

        debug!(assets = assets.len(), "view state refreshed");
        self.assets = assets;
        self.snapshot = Some(snapshot);
        Ok(())
    }

    /// The currently loaded asset list (empty until the first `refresh`).
    #[must_use]
    pub fn assets(&self) -> &[AssetRecord] {
        &self.assets
    }

    #[must_use]
    pub fn snapshot(&self) -> Option<&PriceSnapshot> {
        self.snapshot.as_ref()
    }

    // ── Dashboard ───────────────────────────────────────────────────

    /// Aggregate the loaded assets against the loaded snapshot.
    pub fn overview(&self) -> Result<PortfolioOverview, CoreError> {
        let snapshot = self
            .snapshot
            .as_ref()
            .ok_or_else(|| CoreError::Validation("no price data loaded — refresh first".into()))?;
        Ok(self.valuation.aggregate(&self.assets, snapshot))
    }

    /// Allocation pie series (nonzero types only).
    pub fn allocation_series(&self) -> Result<Vec<ChartSlice>, CoreError> {
        Ok(self.charts.allocation_series(&self.overview()?))
    }

    /// Growth comparison bars (current vs invested, all types, stable axis).
    pub fn growth_series(&self) -> Result<Vec<GrowthBar>, CoreError> {
        Ok(self.charts.growth_series(&self.overview()?))
    }

    /// Cumulative invested-by-month series for the loaded assets.
    #[must_use]
    pub fn invested_over_time(&self) -> Vec<ChartPoint> {
        self.charts.invested_over_time(&self.assets)
    }

    /// The `n` most recently created holdings, newest first.
    #[must_use]
    pub fn latest_investments(&self, n: usize) -> Vec<&AssetRecord> {
        let mut sorted: Vec<&AssetRecord> = self.assets.iter().collect();
        sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        sorted.truncate(n);
        sorted
    }

    // ── Mutations ───────────────────────────────────────────────────

    /// Validate and submit the add-investment form. On success the server's
    /// echo (with id and timestamp) is appended to the loaded list.
    /// Returns the new record's id.
    pub async fn submit(&mut self, form: &AssetForm) -> Result<String, CoreError> {
        let new_asset = form.build()?;
        let token = self.auth.bearer_token()?.to_string();
        let created = self.asset_api.create_asset(&token, &new_asset).await?;
        let id = created.id.clone();
        self.assets.push(created);
        Ok(id)
    }

    /// Apply an inline edit to one holding: update the typed detail fields,
    /// PUT the full record, and replace the local copy with the server echo.
    pub async fn apply_edit(&mut self, id: &str, edit: AssetEdit) -> Result<(), CoreError> {
        let token = self.auth.bearer_token()?.to_string();
        let record = self
            .assets
            .iter()
            .find(|a| a.id == id)
            .ok_or_else(|| CoreError::AssetNotFound(id.to_string()))?;

        let mut edited = record.clone();
        edit.apply_to(&mut edited.details)?;

        let updated = self.asset_api.update_asset(&token, &edited).await?;
        if let Some(slot) = self.assets.iter_mut().find(|a| a.id == updated.id) {
            *slot = updated;
        }
        Ok(())
    }

    /// Delete a holding. On success exactly that id is removed from the
    /// loaded list.
    pub async fn delete(&mut self, id: &str) -> Result<(), CoreError> {
        let token = self.auth.bearer_token()?.to_string();
        if !self.assets.iter().any(|a| a.id == id) {
            return Err(CoreError::AssetNotFound(id.to_string()));
        }

        self.asset_api.delete_asset(&token, id).await?;
        self.assets.retain(|a| a.id != id);
        Ok(())
    }

    // ── Ticker search ───────────────────────────────────────────────

    /// Debounced stock symbol search for the form's picker.
    /// Requires a configured ticker-search API key.
    pub async fn search_tickers(&mut self, query: &str) -> Result<SearchOutcome, CoreError> {
        self.auth.bearer_token()?;
        let service = self
            .ticker_search
            .as_mut()
            .ok_or_else(|| CoreError::Config("no ticker search API key configured".into()))?;
        service.search(query).await
    }

    /// Swap in a custom ticker-search service (tests, alternate providers).
    pub fn set_ticker_search(&mut self, service: TickerSearchService) {
        self.ticker_search = Some(service);
    }
}
