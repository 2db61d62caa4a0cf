//! Application context - dependency injection container

use std::sync::Arc;

use mountview_core::{BudgetService, BudgetSettings};
use mountview_domain::{Config, Result};
use mountview_infra::SheetsClient;
use tracing::info;

/// Application context - holds the configuration and the budget service
pub struct AppContext {
    pub config: Config,
    pub budget_service: Arc<BudgetService>,
}

impl AppContext {
    /// Wire the spreadsheet proxy client into the budget service.
    ///
    /// # Errors
    /// Returns `MountviewError::Config` if the proxy endpoint is unusable.
    pub fn new(config: Config) -> Result<Self> {
        let sheets = Arc::new(SheetsClient::new(&config.sheets)?);
        let settings = BudgetSettings {
            company_id: config.sheets.company_id.clone(),
            chart: config.chart,
        };
        let budget_service =
            Arc::new(BudgetService::new(sheets.clone(), sheets.clone(), sheets, settings));

        info!(
            company_configured = config.sheets.company_id.is_some(),
            spreadsheet_configured = config.sheets.spreadsheet_id.is_some(),
            "application context initialised"
        );

        Ok(Self { config, budget_service })
    }

    /// Build a context around an existing service (used by tests).
    pub fn with_service(config: Config, budget_service: Arc<BudgetService>) -> Self {
        Self { config, budget_service }
    }
}
