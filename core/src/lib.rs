pub mod amount;
pub mod config;
pub mod currency;
pub mod error;
pub mod model;
pub mod repository;
pub mod service;
pub mod state;
pub mod usecase;

pub use amount::parse_amount;
pub use config::{Config, ConfigError};
pub use currency::{format_currency, CurrencyInput, ZERO_CURRENCY};
pub use error::LoadError;
pub use model::record::{Dataset, SalesRecord};
pub use model::summary::{MonthWeeks, MonthlyTotal, YearlyGrowth, YearlyTotal};
pub use repository::{open_source, FileSalesSource, HttpSalesSource, SalesSource};
pub use service::aggregator::{
    monthly_totals, weekly_for_year, yearly_growth, yearly_totals,
};
pub use service::loader::{load_dataset, try_load_dataset};
pub use state::{Action, DashboardState, View};
pub use usecase::dashboard::DashboardSnapshot;
