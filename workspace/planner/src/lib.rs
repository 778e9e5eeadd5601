//! Client-side state for the bill planner.
//!
//! Everything a front end needs lives in one owned [`Planner`]: the appliance
//! list, the prediction controller and the two chart models. Front ends do the
//! I/O themselves and hand the decoded responses back, so the whole flow can be
//! exercised without a browser or a network.

pub mod appliances;
pub mod charts;
pub mod error;
pub mod form;
pub mod number;
pub mod prediction;
mod state;

pub use appliances::{ApplianceLine, ApplianceList, EntryId};
pub use charts::{ComparisonChart, Series, UsageHistoryChart};
pub use error::{PlannerError, Result, TransportError};
pub use form::{ApplianceDraft, BillingForm, BillingInputs};
pub use number::format_number;
pub use prediction::{PendingPrediction, PredictionSummary, PredictionView, RequestToken};
pub use state::Planner;
