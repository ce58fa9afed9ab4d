//! # Choptop Models
//!
//! Domain models and DTOs for the Choptop admin API.
//!
//! # Modules
//!
//! - [`analytics`]: Typed console events and their counters
//! - [`cms`]: CMS content items, editor DTOs, and list filters
//! - [`journeys`]: Marketing journeys and their flow template
//! - [`payments`]: Payments, payouts, and balance summaries
//!
//! # Example
//!
//! ```ignore
//! use choptop_models::analytics::{AnalyticsEvent, AnalyticsSnapshot};
//! use choptop_models::cms::slugify;
//!
//! let mut counters = AnalyticsSnapshot::default();
//! counters.record(&AnalyticsEvent::CmsPublish);
//!
//! assert_eq!(slugify("Holiday Deals"), "holiday-deals");
//! ```

pub mod analytics;
pub mod cms;
pub mod journeys;
pub mod payments;

pub use analytics::{AnalyticsEvent, AnalyticsSnapshot};
pub use cms::{ContentItem, ContentStatus, slugify};
pub use journeys::Journey;
pub use payments::{Payment, Payout, PayoutGroupBy, PayoutLine};
