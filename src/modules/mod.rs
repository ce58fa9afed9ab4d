pub mod analytics;
pub mod cms;
pub mod journeys;
pub mod layout;
pub mod payments;
pub mod scopes;
