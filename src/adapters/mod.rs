// Adapters layer: concrete implementations of the domain ports (queue, cohorts, clock, templates).

pub mod clock;
pub mod cohort;
pub mod queue;
pub mod templates;

pub use clock::{FixedClock, SystemClock};
pub use cohort::ConfiguredCohort;
pub use queue::{ConfiguredQueue, HttpSubscriptionQueue, LoggingQueue};
pub use templates::PlaceholderTemplates;
