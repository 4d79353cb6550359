//! Concrete bot definitions.
//!
//! Bots are configuration, not engineering: each supplies a state set,
//! a tag vocabulary, and handler functions, and the engine does the
//! rest.

mod office_hours;
mod teen_support;

pub use office_hours::OfficeHoursBot;
pub use teen_support::TeenSupportBot;
