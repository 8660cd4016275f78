mod listings;
mod new_agent;
mod new_listing;
mod property;

pub use listings::{listings_page, ListingsVm};
pub use new_agent::{agent_form_page, AgentFormVm};
pub use new_listing::{listing_form_page, ListingFormVm};
pub use property::property_page;
