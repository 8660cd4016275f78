mod fields;
mod listing_card;

pub use fields::{field_wrap, hint, status_class};
pub use listing_card::{fmt_price, listing_card, rental_label};
