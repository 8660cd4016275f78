use crate::api::models::Listing;
use maud::{html, Markup};

pub fn rental_label(is_rental: bool) -> &'static str {
    if is_rental {
        "ქირავდება"
    } else {
        "იყიდება"
    }
}

/// Price with thousands separators, e.g. 150000 -> "150 000".
pub fn fmt_price(price: i64) -> String {
    let digits = price.abs().to_string();
    let mut out = String::new();

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(c);
    }

    if price < 0 {
        format!("-{out}")
    } else {
        out
    }
}

pub fn listing_card(listing: &Listing) -> Markup {
    let city_name = listing
        .city
        .as_ref()
        .map(|c| c.name.as_str())
        .unwrap_or("უცნობი ქალაქი");

    html! {
        a class="card" href=(format!("/listing/{}", listing.id)) {
            img src=(listing.image) alt=(listing.address);
            div class="card-body" {
                p class="price" { (fmt_price(listing.price)) " ₾ " span class="tag" { (rental_label(listing.is_rental)) } }
                p { (listing.address) ", " (city_name) }
                p class="meta" {
                    "საძინებელი " (listing.bedrooms)
                    " · " (listing.area) " მ²"
                    " · " (listing.zip_code)
                }
            }
        }
    }
}
