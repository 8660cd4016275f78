use crate::api::models::ListingDetails;
use crate::templates::components::{fmt_price, listing_card, rental_label};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn property_page(details: &ListingDetails) -> Markup {
    let listing = &details.listing;
    let city_name = listing
        .city
        .as_ref()
        .map(|c| c.name.as_str())
        .unwrap_or("უცნობი ქალაქი");

    desktop_layout(
        &listing.address,
        html! {
            a href="/" { "← უკან" }

            div class="detail" {
                div {
                    span class="tag" { (rental_label(listing.is_rental)) }
                    img src=(listing.image) alt=(listing.address);
                    @if let Some(created_at) = listing.created_at {
                        p class="muted" {
                            "გამოქვეყნების თარიღი: " (created_at.format("%d/%m/%y"))
                        }
                    }
                }

                div {
                    h2 class="price" { (fmt_price(listing.price)) " ₾" }
                    p { (listing.address) ", " (city_name) }
                    p { "ფართი " (listing.area) " მ²" }
                    p { "საძინებელი " (listing.bedrooms) }
                    p { "საფოსტო ინდექსი " (listing.zip_code) }

                    @if let Some(description) = &listing.description {
                        p { (description) }
                    }

                    @if let Some(agent) = &listing.agent {
                        div class="agent-card" {
                            @if let Some(avatar) = &agent.avatar {
                                img src=(avatar) alt="Agent";
                            }
                            p { strong { (agent.name) " " (agent.surname) } }
                            p class="muted" { "აგენტი" }
                            @if let Some(email) = &agent.email {
                                p class="muted" { (email) }
                            }
                            @if let Some(phone) = &agent.phone {
                                p class="muted" { (phone) }
                            }
                        }
                    }

                    form method="post" action=(format!("/listing/{}/delete", listing.id)) {
                        button type="submit" class="delete-btn" { "ლისტინგის წაშლა" }
                    }
                }
            }

            @if !details.related.is_empty() {
                h3 { "ბინები მსგავს ლოკაციაზე" }
                div class="related" {
                    @for related in &details.related {
                        (listing_card(related))
                    }
                }
            }
        },
    )
}
