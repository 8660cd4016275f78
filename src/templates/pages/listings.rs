use crate::api::models::{Listing, Region};
use crate::domain::filter::{Criterion, FilterState};
use crate::templates::components::listing_card;
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub struct ListingsVm {
    pub regions: Vec<Region>,
    pub filter: FilterState,
    /// Already filtered; the route applies the engine before rendering.
    pub listings: Vec<Listing>,
}

pub fn listings_page(vm: &ListingsVm) -> Markup {
    desktop_layout(
        "განცხადებები",
        html! {
            (filter_bar(vm))

            @if vm.filter.is_active() {
                (filter_chips(&vm.filter))
            }

            @if vm.listings.is_empty() {
                p class="muted" { "აღნიშნული მონაცემებით განცხადება არ მოიძებნა" }
            } @else {
                div class="grid" {
                    @for listing in &vm.listings {
                        (listing_card(listing))
                    }
                }
            }
        },
    )
}

/// The filter form. Region checkboxes toggle in place; nothing changes in
/// the result set until the explicit apply submit (a plain GET of `/`).
fn filter_bar(vm: &ListingsVm) -> Markup {
    let f = &vm.filter;

    html! {
        form class="filter-bar" method="get" action="/" {
            fieldset {
                legend { "რეგიონი" }
                @for region in &vm.regions {
                    label {
                        input type="checkbox" name="region" value=(region.name)
                            checked[f.regions.contains(&region.name)];
                        (region.name)
                    }
                }
            }

            div {
                label { "საფასო კატეგორია" }
                input type="number" name="price_min" placeholder="დან"
                    value=[f.price_min.map(|v| v.to_string())];
                input type="number" name="price_max" placeholder="მდე"
                    value=[f.price_max.map(|v| v.to_string())];
            }

            div {
                label { "ფართობი" }
                input type="number" name="area_min" step="any" placeholder="დან"
                    value=[f.area_min.map(|v| v.to_string())];
                input type="number" name="area_max" step="any" placeholder="მდე"
                    value=[f.area_max.map(|v| v.to_string())];
            }

            div {
                label { "საძინებლების რაოდენობა" }
                input type="number" name="bedrooms" min="0"
                    value=[f.bedrooms.map(|v| v.to_string())];
            }

            button type="submit" class="btn btn-primary" { "ძებნა" }
        }
    }
}

/// One chip per active criterion, each with a remove link, plus clear-all.
fn filter_chips(filter: &FilterState) -> Markup {
    html! {
        div class="chips" {
            @for criterion in filter.active() {
                span class="chip" {
                    (chip_label(filter, &criterion))
                    a href=(remove_url(filter, &criterion)) { "✕" }
                }
            }
            span class="chip" {
                a href="/" { "გასუფთავება" }
            }
        }
    }
}

fn remove_url(filter: &FilterState, criterion: &Criterion) -> String {
    let rest = filter.removed(criterion).to_query();
    if rest.is_empty() {
        "/".to_string()
    } else {
        format!("/?{rest}")
    }
}

fn chip_label(filter: &FilterState, criterion: &Criterion) -> String {
    match criterion {
        Criterion::Region(name) => name.clone(),
        Criterion::PriceMin => format!("{} ₾-დან", filter.price_min.unwrap_or_default()),
        Criterion::PriceMax => format!("{} ₾-მდე", filter.price_max.unwrap_or_default()),
        Criterion::AreaMin => format!("{} მ²-დან", filter.area_min.unwrap_or_default()),
        Criterion::AreaMax => format!("{} მ²-მდე", filter.area_max.unwrap_or_default()),
        Criterion::Bedrooms => format!("საძინებელი {}", filter.bedrooms.unwrap_or_default()),
    }
}
