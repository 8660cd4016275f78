use crate::api::models::Listing;
use std::collections::BTreeSet;
use url::form_urlencoded;

/// One filter facet, for "remove this filter" chips. Each selected region
/// counts as its own removable entry.
#[derive(Debug, Clone, PartialEq)]
pub enum Criterion {
    Region(String),
    PriceMin,
    PriceMax,
    AreaMin,
    AreaMax,
    Bedrooms,
}

/// The current filter selection. Lives in the page URL's query string and is
/// re-parsed on every request; an empty state means "show everything".
///
/// Matching is a union: a listing is shown when ANY active criterion matches
/// it, not when all do. That is the behavior this product shipped with and
/// it is pinned by tests; see DESIGN.md before changing it to an AND.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    pub regions: BTreeSet<String>,
    pub price_min: Option<i64>,
    pub price_max: Option<i64>,
    pub area_min: Option<f64>,
    pub area_max: Option<f64>,
    pub bedrooms: Option<i64>,
}

impl FilterState {
    /// Parses the listings-page query string. Blank or unparsable values
    /// leave their criterion inactive, same as an untouched input.
    pub fn from_query(query: &str) -> Self {
        let mut state = FilterState::default();

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            let value = value.trim();
            if value.is_empty() {
                continue;
            }
            match key.as_ref() {
                "region" => {
                    state.regions.insert(value.to_string());
                }
                "price_min" => state.price_min = value.parse().ok(),
                "price_max" => state.price_max = value.parse().ok(),
                "area_min" => state.area_min = value.parse().ok(),
                "area_max" => state.area_max = value.parse().ok(),
                "bedrooms" => state.bedrooms = value.parse().ok(),
                _ => {}
            }
        }

        state
    }

    /// Serializes back into a query string, the inverse of `from_query`.
    pub fn to_query(&self) -> String {
        let mut ser = form_urlencoded::Serializer::new(String::new());

        for region in &self.regions {
            ser.append_pair("region", region);
        }
        if let Some(v) = self.price_min {
            ser.append_pair("price_min", &v.to_string());
        }
        if let Some(v) = self.price_max {
            ser.append_pair("price_max", &v.to_string());
        }
        if let Some(v) = self.area_min {
            ser.append_pair("area_min", &v.to_string());
        }
        if let Some(v) = self.area_max {
            ser.append_pair("area_max", &v.to_string());
        }
        if let Some(v) = self.bedrooms {
            ser.append_pair("bedrooms", &v.to_string());
        }

        ser.finish()
    }

    pub fn is_active(&self) -> bool {
        !self.regions.is_empty()
            || self.price_min.is_some()
            || self.price_max.is_some()
            || self.area_min.is_some()
            || self.area_max.is_some()
            || self.bedrooms.is_some()
    }

    /// Active facets in display order, one entry per region.
    pub fn active(&self) -> Vec<Criterion> {
        let mut out: Vec<Criterion> = self
            .regions
            .iter()
            .map(|r| Criterion::Region(r.clone()))
            .collect();

        if self.price_min.is_some() {
            out.push(Criterion::PriceMin);
        }
        if self.price_max.is_some() {
            out.push(Criterion::PriceMax);
        }
        if self.area_min.is_some() {
            out.push(Criterion::AreaMin);
        }
        if self.area_max.is_some() {
            out.push(Criterion::AreaMax);
        }
        if self.bedrooms.is_some() {
            out.push(Criterion::Bedrooms);
        }

        out
    }

    /// Deactivates exactly one criterion.
    pub fn remove(&mut self, criterion: &Criterion) {
        match criterion {
            Criterion::Region(name) => {
                self.regions.remove(name);
            }
            Criterion::PriceMin => self.price_min = None,
            Criterion::PriceMax => self.price_max = None,
            Criterion::AreaMin => self.area_min = None,
            Criterion::AreaMax => self.area_max = None,
            Criterion::Bedrooms => self.bedrooms = None,
        }
    }

    /// Copy with one criterion removed, for building chip links.
    pub fn removed(&self, criterion: &Criterion) -> Self {
        let mut copy = self.clone();
        copy.remove(criterion);
        copy
    }

    /// Resets every criterion; the next `apply` returns the full collection.
    pub fn clear(&mut self) {
        *self = FilterState::default();
    }

    /// Recomputes the visible subset. With nothing active this is the
    /// identity; otherwise a listing is kept when any active criterion
    /// matches it (union across criteria).
    pub fn apply(&self, listings: &[Listing]) -> Vec<Listing> {
        if !self.is_active() {
            return listings.to_vec();
        }

        listings
            .iter()
            .filter(|l| self.matches_any(l))
            .cloned()
            .collect()
    }

    fn matches_any(&self, listing: &Listing) -> bool {
        if !self.regions.is_empty() {
            if let Some(name) = listing.region_name() {
                if self.regions.contains(name) {
                    return true;
                }
            }
        }
        if let Some(min) = self.price_min {
            if listing.price >= min {
                return true;
            }
        }
        if let Some(max) = self.price_max {
            if listing.price <= max {
                return true;
            }
        }
        if let Some(min) = self.area_min {
            if listing.area >= min {
                return true;
            }
        }
        if let Some(max) = self.area_max {
            if listing.area <= max {
                return true;
            }
        }
        if let Some(n) = self.bedrooms {
            if listing.bedrooms == n {
                return true;
            }
        }

        false
    }
}
