use crate::api::{ApiError, ListingApi};
use crate::db::drafts::{self, ListingDraft};
use crate::db::Database;
use crate::domain::filter::FilterState;
use crate::domain::validation::{AgentForm, ListingForm};
use crate::errors::ServerError;
use crate::forms::{parse_multipart, ParsedForm};
use crate::responses::{html_response, redirect, ResultResp};
use crate::templates::pages::{
    agent_form_page, listing_form_page, listings_page, property_page, AgentFormVm, ListingFormVm,
    ListingsVm,
};
use astra::Request;
use chrono::Utc;

/// Per-process context shared by every request handler.
pub struct AppCtx {
    pub api: Box<dyn ListingApi + Send + Sync>,
    pub db: Database,
    pub persist_drafts: bool,
}

pub fn handle(mut req: Request, ctx: &AppCtx) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();
    let query = req.uri().query().unwrap_or("").to_string();

    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    match (method.as_str(), segments.as_slice()) {
        ("GET", []) => listings_route(ctx, &query),

        ("GET", ["listing", id]) => property_route(ctx, parse_id(id)?),
        ("POST", ["listing", id, "delete"]) => delete_route(ctx, parse_id(id)?),

        ("GET", ["new-listing"]) => new_listing_route(ctx),
        ("POST", ["new-listing"]) => submit_listing_route(ctx, &mut req),

        ("GET", ["new-agent"]) => render_agent_form(&AgentForm::default(), None),
        ("POST", ["new-agent"]) => submit_agent_route(ctx, &mut req),

        _ => Err(ServerError::NotFound),
    }
}

/// A route parameter that is not a listing id is just a missing page.
fn parse_id(raw: &str) -> Result<i64, ServerError> {
    raw.parse().map_err(|_| ServerError::NotFound)
}

/// The remote API's 404 becomes ours; everything else stays an API error.
fn not_found_on_404(err: ApiError) -> ServerError {
    match err {
        ApiError::Http { status: 404, .. } => ServerError::NotFound,
        other => ServerError::Api(other),
    }
}

/// Message shown above a form when the API rejected a submission.
fn submit_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Http { message, .. } if !message.is_empty() => message.clone(),
        _ => "განცხადების გაგზავნა ვერ მოხერხდა, სცადეთ თავიდან".to_string(),
    }
}

// ---------------------------------------------------------------------------
// Listings
// ---------------------------------------------------------------------------

fn listings_route(ctx: &AppCtx, query: &str) -> ResultResp {
    let filter = FilterState::from_query(query);

    let all = ctx.api.listings()?;
    let regions = ctx.api.regions()?;
    let listings = filter.apply(&all);

    html_response(listings_page(&ListingsVm {
        regions,
        filter,
        listings,
    }))
}

fn property_route(ctx: &AppCtx, id: i64) -> ResultResp {
    let details = ctx.api.listing(id).map_err(not_found_on_404)?;
    html_response(property_page(&details))
}

fn delete_route(ctx: &AppCtx, id: i64) -> ResultResp {
    ctx.api.delete_listing(id).map_err(not_found_on_404)?;
    redirect("/")
}

// ---------------------------------------------------------------------------
// New listing form
// ---------------------------------------------------------------------------

fn new_listing_route(ctx: &AppCtx) -> ResultResp {
    let form = if ctx.persist_drafts {
        ctx.db
            .with_conn(|conn| drafts::load_draft(conn))?
            .map(ListingDraft::into_form)
            .unwrap_or_default()
    } else {
        ListingForm::default()
    };

    render_listing_form(ctx, &form, None)
}

fn submit_listing_route(ctx: &AppCtx, req: &mut Request) -> ResultResp {
    let parsed = parse_multipart(req)?;
    let form = listing_form_from(&parsed);

    let Some(payload) = form.payload() else {
        // Gate closed: show statuses, keep what the user typed.
        save_listing_draft(ctx, &form)?;
        return render_listing_form(ctx, &form, None);
    };

    match ctx.api.create_listing(&payload) {
        Ok(()) => {
            if ctx.persist_drafts {
                ctx.db.with_conn(|conn| drafts::clear_draft(conn))?;
            }
            redirect("/")
        }
        Err(err) => {
            eprintln!("⚠️ listing submission rejected: {err}");
            save_listing_draft(ctx, &form)?;
            render_listing_form(ctx, &form, Some(submit_error_message(&err)))
        }
    }
}

fn render_listing_form(ctx: &AppCtx, form: &ListingForm, error: Option<String>) -> ResultResp {
    let regions = ctx.api.regions()?;
    let cities = ctx.api.cities(None)?;
    let agents = ctx.api.agents()?;

    html_response(listing_form_page(&ListingFormVm {
        form,
        statuses: form.statuses(),
        regions: &regions,
        cities: &cities,
        agents: &agents,
        error,
    }))
}

fn listing_form_from(parsed: &ParsedForm) -> ListingForm {
    ListingForm {
        address: parsed.text("address"),
        zip_code: parsed.text("zip_code"),
        region_id: parsed.text("region_id"),
        city_id: parsed.text("city_id"),
        price: parsed.text("price"),
        area: parsed.text("area"),
        bedrooms: parsed.text("bedrooms"),
        description: parsed.text("description"),
        is_rental: parsed.text("is_rental") == "1",
        agent_id: parsed.text("agent_id"),
        image: parsed.file("image"),
    }
}

fn save_listing_draft(ctx: &AppCtx, form: &ListingForm) -> Result<(), ServerError> {
    if !ctx.persist_drafts {
        return Ok(());
    }

    let draft = ListingDraft::from_form(form, Utc::now());
    ctx.db.with_conn(|conn| {
        if draft.is_empty() {
            drafts::clear_draft(conn)
        } else {
            drafts::save_draft(conn, &draft)
        }
    })
}

// ---------------------------------------------------------------------------
// Agent registration form
// ---------------------------------------------------------------------------

fn submit_agent_route(ctx: &AppCtx, req: &mut Request) -> ResultResp {
    let parsed = parse_multipart(req)?;
    let form = agent_form_from(&parsed);

    let Some(payload) = form.payload() else {
        return render_agent_form(&form, None);
    };

    match ctx.api.create_agent(&payload) {
        Ok(agent) => {
            println!("✅ agent {} {} registered", agent.name, agent.surname);
            redirect("/")
        }
        Err(err) => {
            eprintln!("⚠️ agent submission rejected: {err}");
            render_agent_form(&form, Some(submit_error_message(&err)))
        }
    }
}

fn render_agent_form(form: &AgentForm, error: Option<String>) -> ResultResp {
    html_response(agent_form_page(&AgentFormVm {
        form,
        statuses: form.statuses(),
        error,
    }))
}

fn agent_form_from(parsed: &ParsedForm) -> AgentForm {
    AgentForm {
        name: parsed.text("name"),
        surname: parsed.text("surname"),
        email: parsed.text("email"),
        phone: parsed.text("phone"),
        avatar: parsed.file("avatar"),
    }
}
