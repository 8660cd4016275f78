use crate::api::models::{
    Agent, City, Listing, ListingDetails, NewAgent, NewListing, Region,
};
use crate::api::{ApiError, ListingApi};
use crate::db::connection::{init_db, Database};
use crate::router::AppCtx;
use astra::{Body, Request, Response};
use http::Method;
use std::io::Read;
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

pub const BOUNDARY: &str = "----estate-router-test";

/// Initialize a fresh draft DB using the production schema.
pub fn make_db() -> Database {
    let path = std::env::temp_dir().join(format!(
        "router_test_{}.sqlite",
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    let db = Database::new(path);
    init_db(&db, "sql/schema.sql").expect("Failed to initialize DB");
    db
}

pub fn make_ctx(api: StubApi, persist_drafts: bool) -> AppCtx {
    AppCtx {
        api: Box::new(api),
        db: make_db(),
        persist_drafts,
    }
}

/// In-memory stand-in for the remote listings API. Read methods serve the
/// seeded data; write methods record what they were asked to do.
pub struct StubApi {
    pub listings: Vec<Listing>,
    pub regions: Vec<Region>,
    pub cities: Vec<City>,
    pub agents: Vec<Agent>,
    pub deleted: Arc<Mutex<Vec<i64>>>,
    pub created_listings: Arc<Mutex<Vec<String>>>,
    pub created_agents: Arc<Mutex<Vec<String>>>,
    /// When set, create calls answer 422 like the real API does on rejection.
    pub reject_creates: bool,
}

pub fn sample_listing(id: i64, price: i64, area: f64, bedrooms: i64, region: &Region) -> Listing {
    Listing {
        id,
        address: format!("misamarti-{id}"),
        zip_code: "0100".to_string(),
        price,
        area,
        bedrooms,
        is_rental: false,
        image: format!("https://example.test/img/{id}.jpg"),
        description: None,
        created_at: None,
        city_id: Some(region.id * 10),
        city: Some(City {
            id: region.id * 10,
            name: format!("city-{}", region.id),
            region_id: region.id,
            region: Some(region.clone()),
        }),
        agent_id: None,
        agent: None,
    }
}

impl StubApi {
    pub fn seeded() -> Self {
        let tbilisi = Region {
            id: 1,
            name: "Tbilisi".to_string(),
        };
        let kakheti = Region {
            id: 2,
            name: "Kakheti".to_string(),
        };

        let listings = vec![
            sample_listing(1, 50_000, 40.0, 1, &tbilisi),
            sample_listing(2, 120_000, 65.0, 2, &tbilisi),
            sample_listing(3, 250_000, 90.0, 3, &kakheti),
        ];

        let cities = listings
            .iter()
            .filter_map(|l| l.city.clone())
            .collect::<Vec<_>>();

        StubApi {
            listings,
            regions: vec![tbilisi, kakheti],
            cities,
            agents: vec![Agent {
                id: 7,
                name: "გიორგი".to_string(),
                surname: "მაისურაძე".to_string(),
                email: Some("giorgi@redberry.ge".to_string()),
                phone: Some("599000000".to_string()),
                avatar: None,
            }],
            deleted: Arc::new(Mutex::new(Vec::new())),
            created_listings: Arc::new(Mutex::new(Vec::new())),
            created_agents: Arc::new(Mutex::new(Vec::new())),
            reject_creates: false,
        }
    }
}

fn rejection() -> ApiError {
    ApiError::Http {
        status: 422,
        message: "The given data was invalid.".to_string(),
    }
}

impl ListingApi for StubApi {
    fn regions(&self) -> Result<Vec<Region>, ApiError> {
        Ok(self.regions.clone())
    }

    fn cities(&self, region_id: Option<i64>) -> Result<Vec<City>, ApiError> {
        Ok(self
            .cities
            .iter()
            .filter(|c| region_id.map_or(true, |id| c.region_id == id))
            .cloned()
            .collect())
    }

    fn agents(&self) -> Result<Vec<Agent>, ApiError> {
        Ok(self.agents.clone())
    }

    fn listings(&self) -> Result<Vec<Listing>, ApiError> {
        Ok(self.listings.clone())
    }

    fn listing(&self, id: i64) -> Result<ListingDetails, ApiError> {
        let listing = self
            .listings
            .iter()
            .find(|l| l.id == id)
            .cloned()
            .ok_or(ApiError::Http {
                status: 404,
                message: "Not found".to_string(),
            })?;

        let related = self
            .listings
            .iter()
            .filter(|l| l.id != id && l.region_name() == listing.region_name())
            .cloned()
            .collect();

        Ok(ListingDetails { listing, related })
    }

    fn delete_listing(&self, id: i64) -> Result<(), ApiError> {
        if !self.listings.iter().any(|l| l.id == id) {
            return Err(ApiError::Http {
                status: 404,
                message: "Not found".to_string(),
            });
        }
        self.deleted.lock().unwrap().push(id);
        Ok(())
    }

    fn create_listing(&self, form: &NewListing) -> Result<(), ApiError> {
        if self.reject_creates {
            return Err(rejection());
        }
        self.created_listings.lock().unwrap().push(form.address.clone());
        Ok(())
    }

    fn create_agent(&self, form: &NewAgent) -> Result<Agent, ApiError> {
        if self.reject_creates {
            return Err(rejection());
        }
        self.created_agents.lock().unwrap().push(form.email.clone());
        Ok(Agent {
            id: 99,
            name: form.name.clone(),
            surname: form.surname.clone(),
            email: Some(form.email.clone()),
            phone: Some(form.phone.clone()),
            avatar: Some("https://example.test/avatar/99.jpg".to_string()),
        })
    }
}

// ---------------------------------------------------------------------------
// Request/response helpers
// ---------------------------------------------------------------------------

pub fn get(path: &str) -> Request {
    let mut req = Request::new(Body::empty());
    *req.method_mut() = Method::GET;
    *req.uri_mut() = path.parse().unwrap();
    req
}

/// Builds a multipart POST the way a browser submits a form with a file
/// input. `files` entries are (name, filename, content type, bytes).
pub fn post_multipart(
    path: &str,
    fields: &[(&str, &str)],
    files: &[(&str, &str, &str, &[u8])],
) -> Request {
    let mut body = Vec::new();

    for (name, value) in fields {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
        );
        body.extend_from_slice(value.as_bytes());
        body.extend_from_slice(b"\r\n");
    }

    for (name, filename, content_type, bytes) in files {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\n")
                .as_bytes(),
        );
        body.extend_from_slice(format!("Content-Type: {content_type}\r\n\r\n").as_bytes());
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    let mut req = Request::new(Body::new(body));
    *req.method_mut() = Method::POST;
    *req.uri_mut() = path.parse().unwrap();
    req.headers_mut().insert(
        "Content-Type",
        format!("multipart/form-data; boundary={BOUNDARY}")
            .parse()
            .unwrap(),
    );
    req
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body()
        .reader()
        .read_to_string(&mut body)
        .unwrap();
    body
}
