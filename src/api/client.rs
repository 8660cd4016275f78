use crate::api::models::{
    Agent, City, Listing, ListingDetails, NewAgent, NewListing, Region, UploadedFile,
};
use crate::api::ApiError;
use crate::config::AppConfig;
use reqwest::blocking::{multipart, Client, Response};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Everything the routes need from the remote listings API. The production
/// implementation is [`EstateClient`]; router tests substitute a stub.
pub trait ListingApi {
    fn regions(&self) -> Result<Vec<Region>, ApiError>;
    fn cities(&self, region_id: Option<i64>) -> Result<Vec<City>, ApiError>;
    fn agents(&self) -> Result<Vec<Agent>, ApiError>;
    fn listings(&self) -> Result<Vec<Listing>, ApiError>;
    fn listing(&self, id: i64) -> Result<ListingDetails, ApiError>;
    fn delete_listing(&self, id: i64) -> Result<(), ApiError>;
    fn create_listing(&self, form: &NewListing) -> Result<(), ApiError>;
    fn create_agent(&self, form: &NewAgent) -> Result<Agent, ApiError>;
}

pub struct EstateClient {
    client: Client,
    base: String,
}

impl EstateClient {
    /// Builds the blocking client once, with the bearer token installed as a
    /// default header. Calls are synchronous and are never retried; a failed
    /// call surfaces as an [`ApiError`] for the route handler to render.
    pub fn new(cfg: &AppConfig) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        let bearer = HeaderValue::from_str(&format!("Bearer {}", cfg.api_token))
            .map_err(|e| ApiError::Request(format!("invalid bearer token: {e}")))?;
        headers.insert(AUTHORIZATION, bearer);

        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base: cfg.api_base.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{path}", self.base)
    }

    fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let resp = check_status(resp)?;
        resp.json::<T>().map_err(|e| ApiError::Decode(e.to_string()))
    }
}

impl ListingApi for EstateClient {
    fn regions(&self) -> Result<Vec<Region>, ApiError> {
        self.get_json(&self.url("regions"))
    }

    fn cities(&self, region_id: Option<i64>) -> Result<Vec<City>, ApiError> {
        let url = match region_id {
            Some(id) => format!("{}?region_id={id}", self.url("cities")),
            None => self.url("cities"),
        };
        self.get_json(&url)
    }

    fn agents(&self) -> Result<Vec<Agent>, ApiError> {
        self.get_json(&self.url("agents"))
    }

    fn listings(&self) -> Result<Vec<Listing>, ApiError> {
        self.get_json(&self.url("real-estates"))
    }

    fn listing(&self, id: i64) -> Result<ListingDetails, ApiError> {
        self.get_json(&format!("{}/{id}", self.url("real-estates")))
    }

    fn delete_listing(&self, id: i64) -> Result<(), ApiError> {
        let resp = self
            .client
            .delete(format!("{}/{id}", self.url("real-estates")))
            .send()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        check_status(resp)?;
        Ok(())
    }

    fn create_listing(&self, form: &NewListing) -> Result<(), ApiError> {
        let body = multipart::Form::new()
            .text("address", form.address.clone())
            .text("zip_code", form.zip_code.clone())
            .text("region_id", form.region_id.to_string())
            .text("city_id", form.city_id.to_string())
            .text("price", form.price.to_string())
            .text("area", form.area.to_string())
            .text("bedrooms", form.bedrooms.to_string())
            .text("description", form.description.clone())
            .text("is_rental", if form.is_rental { "1" } else { "0" })
            .text("agent_id", form.agent_id.to_string())
            .part("image", file_part(&form.image)?);

        let resp = self
            .client
            .post(self.url("real-estates"))
            .multipart(body)
            .send()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        check_status(resp)?;
        Ok(())
    }

    fn create_agent(&self, form: &NewAgent) -> Result<Agent, ApiError> {
        let body = multipart::Form::new()
            .text("name", form.name.clone())
            .text("surname", form.surname.clone())
            .text("email", form.email.clone())
            .text("phone", form.phone.clone())
            .part("avatar", file_part(&form.avatar)?);

        let resp = self
            .client
            .post(self.url("agents"))
            .multipart(body)
            .send()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let resp = check_status(resp)?;
        resp.json::<Agent>()
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

fn file_part(file: &UploadedFile) -> Result<multipart::Part, ApiError> {
    multipart::Part::bytes(file.bytes.clone())
        .file_name(file.filename.clone())
        .mime_str(&file.content_type)
        .map_err(|e| ApiError::Request(format!("bad upload content type: {e}")))
}

fn check_status(resp: Response) -> Result<Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let text = resp.text().unwrap_or_default();

    // Validation rejections arrive as {"message": "..."} JSON bodies.
    let message = serde_json::from_str::<serde_json::Value>(&text)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from))
        .unwrap_or(text);

    Err(ApiError::Http {
        status: status.as_u16(),
        message,
    })
}
