use crate::domain::validation::ListingForm;
use crate::errors::ServerError;
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};

/// Persisted snapshot of the listing form's text fields. A single row:
/// starting a new draft overwrites the old one, submitting clears it.
/// The uploaded image is never drafted.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingDraft {
    pub address: String,
    pub zip_code: String,
    pub region_id: String,
    pub city_id: String,
    pub price: String,
    pub area: String,
    pub bedrooms: String,
    pub description: String,
    pub is_rental: bool,
    pub agent_id: String,
    pub saved_at: DateTime<Utc>,
}

impl ListingDraft {
    pub fn from_form(form: &ListingForm, saved_at: DateTime<Utc>) -> Self {
        ListingDraft {
            address: form.address.clone(),
            zip_code: form.zip_code.clone(),
            region_id: form.region_id.clone(),
            city_id: form.city_id.clone(),
            price: form.price.clone(),
            area: form.area.clone(),
            bedrooms: form.bedrooms.clone(),
            description: form.description.clone(),
            is_rental: form.is_rental,
            agent_id: form.agent_id.clone(),
            saved_at,
        }
    }

    pub fn into_form(self) -> ListingForm {
        ListingForm {
            address: self.address,
            zip_code: self.zip_code,
            region_id: self.region_id,
            city_id: self.city_id,
            price: self.price,
            area: self.area,
            bedrooms: self.bedrooms,
            description: self.description,
            is_rental: self.is_rental,
            agent_id: self.agent_id,
            image: None,
        }
    }

    /// A draft with nothing in it is not worth persisting.
    pub fn is_empty(&self) -> bool {
        self.address.trim().is_empty()
            && self.zip_code.trim().is_empty()
            && self.region_id.trim().is_empty()
            && self.city_id.trim().is_empty()
            && self.price.trim().is_empty()
            && self.area.trim().is_empty()
            && self.bedrooms.trim().is_empty()
            && self.description.trim().is_empty()
            && self.agent_id.trim().is_empty()
    }
}

pub fn load_draft(conn: &Connection) -> Result<Option<ListingDraft>, ServerError> {
    conn.query_row(
        "SELECT address, zip_code, region_id, city_id, price, area, bedrooms,
                description, is_rental, agent_id, saved_at
         FROM listing_drafts WHERE id = 1",
        [],
        |row| {
            Ok(ListingDraft {
                address: row.get(0)?,
                zip_code: row.get(1)?,
                region_id: row.get(2)?,
                city_id: row.get(3)?,
                price: row.get(4)?,
                area: row.get(5)?,
                bedrooms: row.get(6)?,
                description: row.get(7)?,
                is_rental: row.get(8)?,
                agent_id: row.get(9)?,
                saved_at: row.get(10)?,
            })
        },
    )
    .optional()
    .map_err(|e| ServerError::DbError(format!("load draft failed: {e}")))
}

pub fn save_draft(conn: &Connection, draft: &ListingDraft) -> Result<(), ServerError> {
    conn.execute(
        "INSERT OR REPLACE INTO listing_drafts
            (id, address, zip_code, region_id, city_id, price, area, bedrooms,
             description, is_rental, agent_id, saved_at)
         VALUES (1, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        params![
            draft.address,
            draft.zip_code,
            draft.region_id,
            draft.city_id,
            draft.price,
            draft.area,
            draft.bedrooms,
            draft.description,
            draft.is_rental,
            draft.agent_id,
            draft.saved_at,
        ],
    )
    .map_err(|e| ServerError::DbError(format!("save draft failed: {e}")))?;
    Ok(())
}

pub fn clear_draft(conn: &Connection) -> Result<(), ServerError> {
    conn.execute("DELETE FROM listing_drafts WHERE id = 1", [])
        .map_err(|e| ServerError::DbError(format!("clear draft failed: {e}")))?;
    Ok(())
}
