use crate::api::models::{NewAgent, NewListing, UploadedFile};

/// Agent emails must be company addresses.
pub const REQUIRED_EMAIL_SUFFIX: &str = "@redberry.ge";

/// Upload ceiling enforced by the API, mirrored here: 1 MiB.
pub const MAX_UPLOAD_BYTES: usize = 1_048_576;

/// Classification of a single field, derived purely from its current value.
/// Empty input is `Unset` (neutral), never `Invalid`; a field only turns
/// red once the user has typed something that breaks its rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStatus {
    Unset,
    Valid,
    Invalid,
}

impl FieldStatus {
    pub fn is_valid(self) -> bool {
        self == FieldStatus::Valid
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    Name,
    Surname,
    Email,
    Phone,
    Address,
    PostalCode,
    Price,
    Area,
    Bedrooms,
    Description,
    /// A region/city/agent dropdown; valid once an id is selected.
    Selection,
}

/// Mirrors the server's field rules for immediate feedback. The server
/// remains the authority; passing here does not guarantee acceptance.
pub fn validate_text(field: TextField, value: &str) -> FieldStatus {
    let value = value.trim();
    if value.is_empty() {
        return FieldStatus::Unset;
    }

    let ok = match field {
        TextField::Name | TextField::Surname | TextField::Address => value.chars().count() >= 2,
        TextField::Email => value.ends_with(REQUIRED_EMAIL_SUFFIX),
        TextField::Phone => {
            value.len() == 9 && value.starts_with('5') && value.bytes().all(|b| b.is_ascii_digit())
        }
        TextField::PostalCode | TextField::Price | TextField::Area => {
            value.parse::<f64>().is_ok()
        }
        TextField::Bedrooms | TextField::Selection => value.parse::<i64>().is_ok(),
        TextField::Description => value.split_whitespace().count() >= 5,
    };

    if ok {
        FieldStatus::Valid
    } else {
        FieldStatus::Invalid
    }
}

/// An avatar/listing photo must be present, an image, and at most 1 MiB.
pub fn validate_upload(file: Option<&UploadedFile>) -> FieldStatus {
    let Some(file) = file else {
        return FieldStatus::Unset;
    };

    let is_image = file
        .content_type
        .parse::<mime::Mime>()
        .map(|m| m.type_() == mime::IMAGE)
        .unwrap_or(false);

    if is_image && !file.bytes.is_empty() && file.bytes.len() <= MAX_UPLOAD_BYTES {
        FieldStatus::Valid
    } else {
        FieldStatus::Invalid
    }
}

// ---------------------------------------------------------------------------
// Agent registration form
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct AgentForm {
    pub name: String,
    pub surname: String,
    pub email: String,
    pub phone: String,
    pub avatar: Option<UploadedFile>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgentStatuses {
    pub name: FieldStatus,
    pub surname: FieldStatus,
    pub email: FieldStatus,
    pub phone: FieldStatus,
    pub avatar: FieldStatus,
}

impl AgentForm {
    pub fn statuses(&self) -> AgentStatuses {
        AgentStatuses {
            name: validate_text(TextField::Name, &self.name),
            surname: validate_text(TextField::Surname, &self.surname),
            email: validate_text(TextField::Email, &self.email),
            phone: validate_text(TextField::Phone, &self.phone),
            avatar: validate_upload(self.avatar.as_ref()),
        }
    }

    /// Submission gate: every required field must be `Valid`, not merely
    /// non-`Invalid`; an untouched field blocks submission too.
    pub fn is_submittable(&self) -> bool {
        let s = self.statuses();
        s.name.is_valid()
            && s.surname.is_valid()
            && s.email.is_valid()
            && s.phone.is_valid()
            && s.avatar.is_valid()
    }

    /// Assembles the multipart payload, or `None` while the gate is closed.
    pub fn payload(&self) -> Option<NewAgent> {
        if !self.is_submittable() {
            return None;
        }
        Some(NewAgent {
            name: self.name.trim().to_string(),
            surname: self.surname.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            avatar: self.avatar.clone()?,
        })
    }
}

// ---------------------------------------------------------------------------
// New listing form
// ---------------------------------------------------------------------------

/// Raw field values as the browser sent them. Numeric fields stay strings
/// here so an invalid entry can be shown back to the user unchanged.
#[derive(Debug, Clone, Default)]
pub struct ListingForm {
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
    pub image: Option<UploadedFile>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingStatuses {
    pub address: FieldStatus,
    pub zip_code: FieldStatus,
    pub region: FieldStatus,
    pub city: FieldStatus,
    pub price: FieldStatus,
    pub area: FieldStatus,
    pub bedrooms: FieldStatus,
    pub description: FieldStatus,
    pub agent: FieldStatus,
    pub image: FieldStatus,
}

impl ListingForm {
    pub fn statuses(&self) -> ListingStatuses {
        ListingStatuses {
            address: validate_text(TextField::Address, &self.address),
            zip_code: validate_text(TextField::PostalCode, &self.zip_code),
            region: validate_text(TextField::Selection, &self.region_id),
            city: validate_text(TextField::Selection, &self.city_id),
            price: validate_text(TextField::Price, &self.price),
            area: validate_text(TextField::Area, &self.area),
            bedrooms: validate_text(TextField::Bedrooms, &self.bedrooms),
            description: validate_text(TextField::Description, &self.description),
            agent: validate_text(TextField::Selection, &self.agent_id),
            image: validate_upload(self.image.as_ref()),
        }
    }

    pub fn is_submittable(&self) -> bool {
        let s = self.statuses();
        s.address.is_valid()
            && s.zip_code.is_valid()
            && s.region.is_valid()
            && s.city.is_valid()
            && s.price.is_valid()
            && s.area.is_valid()
            && s.bedrooms.is_valid()
            && s.description.is_valid()
            && s.agent.is_valid()
            && s.image.is_valid()
    }

    pub fn payload(&self) -> Option<NewListing> {
        if !self.is_submittable() {
            return None;
        }
        Some(NewListing {
            address: self.address.trim().to_string(),
            zip_code: self.zip_code.trim().to_string(),
            region_id: self.region_id.trim().parse().ok()?,
            city_id: self.city_id.trim().parse().ok()?,
            price: self.price.trim().parse().ok()?,
            area: self.area.trim().parse().ok()?,
            bedrooms: self.bedrooms.trim().parse().ok()?,
            description: self.description.trim().to_string(),
            is_rental: self.is_rental,
            agent_id: self.agent_id.trim().parse().ok()?,
            image: self.image.clone()?,
        })
    }
}
