use crate::api::models::UploadedFile;
use crate::errors::ServerError;
use astra::Request;
use multipart::server::Multipart;
use std::collections::HashMap;
use std::io::Read;

/// A decoded `multipart/form-data` submission: text fields plus uploads.
/// File parts the browser sends for an empty file input (no filename, zero
/// bytes) are dropped so an untouched input reads as absent.
#[derive(Debug, Default)]
pub struct ParsedForm {
    fields: HashMap<String, String>,
    files: HashMap<String, UploadedFile>,
}

impl ParsedForm {
    pub fn text(&self, name: &str) -> String {
        self.fields.get(name).cloned().unwrap_or_default()
    }

    pub fn file(&self, name: &str) -> Option<UploadedFile> {
        self.files.get(name).cloned()
    }
}

/// Reads the request body as multipart form data. The boundary comes from
/// the Content-Type header; anything else is a 400.
pub fn parse_multipart(req: &mut Request) -> Result<ParsedForm, ServerError> {
    let content_type = req
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| ServerError::BadRequest("missing content type".into()))?;

    let mime: mime::Mime = content_type
        .parse()
        .map_err(|_| ServerError::BadRequest("unreadable content type".into()))?;

    if mime.type_() != mime::MULTIPART || mime.subtype() != mime::FORM_DATA {
        return Err(ServerError::BadRequest(
            "expected a multipart/form-data body".into(),
        ));
    }

    let boundary = mime
        .get_param(mime::BOUNDARY)
        .ok_or_else(|| ServerError::BadRequest("multipart body without boundary".into()))?
        .as_str()
        .to_string();

    parse_body(req.body_mut().reader(), &boundary)
}

pub fn parse_body<R: Read>(reader: R, boundary: &str) -> Result<ParsedForm, ServerError> {
    let mut multipart = Multipart::with_body(reader, boundary);
    let mut form = ParsedForm::default();

    loop {
        let entry = multipart
            .read_entry()
            .map_err(|e| ServerError::BadRequest(format!("malformed multipart body: {e}")))?;

        let Some(mut entry) = entry else {
            break;
        };

        let name = entry.headers.name.to_string();

        if let Some(filename) = entry.headers.filename.clone() {
            let mut bytes = Vec::new();
            entry
                .data
                .read_to_end(&mut bytes)
                .map_err(|e| ServerError::BadRequest(format!("upload read failed: {e}")))?;

            if filename.is_empty() && bytes.is_empty() {
                continue; // untouched file input
            }

            let content_type = entry
                .headers
                .content_type
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| mime::APPLICATION_OCTET_STREAM.to_string());

            form.files.insert(
                name,
                UploadedFile {
                    filename,
                    content_type,
                    bytes,
                },
            );
        } else {
            let mut value = String::new();
            entry
                .data
                .read_to_string(&mut value)
                .map_err(|e| ServerError::BadRequest(format!("field read failed: {e}")))?;
            form.fields.insert(name, value);
        }
    }

    Ok(form)
}
