//! HTTP client for the ideas REST collection.

use std::time::Duration;

use reqwest::{Response, StatusCode, Url};
use serde::Deserialize;

use super::NoteRemote;
use crate::models::{CompletionPatch, NewNote, Note, NoteEdit, NoteId};
use crate::util::{compact_text, is_http_url, normalize_text_option};
use crate::{Error, Result};

const COLLECTION: &str = "ideas";

/// [`NoteRemote`] backed by the REST collection at `base_url`.
#[derive(Clone, Debug)]
pub struct HttpNoteRemote {
    base_url: Url,
    client: reqwest::Client,
}

impl HttpNoteRemote {
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let base_url = normalize_base_url(base_url.into())?;
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.connect_timeout(timeout);
        }
        Ok(Self {
            base_url,
            client: builder.build()?,
        })
    }

    fn collection_url(&self) -> Result<Url> {
        self.url_for(&[COLLECTION])
    }

    fn note_url(&self, id: &NoteId) -> Result<Url> {
        self.url_for(&[COLLECTION, id.as_str()])
    }

    fn url_for(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| Error::Config(format!("{} cannot be a base URL", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

impl NoteRemote for HttpNoteRemote {
    async fn list(&self) -> Result<Vec<Note>> {
        let url = self.collection_url()?;
        tracing::debug!(%url, "Fetching notes");
        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;
        let response = ensure_success(response).await?;
        let body = response.text().await?;
        decode_notes(&body)
    }

    async fn create(&self, note: &NewNote) -> Result<()> {
        let url = self.collection_url()?;
        tracing::debug!(%url, "Creating note");
        let response = self.client.post(url).json(note).send().await?;
        ensure_success(response).await?;
        Ok(())
    }

    async fn update(&self, id: &NoteId, edit: &NoteEdit) -> Result<()> {
        let url = self.note_url(id)?;
        tracing::debug!(%url, "Updating note");
        let response = self.client.put(url).json(edit).send().await?;
        ensure_success(response).await?;
        Ok(())
    }

    async fn set_completed(&self, id: &NoteId, completed: bool) -> Result<()> {
        let url = self.note_url(id)?;
        tracing::debug!(%url, completed, "Patching note completion");
        let response = self
            .client
            .patch(url)
            .json(&CompletionPatch { completed })
            .send()
            .await?;
        ensure_success(response).await?;
        Ok(())
    }

    async fn remove(&self, id: &NoteId) -> Result<()> {
        let url = self.note_url(id)?;
        tracing::debug!(%url, "Deleting note");
        let response = self.client.delete(url).send().await?;
        ensure_success(response).await?;
        Ok(())
    }
}

async fn ensure_success(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(Error::Fetch(parse_api_error(status, &body)))
}

fn decode_notes(body: &str) -> Result<Vec<Note>> {
    Ok(serde_json::from_str(body)?)
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: Option<String>,
    message: Option<String>,
}

fn parse_api_error(status: StatusCode, body: &str) -> String {
    if let Ok(payload) = serde_json::from_str::<ApiErrorBody>(body) {
        if let Some(message) = payload.error.or(payload.message) {
            return format!("{} ({})", message.trim(), status.as_u16());
        }
    }

    let trimmed = compact_text(body);
    if trimmed.is_empty() {
        format!("HTTP {}", status.as_u16())
    } else {
        format!("{} ({})", trimmed, status.as_u16())
    }
}

fn normalize_base_url(raw: String) -> Result<Url> {
    let base_url = normalize_text_option(Some(raw))
        .ok_or_else(|| Error::Config("API base URL must not be empty".to_string()))?;
    if !is_http_url(&base_url) {
        return Err(Error::Config(
            "API base URL must include http:// or https://".to_string(),
        ));
    }
    Url::parse(base_url.trim_end_matches('/'))
        .map_err(|error| Error::Config(format!("invalid API base URL: {error}")))
}
