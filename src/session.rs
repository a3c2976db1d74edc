use crate::{Error, Set, SetList};

use reqwest::StatusCode;
use reqwest::header;
use serde::{Deserialize, Serialize};

use std::sync::Arc;

pub const URL_BASE: &str = "https://www.psacard.com";

const SET_LIST_PATH: &str = "/cardfacts/GetSetList";

// The server treats this length as "the whole catalog in one page".
const MAX_RESULTS: &str = "999999";

#[derive(Debug, Clone)]
pub struct Session {
    client: reqwest::Client,
    base_url: String,
}

impl Session {
    pub fn new(client: reqwest::Client) -> Self {
        Self::with_base_url(client, URL_BASE)
    }

    pub fn with_base_url(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Fetches the full card list of the given set.
    ///
    /// Cancellation is the caller's: drop the returned future, or hand in a
    /// client with a timeout. Either surfaces as [`Error::Transport`].
    pub async fn set_list(&self, set: Set) -> Result<SetList, Error> {
        let body = RequestForm::new(set)?.to_body()?;

        let url = format!("{}{SET_LIST_PATH}", self.base_url);
        log::info!("Fetching set list: {url}");

        let response = self
            .client
            .post(&url)
            .header(header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status();

        if status != StatusCode::OK {
            return Err(Error::UnexpectedStatus {
                expected: StatusCode::OK.as_u16(),
                actual: status.as_u16(),
            });
        }

        // Read the body to completion before decoding; the connection is
        // released when `response` is consumed, on every exit path.
        let payload = response.bytes().await?;

        serde_json::from_slice(&payload).map_err(|error| Error::Decode(Arc::new(error)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct RequestForm {
    draw: String,
    start: String,
    length: String,
    #[serde(rename = "SetID")]
    set_id: String,
    category_name: String,
    set_name: String,
}

impl RequestForm {
    fn new(set: Set) -> Result<Self, Error> {
        let id = set.id()?;
        set.name()?;

        // The live endpoint accepts CategoryName and SetName empty.
        Ok(Self {
            draw: "0".into(),
            start: "0".into(),
            length: MAX_RESULTS.into(),
            set_id: id.into(),
            category_name: String::new(),
            set_name: String::new(),
        })
    }

    fn to_body(&self) -> Result<Vec<u8>, Error> {
        serde_json::to_vec(self).map_err(|error| Error::Serialization(Arc::new(error)))
    }
}
