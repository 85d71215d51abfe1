//! Minimal Notion client for creating a single page.
//!
//! Only the `POST /v1/pages` endpoint is used. The page is created under a
//! parent page and its body is a list of plain paragraph blocks.
//!
//! # Example
//!
//! ```rust,ignore
//! use mergenote_notion::NotionClient;
//!
//! let client = NotionClient::new(token, parent_page_id)?;
//! let page = client.create_page("Merged note", &clean_text).await?;
//! println!("created {}", page.id);
//! ```

pub mod blocks;
pub mod error;

pub use blocks::{page_request, paragraph_blocks, DEFAULT_TITLE, MAX_BLOCKS, MAX_BLOCK_CHARS};
pub use error::{NotionError, Result};

use mergenote_model::{CreatedPage, PageRequest};

const BASE_URL: &str = "https://api.notion.com/v1";
const NOTION_VERSION: &str = "2022-06-28";

pub struct NotionClient {
    client: reqwest::Client,
    token: String,
    parent_page_id: String,
    base_url: String,
}

impl NotionClient {
    /// Create a client for the given integration token and parent page.
    ///
    /// Fails without touching the network if either value is empty.
    pub fn new(token: impl Into<String>, parent_page_id: impl Into<String>) -> Result<Self> {
        let token = token.into().trim().to_string();
        let parent_page_id = parent_page_id.into().trim().to_string();
        if token.is_empty() {
            return Err(NotionError::MissingCredentials("integration token"));
        }
        if parent_page_id.is_empty() {
            return Err(NotionError::MissingCredentials("parent page id"));
        }

        Ok(Self {
            client: reqwest::Client::builder()
                .user_agent(concat!("mergenote/", env!("CARGO_PKG_VERSION")))
                .build()?,
            token,
            parent_page_id,
            base_url: BASE_URL.to_string(),
        })
    }

    /// Point the client at a different API root.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn parent_page_id(&self) -> &str {
        &self.parent_page_id
    }

    /// Create a page with the given title and body text.
    ///
    /// The request is sent once. A non-success status is returned as
    /// [`NotionError::Api`] with the response body.
    pub async fn create_page(&self, title: &str, content: &str) -> Result<CreatedPage> {
        let request = page_request(&self.parent_page_id, title, content);
        tracing::info!(
            parent = %self.parent_page_id,
            blocks = request.children.len(),
            "Creating Notion page"
        );
        self.send(&request).await
    }

    async fn send(&self, request: &PageRequest) -> Result<CreatedPage> {
        let url = format!("{}/pages", self.base_url);
        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .header("Notion-Version", NOTION_VERSION)
            .json(request)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(NotionError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let page: CreatedPage = resp.json().await?;
        tracing::info!(id = %page.id, "Created Notion page");
        Ok(page)
    }
}
