use serde::{Deserialize, Serialize};

/// A single advertisement as stored in the ads document and returned by the API.
///
/// Field names are serialized in camelCase (`landingUrl`, `videoUrls`, ...) because
/// the JSON document and the browser client both use that shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ad {
    /// Opaque identifier assigned at creation. Never changes afterwards.
    pub id: String,
    pub title: String,
    pub publisher: String,
    /// Body copy shown on the card.
    pub content: String,
    /// Page opened once the ad has been clicked (and its video watched).
    pub landing_url: String,
    /// Bid price. Always finite and non-negative.
    pub price: f64,
    /// Accumulated clicks. Only the click endpoint increments it.
    #[serde(default)]
    pub clicks: u64,
    /// Public URLs of the uploaded video assets, in upload order.
    #[serde(default)]
    pub video_urls: Vec<String>,
    /// RFC 3339 creation timestamp. Older records may not carry one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Ad {
    /// Returns the form value of one of the editable fields, keyed by the
    /// field names used in the form configuration.
    pub fn field_value(&self, field: &str) -> Option<String> {
        match field {
            "title" => Some(self.title.clone()),
            "publisher" => Some(self.publisher.clone()),
            "content" => Some(self.content.clone()),
            "landingUrl" => Some(self.landing_url.clone()),
            "price" => Some(self.price.to_string()),
            _ => None,
        }
    }

    pub fn has_videos(&self) -> bool {
        !self.video_urls.is_empty()
    }
}
