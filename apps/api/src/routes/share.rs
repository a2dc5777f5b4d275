//! Share links for a resume's public view page.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::state::AppState;
use crate::storage;

const SHARE_TEXT: &str = "Check out my professional resume!";

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShareLinks {
    pub view_url: String,
    pub whatsapp: String,
    pub linkedin: String,
    pub twitter: String,
    pub facebook: String,
    pub telegram: String,
    pub reddit: String,
}

/// Builds the public view URL and per-platform share URLs for a resume.
pub fn share_links(public_app_url: &str, resume_id: Uuid, title: &str) -> ShareLinks {
    let base = public_app_url.trim_end_matches('/');
    let view_url = format!("{base}/dashboard/view-resume/{resume_id}");

    ShareLinks {
        whatsapp: format!(
            "https://wa.me/?{}",
            encode_query(&[("text", &format!("{SHARE_TEXT} {view_url}"))])
        ),
        linkedin: format!(
            "https://www.linkedin.com/sharing/share-offsite/?{}",
            encode_query(&[("url", &view_url)])
        ),
        twitter: format!(
            "https://twitter.com/intent/tweet?{}",
            encode_query(&[("text", SHARE_TEXT), ("url", &view_url)])
        ),
        facebook: format!(
            "https://www.facebook.com/sharer/sharer.php?{}",
            encode_query(&[("u", &view_url)])
        ),
        telegram: format!(
            "https://t.me/share/url?{}",
            encode_query(&[("url", &view_url), ("text", SHARE_TEXT)])
        ),
        reddit: format!(
            "https://www.reddit.com/submit?{}",
            encode_query(&[("url", &view_url), ("title", title)])
        ),
        view_url,
    }
}

fn encode_query(pairs: &[(&str, &str)]) -> String {
    serde_urlencoded::to_string(pairs).unwrap_or_default()
}

/// GET /api/v1/resumes/:id/share
pub async fn handle_share(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ShareLinks>, AppError> {
    let row = storage::fetch_resume(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Resume {id} not found")))?;
    let doc = row.document();
    Ok(Json(share_links(&state.config.public_app_url, id, &doc.title)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_url_shape() {
        let id = Uuid::nil();
        let links = share_links("https://folio.example.com/", id, "My Resume");
        assert_eq!(
            links.view_url,
            format!("https://folio.example.com/dashboard/view-resume/{id}")
        );
    }

    #[test]
    fn test_share_urls_are_percent_encoded() {
        let id = Uuid::nil();
        let links = share_links("https://folio.example.com", id, "My Resume & More");

        assert!(links.whatsapp.starts_with("https://wa.me/?text="));
        assert!(links.whatsapp.contains("Check+out+my+professional+resume%21"));
        assert!(links.linkedin.contains("url=https%3A%2F%2Ffolio.example.com"));
        // The title reaches reddit encoded, ampersand included.
        assert!(links.reddit.contains("title=My+Resume+%26+More"));
    }

    #[test]
    fn test_trailing_slash_does_not_double() {
        let id = Uuid::nil();
        let with = share_links("https://folio.example.com/", id, "t");
        let without = share_links("https://folio.example.com", id, "t");
        assert_eq!(with, without);
    }
}
