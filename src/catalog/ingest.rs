//! Catalog response parsing and enrichment.
//!
//! The source answers with
//!
//! ```json
//! {
//!   "success": true,
//!   "data": {
//!     "memes": [
//!       { "id": "181913649", "name": "Drake Hotline Bling",
//!         "url": "https://i.imgflip.com/30b1gx.jpg",
//!         "width": 1200, "height": 1200, "box_count": 2 }
//!     ]
//!   }
//! }
//! ```
//!
//! or `{"success": false, "error_message": "..."}` on failure.

use super::metadata::MetadataSource;
use crate::domain::{CatalogItem, GalleryError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use std::collections::HashSet;

/// One entry of the catalog response, before enrichment.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawMeme {
    #[serde(deserialize_with = "id_as_string")]
    pub id: String,
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub box_count: u32,
}

#[derive(Debug, Deserialize)]
struct CatalogResponse {
    success: bool,
    #[serde(default)]
    data: Option<CatalogData>,
    #[serde(default)]
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CatalogData {
    #[serde(default)]
    memes: Vec<RawMeme>,
}

/// Accepts ids encoded either as strings or as numbers.
fn id_as_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(u64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(text) => text,
        Id::Number(number) => number.to_string(),
    })
}

/// Fails unless `status` is a 2xx HTTP status.
///
/// # Errors
///
/// Returns [`GalleryError::Ingest`] for any other status.
pub fn check_status(status: u16) -> Result<()> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(GalleryError::Ingest(format!("catalog request failed with HTTP status {status}")))
    }
}

/// Parses a catalog response body.
///
/// # Errors
///
/// Returns [`GalleryError::Ingest`] if the body is not the expected JSON shape
/// or the source reports `success: false`.
pub fn parse_catalog_response(body: &[u8]) -> Result<Vec<RawMeme>> {
    let response: CatalogResponse = serde_json::from_slice(body)
        .map_err(|e| GalleryError::Ingest(format!("malformed catalog response: {e}")))?;

    if !response.success {
        let message = response
            .error_message
            .unwrap_or_else(|| "catalog source reported failure".to_string());
        return Err(GalleryError::Ingest(message));
    }

    Ok(response.data.map(|data| data.memes).unwrap_or_default())
}

/// Enriches raw entries into catalog items, in source order.
///
/// Entries repeating an id already seen are dropped so ids stay unique.
pub fn ingest(raw: Vec<RawMeme>, source: &mut dyn MetadataSource, now: DateTime<Utc>) -> Vec<CatalogItem> {
    let _span = tracing::debug_span!("ingest_catalog", raw_count = raw.len()).entered();

    let mut seen = HashSet::with_capacity(raw.len());
    let mut items = Vec::with_capacity(raw.len());

    for meme in raw {
        if !seen.insert(meme.id.clone()) {
            tracing::warn!(id = %meme.id, name = %meme.name, "dropping duplicate catalog id");
            continue;
        }

        items.push(
            CatalogItem::builder(meme.id, meme.name)
                .source_url(meme.url)
                .likes(source.likes())
                .comments(source.comments())
                .created_at(source.created_at(now))
                .category(source.category())
                .dimensions(meme.width, meme.height)
                .box_count(meme.box_count)
                .build(),
        );
    }

    tracing::debug!(item_count = items.len(), "catalog ingested");
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::RandomMetadata;
    use crate::domain::Category;
    use chrono::Duration;

    struct Fixed;

    impl MetadataSource for Fixed {
        fn likes(&mut self) -> u32 {
            7
        }
        fn comments(&mut self) -> u32 {
            3
        }
        fn created_at(&mut self, now: DateTime<Utc>) -> DateTime<Utc> {
            now - Duration::days(1)
        }
        fn category(&mut self) -> Category {
            Category::Classic
        }
    }

    const BODY: &str = r#"{
        "success": true,
        "data": {
            "memes": [
                {"id": "181913649", "name": "Drake Hotline Bling", "url": "https://i.imgflip.com/30b1gx.jpg", "width": 1200, "height": 1200, "box_count": 2, "captions": 1},
                {"id": 87743020, "name": "Two Buttons", "url": "https://i.imgflip.com/1g8my4.jpg"}
            ]
        }
    }"#;

    #[test]
    fn parses_string_and_numeric_ids() {
        let raw = parse_catalog_response(BODY.as_bytes()).unwrap();
        assert_eq!(raw.len(), 2);
        assert_eq!(raw[0].id, "181913649");
        assert_eq!(raw[0].box_count, 2);
        assert_eq!(raw[1].id, "87743020");
        assert_eq!(raw[1].width, 0);
    }

    #[test]
    fn unsuccessful_response_is_an_ingest_error() {
        let err = parse_catalog_response(br#"{"success": false, "error_message": "rate limited"}"#).unwrap_err();
        assert!(matches!(err, GalleryError::Ingest(ref m) if m == "rate limited"));
    }

    #[test]
    fn malformed_body_is_an_ingest_error() {
        let err = parse_catalog_response(b"<html>").unwrap_err();
        assert!(matches!(err, GalleryError::Ingest(ref m) if m.starts_with("malformed")));
    }

    #[test]
    fn missing_data_is_an_empty_catalog() {
        assert!(parse_catalog_response(br#"{"success": true}"#).unwrap().is_empty());
    }

    #[test]
    fn status_check() {
        assert!(check_status(200).is_ok());
        assert!(check_status(204).is_ok());
        assert!(matches!(check_status(503), Err(GalleryError::Ingest(_))));
    }

    #[test]
    fn ingest_enriches_in_source_order() {
        let now = Utc::now();
        let raw = parse_catalog_response(BODY.as_bytes()).unwrap();
        let items = ingest(raw, &mut Fixed, now);

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "Drake Hotline Bling");
        assert_eq!(items[0].source_url, "https://i.imgflip.com/30b1gx.jpg");
        assert_eq!(items[0].likes, 7);
        assert_eq!(items[0].comments, 3);
        assert_eq!(items[0].category, Category::Classic);
        assert_eq!(items[0].created_at, now - Duration::days(1));
        assert_eq!((items[0].width, items[0].height), (1200, 1200));
        assert_eq!(items[1].name, "Two Buttons");
    }

    #[test]
    fn duplicate_ids_are_dropped() {
        let raw = vec![
            RawMeme { id: "1".into(), name: "first".into(), url: String::new(), width: 0, height: 0, box_count: 0 },
            RawMeme { id: "1".into(), name: "again".into(), url: String::new(), width: 0, height: 0, box_count: 0 },
            RawMeme { id: "2".into(), name: "second".into(), url: String::new(), width: 0, height: 0, box_count: 0 },
        ];
        let items = ingest(raw, &mut RandomMetadata::from_seed(3), Utc::now());
        let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second"]);
    }
}
