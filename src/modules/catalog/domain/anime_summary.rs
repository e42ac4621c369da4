use super::slug::create_slug;
use crate::modules::provider::ExternalRecord;
use serde::{Deserialize, Serialize};
use serde_json::Value;

const DESCRIPTION_PREVIEW_CHARS: usize = 150;
const NO_SUMMARY: &str = "No summary available.";
pub const PLACEHOLDER_PICTURE: &str = "https://placehold.co/225x318/cccccc/333333?text=No+Image";

/// Card-sized view of a Jikan anime record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimeSummary {
    pub jikan_id: i64,
    pub title: String,
    /// `None` when the upstream has no score (clients show "N/A")
    pub rating: Option<f64>,
    pub picture: Option<String>,
    pub description: String,
    #[serde(rename = "type")]
    pub anime_type: Option<String>,
    pub slug: String,
}

/// Entry of the current-season listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonEntry {
    pub jikan_id: i64,
    pub title: String,
    pub score: Option<f64>,
    pub episodes: Option<i64>,
    pub status: Option<String>,
    pub picture: String,
}

impl AnimeSummary {
    /// `None` for records without a usable `mal_id`
    pub fn from_record(record: &ExternalRecord) -> Option<Self> {
        let jikan_id = mal_id(record)?;
        let title = str_field(record, "title").unwrap_or_default();

        Some(Self {
            jikan_id,
            slug: create_slug(&title),
            title,
            rating: score(record),
            picture: image_url(record, "webp").or_else(|| image_url(record, "jpg")),
            description: description_preview(str_field(record, "synopsis").as_deref()),
            anime_type: str_field(record, "type"),
        })
    }

    /// Map a batch, silently dropping records without an id
    pub fn from_records(records: &[ExternalRecord]) -> Vec<Self> {
        records.iter().filter_map(Self::from_record).collect()
    }
}

impl SeasonEntry {
    pub fn from_record(record: &ExternalRecord) -> Option<Self> {
        Some(Self {
            jikan_id: mal_id(record)?,
            title: str_field(record, "title").unwrap_or_default(),
            score: score(record),
            episodes: record
                .get("episodes")
                .and_then(Value::as_i64)
                .filter(|episodes| *episodes > 0),
            status: str_field(record, "status"),
            picture: image_url(record, "webp").unwrap_or_else(|| PLACEHOLDER_PICTURE.to_string()),
        })
    }
}

fn mal_id(record: &ExternalRecord) -> Option<i64> {
    record
        .get("mal_id")
        .and_then(Value::as_i64)
        .filter(|id| *id != 0)
}

fn score(record: &ExternalRecord) -> Option<f64> {
    record
        .get("score")
        .and_then(Value::as_f64)
        .filter(|score| *score != 0.0)
}

fn str_field(record: &ExternalRecord, key: &str) -> Option<String> {
    record
        .get(key)
        .and_then(Value::as_str)
        .map(str::to_string)
}

fn image_url(record: &ExternalRecord, format: &str) -> Option<String> {
    record
        .get("images")
        .and_then(|images| images.get(format))
        .and_then(|image| image.get("image_url"))
        .and_then(Value::as_str)
        .filter(|url| !url.is_empty())
        .map(str::to_string)
}

/// First 150 characters of the synopsis followed by an ellipsis
pub fn description_preview(synopsis: Option<&str>) -> String {
    match synopsis.filter(|s| !s.is_empty()) {
        Some(text) => {
            let preview: String = text.chars().take(DESCRIPTION_PREVIEW_CHARS).collect();
            format!("{}...", preview)
        }
        None => NO_SUMMARY.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> ExternalRecord {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_full_record_mapping() {
        let summary = AnimeSummary::from_record(&record(json!({
            "mal_id": 5114,
            "title": "Fullmetal Alchemist: Brotherhood",
            "score": 9.1,
            "type": "TV",
            "synopsis": "Two brothers.",
            "images": {
                "jpg": { "image_url": "https://cdn/fma.jpg" },
                "webp": { "image_url": "https://cdn/fma.webp" }
            }
        })))
        .unwrap();

        assert_eq!(summary.jikan_id, 5114);
        assert_eq!(summary.rating, Some(9.1));
        assert_eq!(summary.picture.as_deref(), Some("https://cdn/fma.webp"));
        assert_eq!(summary.description, "Two brothers....");
        assert_eq!(summary.anime_type.as_deref(), Some("TV"));
        assert_eq!(summary.slug, "fullmetal-alchemist-brotherhood");
    }

    #[test]
    fn test_jpg_fallback_and_missing_fields() {
        let summary = AnimeSummary::from_record(&record(json!({
            "mal_id": 1,
            "title": "Cowboy Bebop",
            "score": null,
            "images": { "jpg": { "image_url": "https://cdn/bebop.jpg" } }
        })))
        .unwrap();

        assert_eq!(summary.rating, None);
        assert_eq!(summary.picture.as_deref(), Some("https://cdn/bebop.jpg"));
        assert_eq!(summary.description, "No summary available.");
        assert_eq!(summary.anime_type, None);
    }

    #[test]
    fn test_zero_score_counts_as_missing() {
        let summary =
            AnimeSummary::from_record(&record(json!({ "mal_id": 2, "title": "x", "score": 0 })))
                .unwrap();
        assert_eq!(summary.rating, None);
    }

    #[test]
    fn test_records_without_id_are_dropped() {
        let records = vec![
            record(json!({ "title": "no id" })),
            record(json!({ "mal_id": 0, "title": "zero id" })),
            record(json!({ "mal_id": 21, "title": "One Piece" })),
        ];
        let summaries = AnimeSummary::from_records(&records);
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].jikan_id, 21);
    }

    #[test]
    fn test_description_is_truncated_on_char_boundary() {
        let long = "あ".repeat(200);
        let preview = description_preview(Some(&long));
        assert_eq!(preview.chars().count(), 153);
        assert!(preview.ends_with("..."));
        assert_eq!(description_preview(Some("")), "No summary available.");
    }

    #[test]
    fn test_season_entry_placeholder_and_episodes() {
        let entry = SeasonEntry::from_record(&record(json!({
            "mal_id": 55,
            "title": "Frieren",
            "episodes": null,
            "status": "Currently Airing"
        })))
        .unwrap();

        assert_eq!(entry.picture, PLACEHOLDER_PICTURE);
        assert_eq!(entry.episodes, None);
        assert_eq!(entry.status.as_deref(), Some("Currently Airing"));
    }

    #[test]
    fn test_summary_serializes_type_field() {
        let summary = AnimeSummary::from_record(&record(json!({ "mal_id": 3, "title": "A", "type": "Movie" })))
            .unwrap();
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["type"], "Movie");
        assert_eq!(json["jikan_id"], 3);
    }
}
