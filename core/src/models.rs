// Wire models for the Emby endpoints used by the skip client

use serde::{Deserialize, Serialize};

/// One page of a show's episode listing
///
/// Response body of `GET Shows/{show_id}/Episodes`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EpisodesPage {
    /// Episodes in server order (season, then episode index)
    #[serde(rename = "Items", default)]
    pub items: Vec<Episode>,
}

/// A single episode entry from the episode listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Episode {
    /// Item ID used by every other endpoint
    #[serde(rename = "Id")]
    pub id: String,

    /// Episode number within its season.
    /// Absent on specials and items the scanner has not numbered;
    /// such entries never match a season/episode lookup.
    #[serde(rename = "IndexNumber", default)]
    pub index_number: Option<i64>,

    /// Season number
    #[serde(rename = "ParentIndexNumber", default)]
    pub parent_index_number: Option<i64>,

    /// Display title
    #[serde(rename = "Name", default)]
    pub name: Option<String>,
}

/// Chapter listing from the chapter-api plugin endpoint
///
/// Response body of `GET emby/chapter_api/get_chapters?id={item}`.
/// Field casing differs from core Emby payloads: the plugin wraps its
/// list in lowercase `chapters` while the entries keep PascalCase.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChaptersPage {
    #[serde(rename = "chapters", default)]
    pub chapters: Vec<Chapter>,
}

/// A single chapter marker on an item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chapter {
    /// Position of the chapter in the item's chapter list;
    /// this is what the remove action takes, not a timestamp
    #[serde(rename = "Index")]
    pub index: i64,

    /// Server-side marker type, e.g. "IntroStart" or "Chapter"
    #[serde(rename = "MarkerType")]
    pub marker_type: String,

    /// Display name
    #[serde(rename = "Name", default)]
    pub name: Option<String>,
}

/// Playback metadata for an item
///
/// Response body of `GET emby/Items/{item}/PlaybackInfo`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlaybackInfo {
    #[serde(rename = "MediaSources", default)]
    pub media_sources: Vec<MediaSource>,
}

/// One media source of an item; the first source carries the
/// runtime used for credits placement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaSource {
    /// Total runtime in Emby ticks (100 ns units)
    #[serde(rename = "RunTimeTicks", default)]
    pub run_time_ticks: Option<i64>,

    #[serde(rename = "Name", default)]
    pub name: Option<String>,
}

/// The three skip-marker kinds this client writes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    IntroStart,
    IntroEnd,
    CreditsStart,
}

impl MarkerKind {
    /// Value of the `type` query parameter on an add action
    pub fn query_value(&self) -> &'static str {
        match self {
            MarkerKind::IntroStart => "intro_start",
            MarkerKind::IntroEnd => "intro_end",
            MarkerKind::CreditsStart => "credits_start",
        }
    }

    /// Display name sent with an add action
    pub fn display_name(&self) -> &'static str {
        match self {
            MarkerKind::IntroStart => "Intro",
            MarkerKind::IntroEnd => "Intro End",
            MarkerKind::CreditsStart => "Credits",
        }
    }

    /// Prefix of the server-side `MarkerType` values this kind replaces.
    /// Both intro markers share the "Intro" prefix, so clearing either
    /// one clears the pair.
    pub fn removal_prefix(&self) -> &'static str {
        match self {
            MarkerKind::IntroStart | MarkerKind::IntroEnd => "Intro",
            MarkerKind::CreditsStart => "Credits",
        }
    }

    /// Whether an existing chapter's `MarkerType` is stale for this kind
    pub fn matches_marker_type(&self, marker_type: &str) -> bool {
        marker_type.starts_with(self.removal_prefix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_episodes_page_deserialization() {
        let json = r#"{
            "Items": [
                {"Id": "5901", "IndexNumber": 1, "ParentIndexNumber": 2, "Name": "The One"},
                {"Id": "5902", "Name": "Special"}
            ],
            "TotalRecordCount": 2
        }"#;
        let page: EpisodesPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[0].id, "5901");
        assert_eq!(page.items[0].index_number, Some(1));
        assert_eq!(page.items[0].parent_index_number, Some(2));
        // Specials come without index numbers
        assert_eq!(page.items[1].index_number, None);
    }

    #[test]
    fn test_chapters_page_deserialization() {
        let json = r#"{
            "chapters": [
                {"Index": 0, "MarkerType": "IntroStart", "Name": "Intro"},
                {"Index": 3, "MarkerType": "Chapter"}
            ]
        }"#;
        let page: ChaptersPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.chapters.len(), 2);
        assert_eq!(page.chapters[0].index, 0);
        assert_eq!(page.chapters[0].marker_type, "IntroStart");
        assert_eq!(page.chapters[1].name, None);
    }

    #[test]
    fn test_playback_info_deserialization() {
        let json = r#"{
            "MediaSources": [
                {"RunTimeTicks": 13500000000, "Name": "1080p"}
            ]
        }"#;
        let info: PlaybackInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.media_sources[0].run_time_ticks, Some(13500000000));
    }

    #[test]
    fn test_playback_info_empty_sources() {
        let info: PlaybackInfo = serde_json::from_str("{}").unwrap();
        assert!(info.media_sources.is_empty());
    }

    #[test]
    fn test_marker_kind_query_values() {
        assert_eq!(MarkerKind::IntroStart.query_value(), "intro_start");
        assert_eq!(MarkerKind::IntroEnd.query_value(), "intro_end");
        assert_eq!(MarkerKind::CreditsStart.query_value(), "credits_start");
    }

    #[test]
    fn test_marker_kind_removal_matching() {
        // Either intro kind clears both server-side intro markers
        assert!(MarkerKind::IntroStart.matches_marker_type("IntroStart"));
        assert!(MarkerKind::IntroStart.matches_marker_type("IntroEnd"));
        assert!(MarkerKind::IntroEnd.matches_marker_type("IntroStart"));
        assert!(!MarkerKind::IntroStart.matches_marker_type("CreditsStart"));
        assert!(MarkerKind::CreditsStart.matches_marker_type("CreditsStart"));
        assert!(!MarkerKind::CreditsStart.matches_marker_type("Chapter"));
    }
}
