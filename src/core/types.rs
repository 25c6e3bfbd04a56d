// src/core/types.rs
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;

/// A unique identifier for a control record. Opaque and stable across the corpus.
pub type RecordId = String;

/// The deduplicated, filtered set of words extracted from one record.
pub type TokenSet = HashSet<String>;

/// Impact level grid as it appears in both artifacts, e.g. `{"High": "Mandatory"}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ImpactLevels {
    #[serde(deserialize_with = "nullable")]
    pub low: String,
    #[serde(deserialize_with = "nullable")]
    pub medium: String,
    #[serde(deserialize_with = "nullable")]
    pub high: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ControlMetadata {
    #[serde(deserialize_with = "nullable")]
    pub application_type: String,
    #[serde(deserialize_with = "nullable")]
    pub service_type: String,
    #[serde(deserialize_with = "nullable")]
    pub compliance: String,
    #[serde(deserialize_with = "nullable")]
    pub impact_levels: ImpactLevels,
}

/// The annotated block of a detail record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ProcessedContent {
    pub topic: Option<String>,
    pub recommendations: Option<Vec<String>>,
    #[serde(deserialize_with = "nullable")]
    pub checklist: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub evidence: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub suggested_corrections: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub is_unclear: bool,
    pub unclear_reason: Option<String>,
}

/// The full version of one item: the ranking target.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DetailRecord {
    #[serde(rename = "ControlID")]
    pub id: RecordId,
    #[serde(rename = "Category", default, deserialize_with = "nullable")]
    pub category: String,
    #[serde(rename = "ProcessingError", default, deserialize_with = "truthy")]
    pub excluded: bool,
    #[serde(rename = "OriginalTopic", default, deserialize_with = "nullable")]
    pub original_topic: String,
    #[serde(rename = "AI_Processed", default)]
    pub processed: Option<ProcessedContent>,
    #[serde(rename = "OriginalRecommendations", default, deserialize_with = "nullable")]
    pub original_recommendations: String,
    #[serde(rename = "Metadata", default)]
    pub metadata: Option<ControlMetadata>,
}

/// The lossy, one-line-per-item summary found in the index: a ranking candidate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndexRecord {
    #[serde(rename = "ControlID")]
    pub id: RecordId,
    #[serde(rename = "Category", default, deserialize_with = "nullable")]
    pub category: String,
    #[serde(rename = "ProcessingError", default, deserialize_with = "truthy")]
    pub excluded: bool,
    #[serde(rename = "OriginalTopic", default, deserialize_with = "nullable")]
    pub original_topic: String,
    #[serde(rename = "AI_Topic", default)]
    pub summary_topic: Option<String>,
    #[serde(rename = "AI_Recommendations", default)]
    pub summary_recommendations: Option<Vec<String>>,
    #[serde(rename = "ApplicationType", default)]
    pub application_type: Option<String>,
    #[serde(rename = "ImpactLevels", default)]
    pub impact_levels: Option<ImpactLevels>,
}

/// One record in either of its two projections.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentRecord {
    Detail(DetailRecord),
    IndexSummary(IndexRecord),
}

impl ContentRecord {
    pub fn id(&self) -> &str {
        match self {
            ContentRecord::Detail(d) => &d.id,
            ContentRecord::IndexSummary(i) => &i.id,
        }
    }

    pub fn category(&self) -> &str {
        match self {
            ContentRecord::Detail(d) => &d.category,
            ContentRecord::IndexSummary(i) => &i.category,
        }
    }

    /// True when the record carries no trustworthy text and must never be a candidate.
    pub fn is_excluded(&self) -> bool {
        match self {
            ContentRecord::Detail(d) => d.excluded,
            ContentRecord::IndexSummary(i) => i.excluded,
        }
    }

    /// Concatenates the shape's text fields, space separated. Absent fields read as empty.
    pub fn extract_text(&self) -> String {
        match self {
            ContentRecord::Detail(d) => {
                let processed = d.processed.as_ref();
                let topic = processed.and_then(|p| p.topic.as_deref()).unwrap_or("");
                let recommendations = processed
                    .and_then(|p| p.recommendations.as_ref())
                    .map(|r| r.join(" "))
                    .unwrap_or_default();
                format!(
                    "{} {} {} {}",
                    d.original_topic, topic, recommendations, d.original_recommendations
                )
            }
            ContentRecord::IndexSummary(i) => {
                let topic = i.summary_topic.as_deref().unwrap_or("");
                let recommendations = i
                    .summary_recommendations
                    .as_ref()
                    .map(|r| r.join(" "))
                    .unwrap_or_default();
                format!("{} {} {}", i.original_topic, topic, recommendations)
            }
        }
    }

    /// The annotated topic when there is one, else the original one.
    pub fn display_topic(&self) -> &str {
        let (annotated, original) = match self {
            ContentRecord::Detail(d) => (
                d.processed.as_ref().and_then(|p| p.topic.as_deref()),
                d.original_topic.as_str(),
            ),
            ContentRecord::IndexSummary(i) => {
                (i.summary_topic.as_deref(), i.original_topic.as_str())
            }
        };
        match annotated.filter(|t| !t.is_empty()) {
            Some(topic) => topic,
            None if !original.is_empty() => original,
            None => "Untitled",
        }
    }

    /// Category without its cosmetic numeric prefix, e.g. `"1.2 Access"` -> `"Access"`.
    pub fn display_category(&self) -> &str {
        self.category()
            .trim_start_matches(|c: char| c.is_ascii_digit() || c == '.' || c.is_whitespace())
    }

    /// Only detail records carry the unclear-source flag.
    pub fn is_unclear(&self) -> bool {
        match self {
            ContentRecord::Detail(d) => d.processed.as_ref().is_some_and(|p| p.is_unclear),
            ContentRecord::IndexSummary(_) => false,
        }
    }

    pub fn is_high_impact(&self) -> bool {
        let levels = match self {
            ContentRecord::Detail(d) => d.metadata.as_ref().map(|m| &m.impact_levels),
            ContentRecord::IndexSummary(i) => i.impact_levels.as_ref(),
        };
        levels.is_some_and(|l| l.high == "Mandatory")
    }
}

impl From<DetailRecord> for ContentRecord {
    fn from(record: DetailRecord) -> Self {
        ContentRecord::Detail(record)
    }
}

impl From<IndexRecord> for ContentRecord {
    fn from(record: IndexRecord) -> Self {
        ContentRecord::IndexSummary(record)
    }
}

/// A candidate paired with the number of distinct words it shares with the target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredCandidate<'a> {
    pub record: &'a ContentRecord,
    pub score: usize,
}

/// Explicit `null` reads the same as a missing key.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// `ProcessingError` is sometimes a flag and sometimes an error message.
/// Anything truthy excludes the record.
fn truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    use serde_json::Value;
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => false,
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    })
}
