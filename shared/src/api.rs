use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

use crate::chart::ChartSeries;
use crate::error::StudioError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedObject {
    pub name: String,
    pub confidence: f64,
    pub bbox: BoundingBox,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionReport {
    pub objects: Vec<DetectedObject>,
    pub scene_description: String,
    pub threshold: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    pub positive: f64,
    pub negative: f64,
    pub neutral: f64,
    pub overall: Sentiment,
}

impl SentimentResult {
    /// Percentage of the winning category.
    pub fn overall_score(&self) -> f64 {
        match self.overall {
            Sentiment::Positive => self.positive,
            Sentiment::Negative => self.negative,
            Sentiment::Neutral => self.neutral,
        }
    }
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
    EnumIter, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ContentType {
    #[default]
    Story,
    Educational,
}

impl ContentType {
    /// Strict parse: anything other than `story` / `educational` is rejected.
    pub fn parse(raw: &str) -> Result<Self, StudioError> {
        raw.trim()
            .to_ascii_lowercase()
            .parse::<Self>()
            .map_err(|_| StudioError::UnsupportedType(raw.to_string()))
    }

    /// Lenient parse that falls back to `Story` for unknown input.
    pub fn parse_or_default(raw: &str) -> Self {
        Self::parse(raw).unwrap_or_default()
    }
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
    EnumIter, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ContentLength {
    Short,
    #[default]
    Medium,
    Long,
}

impl ContentLength {
    pub fn parse(raw: &str) -> Result<Self, StudioError> {
        raw.trim()
            .to_ascii_lowercase()
            .parse::<Self>()
            .map_err(|_| StudioError::UnsupportedType(raw.to_string()))
    }
}

/// Validated input to the template generator.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub content_type: ContentType,
    pub theme: String,
    pub length: ContentLength,
    pub creativity: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedContent {
    pub text: String,
    pub word_count: usize,
    pub read_time: usize,
    pub creativity: u8,
    pub content_type: ContentType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStats {
    pub words: usize,
    pub characters: usize,
    pub sentences: usize,
    pub readability: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageStats {
    pub language: String,
    pub confidence: String,
    pub word_complexity: String,
    pub formality_level: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextAnalysis {
    pub sentiment: SentimentResult,
    pub summary: String,
    pub keywords: Vec<String>,
    pub language_stats: LanguageStats,
    pub stats: TextStats,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Correlation {
    pub label: String,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiModalAnalysis {
    pub scene_understanding: String,
    pub contextual_insights: String,
    pub correlations: Vec<Correlation>,
    pub report: String,
}

/// Opaque reference to an image (content hash or data URL). Never decoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSource(pub String);

impl ImageSource {
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelCard {
    pub name: String,
    pub accuracy: String,
    pub speed: String,
}

// HTTP request bodies

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionRequest {
    pub image_hash: String,
    pub threshold: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextRequest {
    #[serde(default)]
    pub text: String,
}

/// Raw generation form. Enum fields stay strings so the server decides
/// between rejecting and falling back.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    #[serde(default)]
    pub content_type: String,
    #[serde(default)]
    pub theme: String,
    pub length: Option<String>,
    pub creativity: Option<u8>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiModalRequest {
    pub image_hash: Option<String>,
    pub image_data_url: Option<String>,
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExportKind {
    GeneratedContent,
    MultimodalReport,
}

impl ExportKind {
    pub fn file_name(&self) -> &'static str {
        match self {
            ExportKind::GeneratedContent => "generated-content.txt",
            ExportKind::MultimodalReport => "multimodal-analysis-report.txt",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportRequest {
    pub kind: ExportKind,
    #[serde(default)]
    pub text: String,
}

// HTTP response bodies

/// A response tagged with the sequence number it was issued under. Clients
/// apply it only when `stale` is false.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub sequence: u64,
    pub stale: bool,
    pub data: T,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageRef {
    pub hash: String,
    pub file_name: String,
    pub size: usize,
    pub mime_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionAnalysis {
    pub report: DetectionReport,
    pub chart: ChartSeries,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub image: ImageRef,
    pub detection: Envelope<DetectionAnalysis>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextAnalysisResponse {
    pub analysis: TextAnalysis,
    pub chart: ChartSeries,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MultiModalResponse {
    pub analysis: MultiModalAnalysis,
    pub chart: ChartSeries,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleText {
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectInfo {
    pub models: Vec<ModelCard>,
    pub performance: ChartSeries,
}
