//! Label/value series for the charting side. Widgets are keyed by `chart_id`;
//! a renderer replaces whatever it already holds under the same id.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display};

use crate::api::{DetectedObject, MultiModalAnalysis, SentimentResult};
use crate::lexicon::CAPABILITY_ACCURACY;

const CONFIDENCE_BARS: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Doughnut,
    Radar,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSeries {
    pub chart_id: String,
    pub kind: ChartKind,
    pub label: String,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub max: Option<f64>,
}

impl ChartSeries {
    fn new(chart_id: &str, kind: ChartKind, label: &str) -> Self {
        Self {
            chart_id: chart_id.to_string(),
            kind,
            label: label.to_string(),
            labels: Vec::new(),
            values: Vec::new(),
            max: None,
        }
    }

    fn point(mut self, label: &str, value: f64) -> Self {
        self.labels.push(label.to_string());
        self.values.push(value);
        self
    }

    fn with_max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }
}

/// Top six detections, confidence in percent.
pub fn confidence_chart(objects: &[DetectedObject]) -> ChartSeries {
    objects
        .iter()
        .take(CONFIDENCE_BARS)
        .fold(
            ChartSeries::new("confidence", ChartKind::Bar, "Confidence Score"),
            |series, object| series.point(&object.name, object.confidence * 100.0),
        )
        .with_max(100.0)
}

pub fn sentiment_chart(result: &SentimentResult) -> ChartSeries {
    ChartSeries::new("sentiment", ChartKind::Doughnut, "Sentiment")
        .point("Positive", result.positive)
        .point("Negative", result.negative)
        .point("Neutral", result.neutral)
}

pub fn correlation_chart(analysis: &MultiModalAnalysis) -> ChartSeries {
    analysis
        .correlations
        .iter()
        .fold(
            ChartSeries::new("correlation", ChartKind::Radar, "Correlation Score"),
            |series, c| series.point(&c.label, c.score),
        )
        .with_max(1.0)
}

pub fn performance_chart() -> ChartSeries {
    CAPABILITY_ACCURACY
        .iter()
        .fold(
            ChartSeries::new("performance", ChartKind::Bar, "Accuracy (%)"),
            |series, &(label, accuracy)| series.point(label, accuracy),
        )
        .with_max(100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{BoundingBox, Sentiment};

    fn object(name: &str, confidence: f64) -> DetectedObject {
        DetectedObject {
            name: name.into(),
            confidence,
            bbox: BoundingBox {
                x: 10.0,
                y: 10.0,
                width: 20.0,
                height: 20.0,
            },
        }
    }

    #[test]
    fn confidence_chart_takes_top_six_in_percent() {
        let objects: Vec<_> = (0..9).map(|i| object(&format!("o{i}"), 0.9 - i as f64 * 0.05)).collect();
        let chart = confidence_chart(&objects);
        assert_eq!(chart.kind, ChartKind::Bar);
        assert_eq!(chart.labels.len(), 6);
        assert_eq!(chart.labels[0], "o0");
        assert!((chart.values[0] - 90.0).abs() < 1e-9);
        assert_eq!(chart.max, Some(100.0));
    }

    #[test]
    fn sentiment_chart_has_three_slices() {
        let result = SentimentResult {
            positive: 50.0,
            negative: 25.0,
            neutral: 25.0,
            overall: Sentiment::Positive,
        };
        let chart = sentiment_chart(&result);
        assert_eq!(chart.labels, ["Positive", "Negative", "Neutral"]);
        assert_eq!(chart.values, [50.0, 25.0, 25.0]);
        assert_eq!(chart.max, None);
    }

    #[test]
    fn performance_chart_is_fixed() {
        let chart = performance_chart();
        assert_eq!(chart.chart_id, "performance");
        assert_eq!(chart.values, [92.3, 88.7, 85.4, 91.2]);
    }
}
