use crate::api::{Correlation, ImageSource, MultiModalAnalysis};
use crate::error::{Result, StudioError};
use crate::lexicon::{CONTEXTUAL_INSIGHTS, CORRELATIONS, FUSION_REPORT, SCENE_UNDERSTANDING};

/// Canned cross-modal analysis. The result never depends on the inputs; at
/// least one of them must be present.
pub fn fuse(image: Option<&ImageSource>, text: &str) -> Result<MultiModalAnalysis> {
    let has_image = image.is_some_and(|source| !source.is_empty());
    if !has_image && text.trim().is_empty() {
        return Err(StudioError::MissingInput("image or text"));
    }

    Ok(MultiModalAnalysis {
        scene_understanding: SCENE_UNDERSTANDING.to_string(),
        contextual_insights: CONTEXTUAL_INSIGHTS.to_string(),
        correlations: CORRELATIONS
            .iter()
            .map(|&(label, score)| Correlation {
                label: label.to_string(),
                score,
            })
            .collect(),
        report: FUSION_REPORT.to_string(),
    })
}
