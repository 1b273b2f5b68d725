//! Synthetic object detection.
//!
//! Produces a random list of labelled boxes whose confidences all sit at or
//! above the requested threshold. Nothing looks at the image.

use rand::Rng;

use crate::api::{BoundingBox, DetectedObject, DetectionReport};
use crate::lexicon::COMMON_OBJECTS;

pub const MIN_OBJECTS: usize = 3;
pub const MAX_OBJECTS: usize = 10;
pub const DEFAULT_THRESHOLD: f64 = 0.5;

const BOX_POSITION_MIN: f64 = 10.0;
const BOX_POSITION_SPAN: f64 = 60.0;
const BOX_SIZE_MIN: f64 = 15.0;
const BOX_SIZE_SPAN: f64 = 20.0;

/// Draws between 3 and 10 detections with confidence in `[threshold, 1]`,
/// sorted by descending confidence. Out-of-range thresholds are clamped.
pub fn detect<R: Rng + ?Sized>(rng: &mut R, threshold: f64) -> Vec<DetectedObject> {
    let threshold = clamp_threshold(threshold);
    let count = rng.random_range(MIN_OBJECTS..=MAX_OBJECTS);

    let mut objects: Vec<DetectedObject> = (0..count)
        .map(|_| {
            let name = COMMON_OBJECTS[rng.random_range(0..COMMON_OBJECTS.len())];
            let confidence = rng.random::<f64>() * (1.0 - threshold) + threshold;
            DetectedObject {
                name: name.to_string(),
                confidence,
                bbox: random_bbox(rng),
            }
        })
        .filter(|object| object.confidence >= threshold)
        .collect();

    objects.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
    objects
}

/// Runs [`detect`] and attaches a scene description.
pub fn analyze<R: Rng + ?Sized>(rng: &mut R, threshold: f64) -> DetectionReport {
    let threshold = clamp_threshold(threshold);
    let objects = detect(rng, threshold);
    let scene_description = describe_scene(rng, &objects);
    DetectionReport {
        objects,
        scene_description,
        threshold,
    }
}

/// One of three canned scene sentences filled from the detections.
pub fn describe_scene<R: Rng + ?Sized>(rng: &mut R, objects: &[DetectedObject]) -> String {
    let Some(top) = objects.first() else {
        return "No objects were detected above the selected confidence threshold.".to_string();
    };

    match rng.random_range(0..3) {
        0 => {
            let names: Vec<&str> = objects.iter().take(3).map(|o| o.name.as_str()).collect();
            format!(
                "This image contains {} detected objects including {}. The scene appears to be captured in a natural setting with good lighting conditions.",
                objects.len(),
                names.join(", ")
            )
        }
        1 => format!(
            "The AI model has identified several key elements in this image. The most prominent objects are {} with {:.1}% confidence, suggesting a high-quality detection result.",
            top.name,
            top.confidence * 100.0
        ),
        _ => {
            let (min, max) = objects.iter().fold((f64::MAX, f64::MIN), |(lo, hi), o| {
                (lo.min(o.confidence), hi.max(o.confidence))
            });
            format!(
                "Analysis reveals a complex scene with multiple objects of interest. The detection algorithm shows strong performance with confidence scores ranging from {:.1}% to {:.1}%.",
                min * 100.0,
                max * 100.0
            )
        }
    }
}

fn random_bbox<R: Rng + ?Sized>(rng: &mut R) -> BoundingBox {
    BoundingBox {
        x: rng.random::<f64>() * BOX_POSITION_SPAN + BOX_POSITION_MIN,
        y: rng.random::<f64>() * BOX_POSITION_SPAN + BOX_POSITION_MIN,
        width: rng.random::<f64>() * BOX_SIZE_SPAN + BOX_SIZE_MIN,
        height: rng.random::<f64>() * BOX_SIZE_SPAN + BOX_SIZE_MIN,
    }
}

fn clamp_threshold(threshold: f64) -> f64 {
    if threshold.is_nan() {
        return DEFAULT_THRESHOLD;
    }
    threshold.clamp(0.0, 1.0)
}
