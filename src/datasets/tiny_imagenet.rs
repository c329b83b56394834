use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;

use crate::models::{
    DistributionSlice, ImageNetClass, ImageNetClassesResponse, ImageNetSample,
    ImageNetSamplesResponse, ImageNetStatistics,
};
use crate::AppState;

/// Advertised class total; only the first 25 classes are actually listable.
const TOTAL_CLASSES: u32 = 200;
const SAMPLES_PER_CLASS: u32 = 500;

const CLASS_NAMES: [&str; 25] = [
    "Egyptian cat",
    "Persian cat",
    "tabby cat",
    "tiger cat",
    "Siamese cat",
    "golden retriever",
    "Labrador retriever",
    "beagle",
    "basset hound",
    "bloodhound",
    "sports car",
    "convertible",
    "limousine",
    "pickup truck",
    "fire engine",
    "airliner",
    "warplane",
    "space shuttle",
    "hot air balloon",
    "airship",
    "acoustic guitar",
    "electric guitar",
    "banjo",
    "cello",
    "violin",
];

#[derive(Debug, Deserialize)]
pub struct ClassQuery {
    #[serde(default = "default_class_limit")]
    pub limit: usize,
    #[serde(default)]
    pub offset: usize,
}

fn default_class_limit() -> usize {
    50
}

#[derive(Debug, Deserialize)]
pub struct SampleQuery {
    #[serde(default = "default_sample_limit")]
    pub limit: usize,
}

fn default_sample_limit() -> usize {
    20
}

/// GET /datasets/tiny-imagenet/classes
pub async fn classes(Query(query): Query<ClassQuery>) -> Json<ImageNetClassesResponse> {
    Json(class_page(query.limit, query.offset))
}

/// GET /datasets/tiny-imagenet/samples/:class_id
pub async fn samples(
    State(state): State<AppState>,
    Path(class_id): Path<String>,
    Query(query): Query<SampleQuery>,
) -> Json<ImageNetSamplesResponse> {
    Json(sample_page(
        &state.settings.api_prefix,
        &class_id,
        query.limit,
    ))
}

/// GET /datasets/tiny-imagenet/statistics
pub async fn statistics() -> Json<ImageNetStatistics> {
    Json(ImageNetStatistics {
        total_images: 120000,
        total_classes: TOTAL_CLASSES,
        image_size: "64x64".to_string(),
        color_channels: 3,
        training_images: 100000,
        validation_images: 10000,
        test_images: 10000,
        images_per_class: SAMPLES_PER_CLASS,
        distribution: vec![
            DistributionSlice {
                name: "Training".to_string(),
                value: 100000,
                color: "#3b82f6".to_string(),
            },
            DistributionSlice {
                name: "Validation".to_string(),
                value: 10000,
                color: "#8b5cf6".to_string(),
            },
            DistributionSlice {
                name: "Test".to_string(),
                value: 10000,
                color: "#f59e0b".to_string(),
            },
        ],
    })
}

/// Classes come from the fixed name list; a page past its end just comes back
/// short (or empty), never an error. The envelope still advertises 200.
fn class_page(limit: usize, offset: usize) -> ImageNetClassesResponse {
    let available = CLASS_NAMES.len().saturating_sub(offset);
    let classes = (0..limit.min(available))
        .map(|i| {
            let idx = offset + i;
            ImageNetClass {
                id: format!("n{:08}", idx),
                name: CLASS_NAMES[idx].to_string(),
                wordnet_id: format!("n{:08}", idx),
                sample_count: SAMPLES_PER_CLASS,
            }
        })
        .collect();

    ImageNetClassesResponse {
        classes,
        total: TOTAL_CLASSES,
        limit,
        offset,
    }
}

fn sample_page(api_prefix: &str, class_id: &str, limit: usize) -> ImageNetSamplesResponse {
    let samples = (0..limit)
        .map(|i| ImageNetSample {
            id: format!("{}_{}", class_id, i + 1),
            filename: format!("{}_{}.JPEG", class_id, i + 1),
            class_id: class_id.to_string(),
            width: 64,
            height: 64,
            url: format!(
                "{}/images/tiny-imagenet/{}/{}_{}",
                api_prefix,
                class_id,
                class_id,
                i + 1
            ),
        })
        .collect();

    ImageNetSamplesResponse {
        samples,
        class_id: class_id.to_string(),
        total_per_class: SAMPLES_PER_CLASS,
        limit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_page_caps_at_name_list() {
        let page = class_page(50, 0);
        assert_eq!(page.classes.len(), 25);
        assert_eq!(page.total, 200);
        assert_eq!(page.limit, 50);
    }

    #[test]
    fn test_class_page_short_near_end() {
        let page = class_page(50, 10);
        assert_eq!(page.classes.len(), 15);
        assert_eq!(page.classes[0].name, "sports car");
        assert_eq!(page.classes[0].id, "n00000010");
    }

    #[test]
    fn test_class_page_empty_past_end() {
        assert!(class_page(50, 25).classes.is_empty());
        assert!(class_page(50, 1000).classes.is_empty());
    }

    #[test]
    fn test_class_page_respects_small_limit() {
        let page = class_page(3, 0);
        assert_eq!(page.classes.len(), 3);
        assert_eq!(page.classes[0].name, "Egyptian cat");
        assert_eq!(page.classes[2].name, "tabby cat");
    }

    #[test]
    fn test_class_ids_are_zero_padded() {
        let page = class_page(1, 7);
        assert_eq!(page.classes[0].id, "n00000007");
        assert_eq!(page.classes[0].wordnet_id, "n00000007");
        assert_eq!(page.classes[0].sample_count, 500);
    }

    #[test]
    fn test_sample_page_shape() {
        let page = sample_page("/api/v1", "n00000003", 2);
        assert_eq!(page.samples.len(), 2);
        assert_eq!(page.samples[0].id, "n00000003_1");
        assert_eq!(page.samples[0].filename, "n00000003_1.JPEG");
        assert_eq!(page.samples[0].width, 64);
        assert_eq!(
            page.samples[1].url,
            "/api/v1/images/tiny-imagenet/n00000003/n00000003_2"
        );
        assert_eq!(page.class_id, "n00000003");
        assert_eq!(page.total_per_class, 500);
    }

    #[tokio::test]
    async fn test_statistics_split_sums_to_total() {
        let Json(stats) = statistics().await;
        assert_eq!(
            stats.training_images + stats.validation_images + stats.test_images,
            stats.total_images
        );
        assert_eq!(stats.image_size, "64x64");
        assert_eq!(stats.distribution.len(), 3);
    }
}
