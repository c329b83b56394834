use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use crate::models::{
    CategoryCount, ChestXrayCategoriesResponse, ChestXraySample, ChestXraySamplesResponse,
    ChestXrayStatistics, DistributionSlice,
};
use crate::AppState;

const TOTAL_IMAGES: u64 = 5856;
const NORMAL_CASES: u64 = 1583;
const PNEUMONIA_CASES: u64 = 4273;

#[derive(Debug, Deserialize)]
pub struct SampleQuery {
    #[serde(default = "default_limit")]
    pub limit: usize,
    #[serde(default)]
    pub offset: usize,
}

fn default_limit() -> usize {
    20
}

/// GET /datasets/chest-xray/samples
/// Deterministic page of synthetic chest x-ray sample records
pub async fn samples(
    State(state): State<AppState>,
    Query(query): Query<SampleQuery>,
) -> Json<ChestXraySamplesResponse> {
    Json(sample_page(
        &state.settings.api_prefix,
        query.limit,
        query.offset,
    ))
}

/// GET /datasets/chest-xray/categories
pub async fn categories() -> Json<ChestXrayCategoriesResponse> {
    Json(ChestXrayCategoriesResponse {
        categories: vec![
            CategoryCount {
                name: "Normal".to_string(),
                count: NORMAL_CASES,
                percentage: 27.0,
            },
            CategoryCount {
                name: "Pneumonia".to_string(),
                count: PNEUMONIA_CASES,
                percentage: 73.0,
            },
        ],
    })
}

/// GET /datasets/chest-xray/statistics
pub async fn statistics() -> Json<ChestXrayStatistics> {
    Json(ChestXrayStatistics {
        total_images: TOTAL_IMAGES,
        normal_cases: NORMAL_CASES,
        pneumonia_cases: PNEUMONIA_CASES,
        image_format: "JPEG".to_string(),
        source: "Pediatric patients".to_string(),
        quality_control: "Expert physician graded".to_string(),
        distribution: vec![
            DistributionSlice {
                name: "Normal".to_string(),
                value: NORMAL_CASES,
                color: "#10b981".to_string(),
            },
            DistributionSlice {
                name: "Pneumonia".to_string(),
                value: PNEUMONIA_CASES,
                color: "#ef4444".to_string(),
            },
        ],
    })
}

/// Sample `i` of a page is "Normal" on every third global index and carries a
/// file size growing with the page-local index.
fn sample_page(api_prefix: &str, limit: usize, offset: usize) -> ChestXraySamplesResponse {
    let samples = (0..limit)
        .map(|i| {
            let n = offset + i + 1;
            let category = if (offset + i) % 3 == 0 {
                "Normal"
            } else {
                "Pneumonia"
            };
            ChestXraySample {
                id: format!("chest_xray_{}", n),
                filename: format!("chest_xray_{}.jpeg", n),
                category: category.to_string(),
                file_size: 45000 + (i as u64) * 1000,
                width: 1024,
                height: 1024,
                url: format!("{}/images/chest-xray/chest_xray_{}", api_prefix, n),
            }
        })
        .collect();

    ChestXraySamplesResponse {
        samples,
        total: TOTAL_IMAGES,
        limit,
        offset,
    }
}
