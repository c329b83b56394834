use axum::Json;

use crate::models::{CategoryField, DatasetListResponse, DatasetSummary};
use crate::AppState;

pub mod chest_xray;
pub mod kitti;
pub mod tiny_imagenet;

pub fn routes() -> axum::Router<AppState> {
    axum::Router::new()
        .route("/", axum::routing::get(list_datasets))
        .route(
            "/chest-xray/samples",
            axum::routing::get(chest_xray::samples),
        )
        .route(
            "/chest-xray/categories",
            axum::routing::get(chest_xray::categories),
        )
        .route(
            "/chest-xray/statistics",
            axum::routing::get(chest_xray::statistics),
        )
        .route(
            "/tiny-imagenet/classes",
            axum::routing::get(tiny_imagenet::classes),
        )
        .route(
            "/tiny-imagenet/samples/:class_id",
            axum::routing::get(tiny_imagenet::samples),
        )
        .route(
            "/tiny-imagenet/statistics",
            axum::routing::get(tiny_imagenet::statistics),
        )
        .route("/kitti/sequences", axum::routing::get(kitti::sequences))
        .route(
            "/kitti/sequence/:sequence_id",
            axum::routing::get(kitti::sequence_detail),
        )
        .route(
            "/kitti/frames/:sequence_id",
            axum::routing::get(kitti::frames),
        )
}

/// GET /datasets/
/// Catalog of the three browsable datasets
async fn list_datasets() -> Json<DatasetListResponse> {
    Json(dataset_list())
}

fn dataset_list() -> DatasetListResponse {
    DatasetListResponse {
        datasets: vec![
            DatasetSummary {
                id: "chest-xray".to_string(),
                name: "Chest X-ray Pneumonia Detection".to_string(),
                source_type: "kaggle".to_string(),
                description: "Medical imaging dataset for pneumonia classification".to_string(),
                total_images: Some(5856),
                total_sequences: None,
                categories: Some(CategoryField::Names(vec![
                    "Normal".to_string(),
                    "Pneumonia".to_string(),
                ])),
                data_types: None,
            },
            DatasetSummary {
                id: "tiny-imagenet".to_string(),
                name: "Tiny-ImageNet-200".to_string(),
                source_type: "stanford".to_string(),
                description: "200-class object recognition dataset".to_string(),
                total_images: Some(120000),
                total_sequences: None,
                categories: Some(CategoryField::Count(200)),
                data_types: None,
            },
            DatasetSummary {
                id: "kitti".to_string(),
                name: "KITTI Dataset".to_string(),
                source_type: "kitti".to_string(),
                description: "Autonomous driving and computer vision".to_string(),
                total_images: None,
                total_sequences: Some("Multiple".to_string()),
                categories: None,
                data_types: Some(vec![
                    "Camera".to_string(),
                    "LIDAR".to_string(),
                    "GPS".to_string(),
                ]),
            },
        ],
    }
}
