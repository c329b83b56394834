use axum::{
    extract::{DefaultBodyLimit, Multipart, Path, State},
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::error::ApiError;
use crate::models::{
    BatchUploadResponse, SequenceFrameRecord, SequenceUploadResponse, UploadCategory, UploadRecord,
    XrayAnalyzeResponse, XrayAnalyzeResult, XrayFileAnalysis,
};
use crate::AppState;

/// Batch cap, enforced on the medical endpoints only.
const MAX_BATCH_FILES: usize = 100;

pub fn routes() -> axum::Router<AppState> {
    axum::Router::new()
        .route("/medical", axum::routing::post(upload_medical))
        .route("/medical/batch", axum::routing::post(upload_medical_batch))
        .route("/xray", axum::routing::post(upload_xray))
        .route("/xray/analyze", axum::routing::post(analyze_xray))
        .route("/traffic", axum::routing::post(upload_traffic))
        .route(
            "/traffic/sequence",
            axum::routing::post(upload_traffic_sequence),
        )
        .route(
            "/xray/:upload_id/analysis",
            axum::routing::get(xray_analysis),
        )
        .route(
            "/traffic/:upload_id/analysis",
            axum::routing::get(traffic_analysis),
        )
        .route(
            "/:category/:upload_id",
            axum::routing::get(get_upload).delete(delete_upload),
        )
        // The per-file size check below is the only size control
        .layer(DefaultBodyLimit::disable())
}

/// One file drained from a multipart request. Only the metadata survives;
/// nothing is ever written to disk.
struct IncomingFile {
    filename: String,
    content_type: Option<String>,
    size: u64,
}

/// POST /upload/medical
/// Batch upload of medical images; caps the batch, then validates every file
async fn upload_medical(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<BatchUploadResponse>, ApiError> {
    let files = collect_files(multipart).await?;

    if files.len() > MAX_BATCH_FILES {
        return Err(ApiError::TooManyFiles(MAX_BATCH_FILES));
    }
    validate_batch(&files, state.settings.max_file_size)?;

    let uploads = build_batch(&files, UploadCategory::Medical);
    Ok(Json(BatchUploadResponse {
        message: format!("Successfully uploaded {} medical images", uploads.len()),
        uploads,
    }))
}

/// POST /upload/medical/batch
/// Alias kept for clients that still post to the old path
async fn upload_medical_batch(
    state: State<AppState>,
    multipart: Multipart,
) -> Result<Json<BatchUploadResponse>, ApiError> {
    upload_medical(state, multipart).await
}

/// POST /upload/xray
async fn upload_xray(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<BatchUploadResponse>, ApiError> {
    let files = collect_files(multipart).await?;
    validate_batch(&files, state.settings.max_file_size)?;

    let uploads = build_batch(&files, UploadCategory::Xray);
    Ok(Json(BatchUploadResponse {
        message: format!("Successfully uploaded {} X-ray images", uploads.len()),
        uploads,
    }))
}

/// POST /upload/xray/analyze
/// Standalone analysis; accepts any file and fabricates fixed probabilities
async fn analyze_xray(multipart: Multipart) -> Result<Json<XrayAnalyzeResponse>, ApiError> {
    let files = collect_files(multipart).await?;

    let results = files
        .iter()
        .map(|file| XrayAnalyzeResult {
            upload_id: Uuid::new_v4().to_string(),
            filename: file.filename.clone(),
            analysis: XrayFileAnalysis::default(),
        })
        .collect();

    Ok(Json(XrayAnalyzeResponse {
        message: "X-ray analysis completed".to_string(),
        results,
    }))
}

/// POST /upload/traffic
async fn upload_traffic(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<BatchUploadResponse>, ApiError> {
    let files = collect_files(multipart).await?;
    validate_batch(&files, state.settings.max_file_size)?;

    let uploads = build_batch(&files, UploadCategory::Traffic);
    Ok(Json(BatchUploadResponse {
        message: format!("Successfully uploaded {} traffic images", uploads.len()),
        uploads,
    }))
}

/// POST /upload/traffic/sequence
/// The whole batch shares one sequence id; frames are numbered by position
async fn upload_traffic_sequence(
    multipart: Multipart,
) -> Result<Json<SequenceUploadResponse>, ApiError> {
    let sequence_id = Uuid::new_v4().to_string();
    let files = collect_files(multipart).await?;

    let uploads: Vec<SequenceFrameRecord> = files
        .iter()
        .enumerate()
        .map(|(i, file)| SequenceFrameRecord {
            upload_id: Uuid::new_v4().to_string(),
            sequence_id: sequence_id.clone(),
            frame_number: i as u64,
            original_filename: file.filename.clone(),
            stored_filename: format!(
                "{}_frame_{:06}{}",
                sequence_id,
                i,
                file_extension(&file.filename)
            ),
            category: "traffic_sequence".to_string(),
            file_size: file.size,
            processing_status: "completed".to_string(),
        })
        .collect();

    Ok(Json(SequenceUploadResponse {
        message: format!(
            "Successfully uploaded traffic sequence with {} frames",
            uploads.len()
        ),
        sequence_id,
        uploads,
    }))
}

/// GET /upload/:category/:upload_id
/// No store backs uploads; a plausible record is synthesized from the path
async fn get_upload(Path((category, upload_id)): Path<(String, String)>) -> impl IntoResponse {
    Json(serde_json::json!({
        "upload_id": upload_id,
        "category": category,
        "original_filename": format!("sample_{}.jpg", upload_id),
        "stored_filename": format!("{}.jpg", upload_id),
        "file_size": 1024000,
        "processing_status": "completed",
        "created_at": "2024-01-01T00:00:00Z",
        "analysis_results": {
            "processed": true,
            "format": "JPEG",
            "dimensions": {"width": 1024, "height": 1024}
        }
    }))
}

/// DELETE /upload/:category/:upload_id
/// Always succeeds; there is nothing to delete
async fn delete_upload(Path((category, upload_id)): Path<(String, String)>) -> impl IntoResponse {
    Json(serde_json::json!({
        "message": format!("Upload {} deleted successfully", upload_id),
        "upload_id": upload_id,
        "category": category
    }))
}

/// GET /upload/xray/:upload_id/analysis
async fn xray_analysis(Path(upload_id): Path<String>) -> impl IntoResponse {
    Json(serde_json::json!({
        "upload_id": upload_id,
        "analysis": {
            "pneumonia_probability": 0.15,
            "normal_probability": 0.85,
            "confidence_score": 0.92,
            "model_prediction": "Normal",
            "processing_time_ms": 1250,
            "model_version": "v1.0",
            "analysis_date": "2024-01-01T00:00:00Z"
        }
    }))
}

/// GET /upload/traffic/:upload_id/analysis
async fn traffic_analysis(Path(upload_id): Path<String>) -> impl IntoResponse {
    Json(serde_json::json!({
        "upload_id": upload_id,
        "analysis": {
            "detected_objects": [
                {"type": "vehicle", "count": 3, "confidence": 0.92, "bounding_boxes": []},
                {"type": "traffic_sign", "count": 1, "confidence": 0.88, "bounding_boxes": []},
                {"type": "pedestrian", "count": 0, "confidence": 0.0, "bounding_boxes": []}
            ],
            "scene_classification": "urban_street",
            "weather_conditions": "clear",
            "time_of_day": "daytime",
            "processing_time_ms": 2100
        }
    }))
}

/// Drain every part named `files` into memory before any validation, so a
/// violation can reject the batch as a whole.
async fn collect_files(mut multipart: Multipart) -> Result<Vec<IncomingFile>, ApiError> {
    let mut files = Vec::new();

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("files") {
            continue;
        }

        // A `files` part without a filename is a plain form field, not a file
        let filename = match field.file_name() {
            Some(name) => name.to_string(),
            None => continue,
        };
        let content_type = field.content_type().map(|ct| ct.to_string());
        let data = field.bytes().await?;

        files.push(IncomingFile {
            filename,
            content_type,
            size: data.len() as u64,
        });
    }

    Ok(files)
}

/// Per file, size is checked before content type. The first violation aborts
/// the whole batch; no records survive a failed validation.
fn validate_batch(files: &[IncomingFile], max_file_size: u64) -> Result<(), ApiError> {
    for file in files {
        if file.size > max_file_size {
            return Err(ApiError::FileTooLarge(file.filename.clone()));
        }

        let is_image = file
            .content_type
            .as_deref()
            .is_some_and(|ct| ct.starts_with("image/"));
        if !is_image {
            return Err(ApiError::NotAnImage(file.filename.clone()));
        }
    }

    Ok(())
}

fn build_batch(files: &[IncomingFile], category: UploadCategory) -> Vec<UploadRecord> {
    files.iter().map(|file| make_record(file, category)).collect()
}

fn make_record(file: &IncomingFile, category: UploadCategory) -> UploadRecord {
    let upload_id = Uuid::new_v4().to_string();
    let stored_filename = format!("{}{}", upload_id, file_extension(&file.filename));
    let content_type = file.content_type.as_deref().unwrap_or("");

    UploadRecord {
        upload_id,
        original_filename: file.filename.clone(),
        stored_filename,
        category,
        file_size: file.size,
        processing_status: "completed".to_string(),
        analysis_results: category.analysis(content_type),
    }
}

/// Final `.suffix` of a filename, dot included. A name made of nothing but
/// leading dots has no extension.
fn file_extension(filename: &str) -> &str {
    match filename.rfind('.') {
        Some(idx) if filename[..idx].chars().any(|c| c != '.') => &filename[idx..],
        _ => "",
    }
}
