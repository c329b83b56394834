use serde::Serialize;

/// Upload categories that produce stored records with an attached analysis
/// payload. Sequence uploads are handled separately: their records carry no
/// analysis and share a batch-wide sequence id.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UploadCategory {
    Medical,
    Xray,
    Traffic,
}

impl std::fmt::Display for UploadCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UploadCategory::Medical => write!(f, "medical"),
            UploadCategory::Xray => write!(f, "xray"),
            UploadCategory::Traffic => write!(f, "traffic"),
        }
    }
}

impl UploadCategory {
    /// Fabricate the analysis payload attached to an accepted file. Each
    /// category carries its own fixed schema; only the medical variant echoes
    /// anything from the request (the declared content type).
    pub fn analysis(&self, content_type: &str) -> AnalysisResults {
        match self {
            UploadCategory::Medical => AnalysisResults::Medical(MedicalAnalysis {
                image_type: "medical".to_string(),
                format: content_type.to_string(),
                anonymized: true,
            }),
            UploadCategory::Xray => AnalysisResults::Xray(XrayAnalysis {
                image_type: "chest_xray".to_string(),
                orientation: "corrected".to_string(),
                pneumonia_detection: PneumoniaDetection {
                    confidence: 0.85,
                    prediction: "normal".to_string(),
                    model_version: "v1.0".to_string(),
                },
            }),
            UploadCategory::Traffic => AnalysisResults::Traffic(TrafficAnalysis {
                image_type: "traffic_scene".to_string(),
                detected_objects: vec![
                    DetectedObject {
                        object_type: "vehicle".to_string(),
                        count: 3,
                        confidence: 0.92,
                    },
                    DetectedObject {
                        object_type: "traffic_sign".to_string(),
                        count: 1,
                        confidence: 0.88,
                    },
                    DetectedObject {
                        object_type: "pedestrian".to_string(),
                        count: 0,
                        confidence: 0.0,
                    },
                ],
                gps_coordinates: None,
            }),
        }
    }
}

/// Per-category analysis payload. Serialized untagged: each variant already
/// identifies itself through its `image_type` field.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum AnalysisResults {
    Medical(MedicalAnalysis),
    Xray(XrayAnalysis),
    Traffic(TrafficAnalysis),
}

#[derive(Debug, Clone, Serialize)]
pub struct MedicalAnalysis {
    pub image_type: String,
    pub format: String,
    pub anonymized: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct XrayAnalysis {
    pub image_type: String,
    pub orientation: String,
    pub pneumonia_detection: PneumoniaDetection,
}

#[derive(Debug, Clone, Serialize)]
pub struct PneumoniaDetection {
    pub confidence: f64,
    pub prediction: String,
    pub model_version: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TrafficAnalysis {
    pub image_type: String,
    pub detected_objects: Vec<DetectedObject>,
    pub gps_coordinates: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DetectedObject {
    #[serde(rename = "type")]
    pub object_type: String,
    pub count: u32,
    pub confidence: f64,
}

/// Record returned for one accepted file of an upload batch. Nothing is
/// persisted; the id is minted fresh on every call.
#[derive(Debug, Clone, Serialize)]
pub struct UploadRecord {
    pub upload_id: String,
    pub original_filename: String,
    pub stored_filename: String,
    pub category: UploadCategory,
    pub file_size: u64,
    pub processing_status: String,
    pub analysis_results: AnalysisResults,
}

#[derive(Debug, Serialize)]
pub struct BatchUploadResponse {
    pub message: String,
    pub uploads: Vec<UploadRecord>,
}

/// Record for one frame of a traffic sequence upload: numbered by position
/// and stored under the batch-wide sequence id.
#[derive(Debug, Clone, Serialize)]
pub struct SequenceFrameRecord {
    pub upload_id: String,
    pub sequence_id: String,
    pub frame_number: u64,
    pub original_filename: String,
    pub stored_filename: String,
    pub category: String,
    pub file_size: u64,
    pub processing_status: String,
}

#[derive(Debug, Serialize)]
pub struct SequenceUploadResponse {
    pub message: String,
    pub sequence_id: String,
    pub uploads: Vec<SequenceFrameRecord>,
}

/// Fabricated per-file result of the standalone x-ray analyze endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct XrayFileAnalysis {
    pub pneumonia_probability: f64,
    pub normal_probability: f64,
    pub confidence_score: f64,
    pub model_prediction: String,
    pub processing_time_ms: u32,
}

impl Default for XrayFileAnalysis {
    fn default() -> Self {
        Self {
            pneumonia_probability: 0.15,
            normal_probability: 0.85,
            confidence_score: 0.92,
            model_prediction: "Normal".to_string(),
            processing_time_ms: 1250,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct XrayAnalyzeResult {
    pub upload_id: String,
    pub filename: String,
    pub analysis: XrayFileAnalysis,
}

#[derive(Debug, Serialize)]
pub struct XrayAnalyzeResponse {
    pub message: String,
    pub results: Vec<XrayAnalyzeResult>,
}
