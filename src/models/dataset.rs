use serde::Serialize;

/// Category descriptor of a dataset summary: the medical set lists its class
/// names, the object-recognition set only advertises a class count.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum CategoryField {
    Names(Vec<String>),
    Count(u32),
}

/// One entry of the top-level catalog listing. Fields that do not apply to a
/// dataset are omitted from the JSON entirely.
#[derive(Debug, Clone, Serialize)]
pub struct DatasetSummary {
    pub id: String,
    pub name: String,
    pub source_type: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_images: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_sequences: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<CategoryField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_types: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
pub struct DatasetListResponse {
    pub datasets: Vec<DatasetSummary>,
}

/// Slice of a distribution chart in a statistics payload.
#[derive(Debug, Clone, Serialize)]
pub struct DistributionSlice {
    pub name: String,
    pub value: u64,
    pub color: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChestXraySample {
    pub id: String,
    pub filename: String,
    pub category: String,
    pub file_size: u64,
    pub width: u32,
    pub height: u32,
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct ChestXraySamplesResponse {
    pub samples: Vec<ChestXraySample>,
    pub total: u64,
    pub limit: usize,
    pub offset: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryCount {
    pub name: String,
    pub count: u64,
    pub percentage: f64,
}

#[derive(Debug, Serialize)]
pub struct ChestXrayCategoriesResponse {
    pub categories: Vec<CategoryCount>,
}

#[derive(Debug, Serialize)]
pub struct ChestXrayStatistics {
    pub total_images: u64,
    pub normal_cases: u64,
    pub pneumonia_cases: u64,
    pub image_format: String,
    pub source: String,
    pub quality_control: String,
    pub distribution: Vec<DistributionSlice>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ImageNetClass {
    pub id: String,
    pub name: String,
    pub wordnet_id: String,
    pub sample_count: u32,
}

#[derive(Debug, Serialize)]
pub struct ImageNetClassesResponse {
    pub classes: Vec<ImageNetClass>,
    pub total: u32,
    pub limit: usize,
    pub offset: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ImageNetSample {
    pub id: String,
    pub filename: String,
    pub class_id: String,
    pub width: u32,
    pub height: u32,
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct ImageNetSamplesResponse {
    pub samples: Vec<ImageNetSample>,
    pub class_id: String,
    pub total_per_class: u32,
    pub limit: usize,
}

#[derive(Debug, Serialize)]
pub struct ImageNetStatistics {
    pub total_images: u64,
    pub total_classes: u32,
    pub image_size: String,
    pub color_channels: u32,
    pub training_images: u64,
    pub validation_images: u64,
    pub test_images: u64,
    pub images_per_class: u32,
    pub distribution: Vec<DistributionSlice>,
}

#[derive(Debug, Clone, Serialize)]
pub struct KittiSequence {
    pub id: String,
    pub name: String,
    pub location: String,
    pub scenario: String,
    pub frame_count: u32,
    pub duration_seconds: u32,
}

#[derive(Debug, Serialize)]
pub struct KittiSequencesResponse {
    pub sequences: Vec<KittiSequence>,
    pub total: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct KittiDataType {
    #[serde(rename = "type")]
    pub data_type: String,
    pub description: String,
}

/// Synthesized detail for a single drive sequence. Unlike the sequence list,
/// the advertised frame count and duration here are fixed for every id.
#[derive(Debug, Serialize)]
pub struct KittiSequenceDetail {
    pub id: String,
    pub name: String,
    pub location: String,
    pub scenario: String,
    pub frame_count: u32,
    pub duration_seconds: f64,
    pub sensors: Vec<String>,
    pub data_types: Vec<KittiDataType>,
}

#[derive(Debug, Clone, Serialize)]
pub struct KittiFrame {
    pub id: String,
    pub sequence_id: String,
    pub frame_number: u64,
    pub timestamp: f64,
    pub camera_url: String,
    pub lidar_url: String,
}

#[derive(Debug, Serialize)]
pub struct KittiFramesResponse {
    pub frames: Vec<KittiFrame>,
    pub sequence_id: String,
    pub total: u32,
    pub limit: usize,
    pub offset: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_omits_absent_fields() {
        let summary = DatasetSummary {
            id: "kitti".to_string(),
            name: "KITTI Dataset".to_string(),
            source_type: "kitti".to_string(),
            description: "Autonomous driving and computer vision".to_string(),
            total_images: None,
            total_sequences: Some("Multiple".to_string()),
            categories: None,
            data_types: Some(vec!["Camera".to_string(), "LIDAR".to_string()]),
        };

        let json = serde_json::to_value(&summary).unwrap();
        assert!(json.get("total_images").is_none());
        assert!(json.get("categories").is_none());
        assert_eq!(json["total_sequences"], "Multiple");
    }

    #[test]
    fn test_category_field_serializes_untagged() {
        let names = CategoryField::Names(vec!["Normal".to_string(), "Pneumonia".to_string()]);
        assert_eq!(
            serde_json::to_value(&names).unwrap(),
            serde_json::json!(["Normal", "Pneumonia"])
        );

        let count = CategoryField::Count(200);
        assert_eq!(serde_json::to_value(&count).unwrap(), serde_json::json!(200));
    }

    #[test]
    fn test_data_type_renames_keyword_field() {
        let dt = KittiDataType {
            data_type: "Camera Images".to_string(),
            description: "Stereo & Color".to_string(),
        };
        let json = serde_json::to_value(&dt).unwrap();
        assert_eq!(json["type"], "Camera Images");
    }
}
