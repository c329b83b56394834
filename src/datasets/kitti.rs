use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;

use crate::models::{
    KittiDataType, KittiFrame, KittiFramesResponse, KittiSequence, KittiSequenceDetail,
    KittiSequencesResponse,
};
use crate::AppState;

const SEQUENCE_COUNT: u32 = 21;

/// Frame total reported for every sequence, whatever its listed frame_count.
const FRAMES_TOTAL: u32 = 465;

#[derive(Debug, Deserialize)]
pub struct FrameQuery {
    #[serde(default = "default_frame_limit")]
    pub limit: usize,
    #[serde(default)]
    pub offset: usize,
}

fn default_frame_limit() -> usize {
    20
}

/// GET /datasets/kitti/sequences
pub async fn sequences() -> Json<KittiSequencesResponse> {
    Json(sequence_list())
}

/// GET /datasets/kitti/sequence/:sequence_id
/// Synthesized detail; the same payload comes back for any id
pub async fn sequence_detail(Path(sequence_id): Path<String>) -> Json<KittiSequenceDetail> {
    Json(sequence_info(&sequence_id))
}

/// GET /datasets/kitti/frames/:sequence_id
pub async fn frames(
    State(state): State<AppState>,
    Path(sequence_id): Path<String>,
    Query(query): Query<FrameQuery>,
) -> Json<KittiFramesResponse> {
    Json(frame_page(
        &state.settings.api_prefix,
        &sequence_id,
        query.limit,
        query.offset,
    ))
}

fn sequence_list() -> KittiSequencesResponse {
    let sequences = (0..SEQUENCE_COUNT)
        .map(|i| KittiSequence {
            id: format!("sequence_{:02}", i),
            name: format!("Drive Sequence {:02}", i),
            location: "Karlsruhe, Germany".to_string(),
            scenario: if i % 2 == 0 { "Urban" } else { "Highway" }.to_string(),
            frame_count: 400 + i * 50,
            duration_seconds: 40 + i * 5,
        })
        .collect();

    KittiSequencesResponse {
        sequences,
        total: SEQUENCE_COUNT,
    }
}

fn sequence_info(sequence_id: &str) -> KittiSequenceDetail {
    KittiSequenceDetail {
        id: sequence_id.to_string(),
        name: format!("Drive {}", sequence_id),
        location: "Karlsruhe, Germany".to_string(),
        scenario: "Urban".to_string(),
        frame_count: FRAMES_TOTAL,
        duration_seconds: 46.5,
        sensors: vec![
            "Camera".to_string(),
            "LIDAR".to_string(),
            "GPS".to_string(),
            "IMU".to_string(),
        ],
        data_types: vec![
            KittiDataType {
                data_type: "Camera Images".to_string(),
                description: "Stereo & Color".to_string(),
            },
            KittiDataType {
                data_type: "LIDAR Data".to_string(),
                description: "3D Point Clouds".to_string(),
            },
            KittiDataType {
                data_type: "GPS/IMU".to_string(),
                description: "Position & Orientation".to_string(),
            },
            KittiDataType {
                data_type: "Calibration".to_string(),
                description: "Camera Parameters".to_string(),
            },
        ],
    }
}

fn frame_page(
    api_prefix: &str,
    sequence_id: &str,
    limit: usize,
    offset: usize,
) -> KittiFramesResponse {
    let frames = (0..limit)
        .map(|i| {
            let n = (offset + i) as u64;
            KittiFrame {
                id: format!("{}_frame_{:06}", sequence_id, n),
                sequence_id: sequence_id.to_string(),
                frame_number: n,
                timestamp: n as f64 * 0.1,
                camera_url: format!("{}/images/kitti/{}/camera_{:06}", api_prefix, sequence_id, n),
                lidar_url: format!("{}/images/kitti/{}/lidar_{:06}", api_prefix, sequence_id, n),
            }
        })
        .collect();

    KittiFramesResponse {
        frames,
        sequence_id: sequence_id.to_string(),
        total: FRAMES_TOTAL,
        limit,
        offset,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_formulas() {
        let list = sequence_list();
        assert_eq!(list.total, 21);
        assert_eq!(list.sequences.len(), 21);

        for (i, seq) in list.sequences.iter().enumerate() {
            let i = i as u32;
            assert_eq!(seq.frame_count, 400 + 50 * i);
            assert_eq!(seq.duration_seconds, 40 + 5 * i);
            let expected = if i % 2 == 0 { "Urban" } else { "Highway" };
            assert_eq!(seq.scenario, expected);
        }
    }

    #[test]
    fn test_sequence_ids_are_zero_padded() {
        let list = sequence_list();
        assert_eq!(list.sequences[0].id, "sequence_00");
        assert_eq!(list.sequences[7].name, "Drive Sequence 07");
        assert_eq!(list.sequences[20].id, "sequence_20");
        assert_eq!(list.sequences[20].frame_count, 1400);
        assert_eq!(list.sequences[20].duration_seconds, 140);
    }

    #[test]
    fn test_sequence_detail_is_fixed_for_any_id() {
        let detail = sequence_info("sequence_99");
        assert_eq!(detail.name, "Drive sequence_99");
        assert_eq!(detail.frame_count, 465);
        assert_eq!(detail.duration_seconds, 46.5);
        assert_eq!(detail.sensors.len(), 4);
        assert_eq!(detail.data_types.len(), 4);
        assert_eq!(detail.data_types[0].data_type, "Camera Images");
    }

    #[test]
    fn test_frame_page_numbering() {
        let page = frame_page("/api/v1", "sequence_03", 3, 10);
        assert_eq!(page.frames.len(), 3);
        assert_eq!(page.frames[0].id, "sequence_03_frame_000010");
        assert_eq!(page.frames[0].frame_number, 10);
        assert!((page.frames[0].timestamp - 1.0).abs() < 1e-9);
        assert_eq!(page.frames[2].frame_number, 12);
        assert_eq!(
            page.frames[1].camera_url,
            "/api/v1/images/kitti/sequence_03/camera_000011"
        );
        assert_eq!(
            page.frames[1].lidar_url,
            "/api/v1/images/kitti/sequence_03/lidar_000011"
        );
    }

    #[test]
    fn test_frame_total_fixed_regardless_of_sequence() {
        assert_eq!(frame_page("/api/v1", "sequence_00", 1, 0).total, 465);
        assert_eq!(frame_page("/api/v1", "sequence_20", 1, 0).total, 465);
        assert_eq!(frame_page("/api/v1", "not_a_sequence", 1, 0).total, 465);
    }
}
