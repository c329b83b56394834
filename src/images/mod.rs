use axum::extract::Path;
use axum::http::header;
use axum::response::{IntoResponse, Response};

use crate::AppState;

pub fn routes() -> axum::Router<AppState> {
    axum::Router::new()
        .route("/chest-xray/:image_id", axum::routing::get(chest_xray_image))
        .route(
            "/tiny-imagenet/:class_id/:image_id",
            axum::routing::get(tiny_imagenet_image),
        )
        .route(
            "/kitti/:sequence_id/:frame_id",
            axum::routing::get(kitti_image),
        )
        .route(
            "/upload/:category/:upload_id",
            axum::routing::get(uploaded_image),
        )
}

/// Placeholder image standing in for real dataset content: a light-gray
/// rectangle with the label centered. Pure, so identical inputs always
/// produce byte-identical documents.
pub fn placeholder_svg(width: u32, height: u32, label: &str) -> String {
    format!(
        r##"<svg width="{}" height="{}" xmlns="http://www.w3.org/2000/svg">
    <rect width="100%" height="100%" fill="#f0f0f0"/>
    <text x="50%" y="50%" font-family="Arial, sans-serif" font-size="16" fill="#666" text-anchor="middle" dy=".3em">{}</text>
</svg>"##,
        width, height, label
    )
}

/// GET /images/chest-xray/:image_id
async fn chest_xray_image(Path(image_id): Path<String>) -> Response {
    svg_response(placeholder_svg(
        512,
        512,
        &format!("Chest X-ray\n{}", image_id),
    ))
}

/// GET /images/tiny-imagenet/:class_id/:image_id
async fn tiny_imagenet_image(Path((class_id, _image_id)): Path<(String, String)>) -> Response {
    svg_response(placeholder_svg(64, 64, &format!("TinyImageNet\n{}", class_id)))
}

/// GET /images/kitti/:sequence_id/:frame_id
/// Camera frames get the wide stereo aspect, everything else a generic canvas
async fn kitti_image(Path((sequence_id, frame_id)): Path<(String, String)>) -> Response {
    let svg = if frame_id.contains("camera") {
        placeholder_svg(
            1242,
            375,
            &format!("KITTI Camera\n{}\n{}", sequence_id, frame_id),
        )
    } else if frame_id.contains("lidar") {
        placeholder_svg(
            600,
            400,
            &format!("KITTI LIDAR\n{}\n{}", sequence_id, frame_id),
        )
    } else {
        placeholder_svg(
            600,
            400,
            &format!("KITTI Data\n{}\n{}", sequence_id, frame_id),
        )
    };

    svg_response(svg)
}

/// GET /images/upload/:category/:upload_id
async fn uploaded_image(Path((category, upload_id)): Path<(String, String)>) -> Response {
    svg_response(placeholder_svg(
        400,
        400,
        &format!("Uploaded {}\n{}", title_case(&category), upload_id),
    ))
}

fn svg_response(svg: String) -> Response {
    ([(header::CONTENT_TYPE, "image/svg+xml")], svg).into_response()
}

/// Uppercase each letter that starts an alphabetic run, lowercase the rest.
/// "traffic_sequence" becomes "Traffic_Sequence".
fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut prev_alpha = false;
    for c in input.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_svg_is_deterministic() {
        let first = placeholder_svg(512, 512, "Chest X-ray\nchest_xray_1");
        let second = placeholder_svg(512, 512, "Chest X-ray\nchest_xray_1");
        assert_eq!(first.as_bytes(), second.as_bytes());
    }

    #[test]
    fn test_placeholder_svg_embeds_inputs() {
        let svg = placeholder_svg(64, 64, "TinyImageNet\nn00000001");
        assert!(svg.starts_with(r#"<svg width="64" height="64""#));
        assert!(svg.contains(r##"fill="#f0f0f0""##));
        assert!(svg.contains("TinyImageNet\nn00000001"));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("medical"), "Medical");
        assert_eq!(title_case("traffic_sequence"), "Traffic_Sequence");
        assert_eq!(title_case("xray"), "Xray");
        assert_eq!(title_case("XRAY"), "Xray");
        assert_eq!(title_case(""), "");
    }

    #[tokio::test]
    async fn test_chest_xray_image_content_type() {
        let response = chest_xray_image(Path("chest_xray_1".to_string())).await;
        assert_eq!(response.status(), axum::http::StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "image/svg+xml"
        );

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let svg = String::from_utf8(body.to_vec()).unwrap();
        assert!(svg.contains(r#"width="512""#));
        assert!(svg.contains("Chest X-ray\nchest_xray_1"));
    }

    #[tokio::test]
    async fn test_kitti_image_picks_dimensions_by_frame_kind() {
        let camera = kitti_image(Path((
            "sequence_00".to_string(),
            "camera_000001".to_string(),
        )))
        .await;
        let body = axum::body::to_bytes(camera.into_body(), usize::MAX)
            .await
            .unwrap();
        let svg = String::from_utf8(body.to_vec()).unwrap();
        assert!(svg.contains(r#"width="1242" height="375""#));
        assert!(svg.contains("KITTI Camera\nsequence_00\ncamera_000001"));

        let lidar = kitti_image(Path((
            "sequence_00".to_string(),
            "lidar_000001".to_string(),
        )))
        .await;
        let body = axum::body::to_bytes(lidar.into_body(), usize::MAX)
            .await
            .unwrap();
        let svg = String::from_utf8(body.to_vec()).unwrap();
        assert!(svg.contains(r#"width="600" height="400""#));
        assert!(svg.contains("KITTI LIDAR"));

        let other = kitti_image(Path(("sequence_00".to_string(), "oddball".to_string()))).await;
        let body = axum::body::to_bytes(other.into_body(), usize::MAX)
            .await
            .unwrap();
        let svg = String::from_utf8(body.to_vec()).unwrap();
        assert!(svg.contains("KITTI Data\nsequence_00\noddball"));
    }

    #[tokio::test]
    async fn test_uploaded_image_title_cases_category() {
        let response = uploaded_image(Path(("traffic".to_string(), "abc123".to_string()))).await;
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let svg = String::from_utf8(body.to_vec()).unwrap();
        assert!(svg.contains("Uploaded Traffic\nabc123"));
        assert!(svg.contains(r#"width="400" height="400""#));
    }
}
