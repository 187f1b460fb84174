//! Image upload helpers shared by the admin forms.

use contracts::shared::api::UploadResponse;
use gloo_net::http::Request;
use web_sys::FormData;

use crate::shared::api_utils::{api_url, error_from_response};
use crate::system::auth::storage::auth_header;

/// Upload size cap enforced before any network call. Matches the backend limit.
pub const MAX_IMAGE_BYTES: f64 = 10.0 * 1024.0 * 1024.0;

/// Checks a file against the upload rules: image content type, at most 10MB.
pub fn validate_image_file(name: &str, content_type: &str, size: f64) -> Result<(), String> {
    if !content_type.starts_with("image/") {
        return Err(format!("{} is not an image file", name));
    }
    if size > MAX_IMAGE_BYTES {
        return Err(format!("{} is too large (max 10MB)", name));
    }
    Ok(())
}

/// Uploads a file to the media endpoint and returns the stored URL.
/// Fails before sending anything when the file breaks the upload rules.
pub async fn upload_image(file: &web_sys::File) -> Result<String, String> {
    validate_image_file(&file.name(), &file.type_(), file.size())?;

    let auth_header = auth_header()?;

    let form = FormData::new().map_err(|_| "Failed to build upload form".to_string())?;
    form.append_with_blob("file", file)
        .map_err(|_| "Failed to build upload form".to_string())?;

    let resp = Request::post(&api_url("/api/upload"))
        .header("Authorization", &auth_header)
        .body(form)
        .map_err(|e| format!("Network error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if resp.ok() {
        let parsed: UploadResponse = resp
            .json()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))?;
        Ok(parsed.url)
    } else {
        Err(error_from_response(resp).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_small_image() {
        assert!(validate_image_file("photo.jpg", "image/jpeg", 512.0 * 1024.0).is_ok());
    }

    #[test]
    fn test_rejects_non_image_type() {
        let err = validate_image_file("notes.pdf", "application/pdf", 1024.0).unwrap_err();
        assert_eq!(err, "notes.pdf is not an image file");
    }

    #[test]
    fn test_rejects_oversized_image() {
        let err =
            validate_image_file("huge.png", "image/png", MAX_IMAGE_BYTES + 1.0).unwrap_err();
        assert_eq!(err, "huge.png is too large (max 10MB)");
    }

    #[test]
    fn test_accepts_exactly_ten_megabytes() {
        assert!(validate_image_file("edge.png", "image/png", MAX_IMAGE_BYTES).is_ok());
    }
}
