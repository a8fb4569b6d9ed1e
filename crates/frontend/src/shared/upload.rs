//! Upload of draft images to the external image host. Slots hold either
//! data-URLs (freshly picked files) or already-hosted https URLs; only the
//! former need uploading before product submission.

const IMAGE_HOST_CLOUD: &str = "catalog-admin";
const IMAGE_HOST_PRESET: &str = "catalog_unsigned";

/// Splits a `data:<mime>;base64,<payload>` URL into mime type and payload.
pub fn split_data_url(data_url: &str) -> Option<(&str, &str)> {
    let rest = data_url.strip_prefix("data:")?;
    let (mime, payload) = rest.split_once(";base64,")?;
    if mime.is_empty() || payload.is_empty() {
        return None;
    }
    Some((mime, payload))
}

pub fn is_data_url(value: &str) -> bool {
    value.starts_with("data:")
}

#[derive(Debug, serde::Deserialize)]
struct UploadReply {
    secure_url: String,
}

/// Uploads one data-URL image; returns the hosted URL, or an empty string
/// on any failure (logged). Empty input is skipped silently.
pub async fn upload_image(image_data: &str) -> String {
    if image_data.is_empty() {
        return String::new();
    }
    if split_data_url(image_data).is_none() {
        log::warn!("upload_image: not a base64 data-URL, skipping");
        return String::new();
    }

    let form = match web_sys::FormData::new() {
        Ok(form) => form,
        Err(_) => return String::new(),
    };
    if form.append_with_str("file", image_data).is_err()
        || form.append_with_str("upload_preset", IMAGE_HOST_PRESET).is_err()
    {
        return String::new();
    }

    let url = format!("https://api.cloudinary.com/v1_1/{IMAGE_HOST_CLOUD}/image/upload");
    let request = match gloo_net::http::Request::post(&url).body(form) {
        Ok(request) => request,
        Err(e) => {
            log::error!("upload_image: failed to build request: {e}");
            return String::new();
        }
    };

    match request.send().await {
        Ok(response) if response.ok() => match response.json::<UploadReply>().await {
            Ok(reply) => reply.secure_url,
            Err(e) => {
                log::error!("upload_image: unexpected host reply: {e}");
                String::new()
            }
        },
        Ok(response) => {
            log::error!("upload_image: host responded with {}", response.status());
            String::new()
        }
        Err(e) => {
            log::error!("upload_image: {e}");
            String::new()
        }
    }
}

/// Resolves every non-empty slot to a hosted URL: data-URLs are uploaded,
/// https URLs pass through, failures drop out.
pub async fn resolve_image_urls(slots: &[String]) -> Vec<String> {
    let mut urls = Vec::new();
    for slot in slots.iter().filter(|s| !s.is_empty()) {
        let url = if is_data_url(slot) {
            upload_image(slot).await
        } else {
            slot.clone()
        };
        if !url.is_empty() {
            urls.push(url);
        }
    }
    urls
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_data_url_splits() {
        let (mime, payload) = split_data_url("data:image/png;base64,iVBORw0KGgo=").unwrap();
        assert_eq!(mime, "image/png");
        assert_eq!(payload, "iVBORw0KGgo=");
    }

    #[test]
    fn non_data_urls_are_rejected() {
        assert!(split_data_url("https://img.example/1.png").is_none());
        assert!(split_data_url("data:image/png,raw-not-base64").is_none());
        assert!(split_data_url("data:;base64,AAAA").is_none());
        assert!(split_data_url("data:image/png;base64,").is_none());
    }

    #[test]
    fn data_url_detection() {
        assert!(is_data_url("data:image/jpeg;base64,AA"));
        assert!(!is_data_url("https://img.example/1.png"));
        assert!(!is_data_url(""));
    }
}
