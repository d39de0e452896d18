use crate::app_state::AppState;
use crate::pricelist_response::{DeleteResponse, UploadResponse};
use anyhow::{anyhow, Context, Result};
use axum::{
    extract::{FromRequest, Multipart, Request, State},
    http::header,
    Form, Json,
};
use serde::Deserialize;

const FALLBACK_FILENAME: &str = "pricelist.pdf";

#[derive(Debug, Deserialize)]
pub struct DeletePricelistForm {
    #[serde(default)]
    pub site_url: String,
}

/// Saves the uploaded file, extracts its text and stores it for the site.
pub async fn upload_pricelist(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Json<UploadResponse> {
    match store_upload(&state, multipart).await {
        Ok(response) => Json(response),
        Err(e) => {
            log::warn!("Price list upload failed: {:#}", e);
            Json(UploadResponse::failed(format!("{:#}", e)))
        }
    }
}

async fn store_upload(state: &AppState, mut multipart: Multipart) -> Result<UploadResponse> {
    let mut file: Option<(String, Vec<u8>)> = None;
    let mut site_url: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .context("malformed multipart body")?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let bytes = field.bytes().await.context("failed to read uploaded file")?;
                file = Some((filename, bytes.to_vec()));
            }
            Some("site_url") => {
                site_url = Some(field.text().await.context("failed to read site_url")?);
            }
            _ => {}
        }
    }

    let (filename, bytes) = file.ok_or_else(|| anyhow!("missing file field"))?;
    let site_url = site_url
        .filter(|url| !url.is_empty())
        .ok_or_else(|| anyhow!("missing site_url field"))?;

    tokio::fs::create_dir_all(&state.upload_dir)
        .await
        .with_context(|| format!("failed to create {}", state.upload_dir.display()))?;
    let path = state.upload_dir.join(stored_file_name(&filename));
    tokio::fs::write(&path, &bytes)
        .await
        .with_context(|| format!("failed to save {}", path.display()))?;
    log::info!(
        "Saved price list {} for {} ({} bytes)",
        path.display(),
        site_url,
        bytes.len()
    );

    // Extract from the received bytes, not the saved file: another upload
    // with the same file name may overwrite it in the meantime.
    let text = state.processor.extract_bytes(bytes).await?;
    let text_length = text.chars().count();
    state.store.put(&site_url, text).await;

    Ok(UploadResponse::stored(filename, text_length))
}

/// Final path component of a client supplied file name, so an upload can
/// never be written outside the upload directory.
fn stored_file_name(filename: &str) -> &str {
    match filename.rsplit(['/', '\\']).next() {
        Some(name) if !name.is_empty() && name != "." && name != ".." => name,
        _ => FALLBACK_FILENAME,
    }
}

/// Accepts the site URL as an urlencoded or a multipart form. A request
/// without one deletes nothing and still succeeds.
pub async fn delete_pricelist(
    State(state): State<AppState>,
    request: Request,
) -> Json<DeleteResponse> {
    if let Some(site_url) = site_url_from_form(request).await {
        state.store.delete(&site_url).await;
    }
    Json(DeleteResponse::deleted())
}

async fn site_url_from_form(request: Request) -> Option<String> {
    let is_multipart = request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_ascii_lowercase().starts_with("multipart/form-data"))
        .unwrap_or(false);

    if is_multipart {
        let mut multipart = Multipart::from_request(request, &()).await.ok()?;
        while let Ok(Some(field)) = multipart.next_field().await {
            if field.name() == Some("site_url") {
                return field.text().await.ok();
            }
        }
        None
    } else {
        let Form(form) = Form::<DeletePricelistForm>::from_request(request, &())
            .await
            .ok()?;
        Some(form.site_url)
    }
}
