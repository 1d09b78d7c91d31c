//! Document upload, metadata, download, list, and delete handlers.

use axum::Json;
use axum::body::Body;
use axum::extract::{Multipart, Path, State};
use axum::http::{StatusCode, header};
use axum::response::Response;
use bytes::Bytes;
use uuid::Uuid;
use validator::Validate;

use crm_core::error::AppError;
use crm_service::document::UploadParams;

use crate::dto::request::UploadForm;
use crate::dto::response::DocumentResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/documents (multipart/form-data)
///
/// Expects a `file` part plus `customer_id`, `uploaded_by_user_id`,
/// `access_level`, and an optional `metadata` part carrying a JSON object.
pub async fn upload(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<DocumentResponse>), ApiError> {
    let (form, filename, data) = read_upload_parts(multipart).await?;

    form.validate()
        .map_err(|e| AppError::validation(format!("Invalid upload form: {e}")))?;

    let doc = state
        .document_service
        .upload(UploadParams {
            customer_id: form.customer_id,
            uploaded_by_user_id: form.uploaded_by_user_id,
            filename,
            data,
            access_level: form.access_level,
            metadata: form.metadata,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(doc.into())))
}

/// GET /api/documents/{id}
pub async fn get_metadata(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DocumentResponse>, ApiError> {
    let doc = state.document_service.get_metadata(id).await?;
    Ok(Json(doc.into()))
}

/// GET /api/customers/{id}/documents
pub async fn list_for_customer(
    State(state): State<AppState>,
    Path(customer_id): Path<Uuid>,
) -> Result<Json<Vec<DocumentResponse>>, ApiError> {
    let docs = state.document_service.list_for_customer(customer_id).await?;
    Ok(Json(docs.into_iter().map(Into::into).collect()))
}

/// GET /api/documents/{id}/download
pub async fn download(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, ApiError> {
    let result = state.document_service.download(id).await?;

    let response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, result.mime_type)
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", result.filename),
        )
        .header(header::CONTENT_LENGTH, result.data.len())
        .body(Body::from(result.data))
        .map_err(|e| AppError::internal(format!("Response build failed: {e}")))?;
    Ok(response)
}

/// DELETE /api/documents/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.document_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Drain the multipart stream into the upload form, filename, and bytes.
async fn read_upload_parts(mut multipart: Multipart) -> Result<(UploadForm, String, Bytes), AppError> {
    let mut customer_id = None;
    let mut uploaded_by_user_id = None;
    let mut access_level = None;
    let mut metadata = None;
    let mut file: Option<(String, Bytes)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Malformed multipart body: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                let filename = field
                    .file_name()
                    .ok_or_else(|| AppError::validation("file part must carry a filename"))?
                    .to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::validation(format!("Failed to read uploaded file: {e}")))?;
                file = Some((filename, data));
            }
            "customer_id" => customer_id = Some(parse_uuid_field(&name, field).await?),
            "uploaded_by_user_id" => {
                uploaded_by_user_id = Some(parse_uuid_field(&name, field).await?)
            }
            "access_level" => access_level = Some(text_field(&name, field).await?),
            "metadata" => {
                let raw = text_field(&name, field).await?;
                let value: serde_json::Value = serde_json::from_str(&raw)
                    .map_err(|_| AppError::validation("metadata must be valid JSON"))?;
                metadata = Some(value);
            }
            _ => {} // unknown parts are ignored
        }
    }

    let (filename, data) =
        file.ok_or_else(|| AppError::validation("file part is required"))?;
    let form = UploadForm {
        customer_id: customer_id
            .ok_or_else(|| AppError::validation("customer_id part is required"))?,
        uploaded_by_user_id: uploaded_by_user_id
            .ok_or_else(|| AppError::validation("uploaded_by_user_id part is required"))?,
        access_level: access_level
            .ok_or_else(|| AppError::validation("access_level part is required"))?,
        metadata,
    };

    Ok((form, filename, data))
}

async fn text_field(name: &str, field: axum::extract::multipart::Field<'_>) -> Result<String, AppError> {
    field
        .text()
        .await
        .map_err(|e| AppError::validation(format!("Failed to read '{name}' part: {e}")))
}

async fn parse_uuid_field(
    name: &str,
    field: axum::extract::multipart::Field<'_>,
) -> Result<Uuid, AppError> {
    let raw = text_field(name, field).await?;
    raw.parse::<Uuid>()
        .map_err(|_| AppError::validation(format!("'{name}' must be a valid UUID")))
}
