//! Contact handlers
//!
//! Public contact form and the admin inbox.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Pagination;
use crate::domain::entities::{ContactMessage, ContactMessageId, NewContactMessage};
use crate::error::AppError;
use crate::AppState;

/// One contact message on the wire
#[derive(Debug, Serialize)]
pub struct ContactMessageResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<ContactMessage> for ContactMessageResponse {
    fn from(message: ContactMessage) -> Self {
        Self {
            id: message.id.to_string(),
            name: message.name,
            email: message.email,
            subject: message.subject,
            message: message.message,
            status: message.status.to_string(),
            created_at: message.created_at.to_rfc3339(),
            updated_at: message.updated_at.to_rfc3339(),
        }
    }
}

/// Request body for the contact form
#[derive(Debug, Deserialize)]
pub struct SubmitContactRequest {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Response for a contact submission
#[derive(Debug, Serialize)]
pub struct SubmitContactResponse {
    pub message: String,
    pub data: ContactMessageResponse,
}

/// POST /contact
pub async fn submit_contact(
    State(state): State<AppState>,
    Json(request): Json<SubmitContactRequest>,
) -> Result<(StatusCode, Json<SubmitContactResponse>), AppError> {
    let message = state
        .contact_service
        .submit(NewContactMessage {
            name: request.name,
            email: request.email,
            subject: request.subject,
            message: request.message,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(SubmitContactResponse {
            message: "Contact message sent successfully".to_string(),
            data: message.into(),
        }),
    ))
}

/// Query parameters for the admin inbox
#[derive(Debug, Deserialize)]
pub struct ListContactQuery {
    pub status: Option<String>,
    #[serde(default = "default_limit")]
    pub limit: u64,
    #[serde(default = "default_page")]
    pub page: u64,
}

fn default_limit() -> u64 {
    10
}

fn default_page() -> u64 {
    1
}

/// Response for the admin inbox
#[derive(Debug, Serialize)]
pub struct ListContactResponse {
    pub messages: Vec<ContactMessageResponse>,
    pub pagination: Pagination,
}

/// GET /admin/contact-messages
pub async fn list_contact_messages(
    State(state): State<AppState>,
    Query(query): Query<ListContactQuery>,
) -> Result<Json<ListContactResponse>, AppError> {
    let status = query
        .status
        .as_deref()
        .map(|s| {
            s.parse()
                .map_err(|_| AppError::BadRequest(format!("Invalid status: {}", s)))
        })
        .transpose()?;

    let page_size = query.limit.clamp(1, 100);
    let (messages, total) = state
        .contact_service
        .list(status, query.page, page_size)
        .await?;

    Ok(Json(ListContactResponse {
        messages: messages.into_iter().map(Into::into).collect(),
        pagination: Pagination::new(query.page.max(1), page_size, total),
    }))
}

/// Request to change a message's triage status
#[derive(Debug, Deserialize)]
pub struct UpdateContactStatusRequest {
    pub status: String,
}

/// Response wrapping a single contact message
#[derive(Debug, Serialize)]
pub struct ContactMessageEnvelope {
    pub data: ContactMessageResponse,
}

/// PATCH /admin/contact-messages/:id
pub async fn update_contact_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateContactStatusRequest>,
) -> Result<Json<ContactMessageEnvelope>, AppError> {
    let status = request
        .status
        .parse()
        .map_err(|_| AppError::BadRequest(format!("Invalid status: {}", request.status)))?;

    let message = state
        .contact_service
        .update_status(&ContactMessageId(id), status)
        .await?;

    Ok(Json(ContactMessageEnvelope {
        data: message.into(),
    }))
}
