//! Showcase handlers
//!
//! Portfolio projects and certifications.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::{
    Certification, NewCertification, NewShowcaseProject, ProjectCategory, ShowcaseProject,
    ShowcaseProjectId, ShowcaseProjectUpdate,
};
use crate::error::AppError;
use crate::AppState;

/// Query parameters for listing projects
#[derive(Debug, Deserialize)]
pub struct ListProjectsQuery {
    pub category: Option<String>,
    pub limit: Option<u64>,
}

/// One project on the wire
#[derive(Debug, Serialize)]
pub struct ProjectResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub tech: Vec<String>,
    pub year: String,
    pub image: String,
    pub website: Option<String>,
    pub github: Option<String>,
    pub role: Option<String>,
    pub skills: Vec<String>,
    pub category: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<ShowcaseProject> for ProjectResponse {
    fn from(project: ShowcaseProject) -> Self {
        Self {
            id: project.id.to_string(),
            title: project.title,
            description: project.description,
            tech: project.tech,
            year: project.year,
            image: project.image,
            website: project.website,
            github: project.github,
            role: project.role,
            skills: project.skills,
            category: project.category.to_string(),
            created_at: project.created_at.to_rfc3339(),
            updated_at: project.updated_at.to_rfc3339(),
        }
    }
}

/// Response for the project listing
#[derive(Debug, Serialize)]
pub struct ListProjectsResponse {
    pub projects: Vec<ProjectResponse>,
}

/// GET /projects
pub async fn list_projects(
    State(state): State<AppState>,
    Query(query): Query<ListProjectsQuery>,
) -> Result<Json<ListProjectsResponse>, AppError> {
    let category = parse_category(query.category.as_deref())?;

    let projects = state
        .showcase_service
        .list_projects(category, query.limit)
        .await?;

    Ok(Json(ListProjectsResponse {
        projects: projects.into_iter().map(Into::into).collect(),
    }))
}

/// Response wrapping a single project
#[derive(Debug, Serialize)]
pub struct ProjectEnvelope {
    pub project: ProjectResponse,
}

/// GET /projects/:id
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ProjectEnvelope>, AppError> {
    let project = state
        .showcase_service
        .get_project(&ShowcaseProjectId(id))
        .await?;

    Ok(Json(ProjectEnvelope {
        project: project.into(),
    }))
}

/// Request to create a project
#[derive(Debug, Deserialize)]
pub struct CreateProjectRequest {
    pub title: String,
    pub description: String,
    pub tech: Vec<String>,
    pub year: String,
    pub image: String,
    pub website: Option<String>,
    pub github: Option<String>,
    pub role: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    pub category: String,
}

/// POST /projects
pub async fn create_project(
    State(state): State<AppState>,
    Json(request): Json<CreateProjectRequest>,
) -> Result<(StatusCode, Json<ProjectEnvelope>), AppError> {
    let category = request
        .category
        .parse()
        .map_err(|_| AppError::BadRequest(format!("Invalid category: {}", request.category)))?;

    let project = state
        .showcase_service
        .create_project(NewShowcaseProject {
            title: request.title,
            description: request.description,
            tech: request.tech,
            year: request.year,
            image: request.image,
            website: request.website,
            github: request.github,
            role: request.role,
            skills: request.skills,
            category,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ProjectEnvelope {
            project: project.into(),
        }),
    ))
}

/// Request to update a project
#[derive(Debug, Deserialize)]
pub struct UpdateProjectRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub tech: Option<Vec<String>>,
    pub year: Option<String>,
    pub image: Option<String>,
    pub website: Option<String>,
    pub github: Option<String>,
    pub role: Option<String>,
    pub skills: Option<Vec<String>>,
    pub category: Option<String>,
}

/// PUT /projects/:id
pub async fn update_project(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateProjectRequest>,
) -> Result<Json<ProjectEnvelope>, AppError> {
    let category = parse_category(request.category.as_deref())?;

    let project = state
        .showcase_service
        .update_project(
            &ShowcaseProjectId(id),
            ShowcaseProjectUpdate {
                title: request.title,
                description: request.description,
                tech: request.tech,
                year: request.year,
                image: request.image,
                website: request.website,
                github: request.github,
                role: request.role,
                skills: request.skills,
                category,
            },
        )
        .await?;

    Ok(Json(ProjectEnvelope {
        project: project.into(),
    }))
}

/// Response for deletions
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: String,
}

/// DELETE /projects/:id
pub async fn delete_project(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteResponse>, AppError> {
    state
        .showcase_service
        .delete_project(&ShowcaseProjectId(id))
        .await?;

    Ok(Json(DeleteResponse {
        message: "Project deleted successfully".to_string(),
    }))
}

/// Query parameters for listing certifications
#[derive(Debug, Deserialize)]
pub struct ListCertificationsQuery {
    pub issuer: Option<String>,
    pub limit: Option<u64>,
}

/// One certification on the wire
#[derive(Debug, Serialize)]
pub struct CertificationResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub issuer: String,
    pub date_issued: String,
    pub credential_id: Option<String>,
    pub credential_url: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Certification> for CertificationResponse {
    fn from(cert: Certification) -> Self {
        Self {
            id: cert.id.to_string(),
            title: cert.title,
            description: cert.description,
            image: cert.image,
            issuer: cert.issuer,
            date_issued: cert.date_issued.to_string(),
            credential_id: cert.credential_id,
            credential_url: cert.credential_url,
            created_at: cert.created_at.to_rfc3339(),
            updated_at: cert.updated_at.to_rfc3339(),
        }
    }
}

/// Response for the certification listing
#[derive(Debug, Serialize)]
pub struct ListCertificationsResponse {
    pub certifications: Vec<CertificationResponse>,
}

/// GET /certifications
pub async fn list_certifications(
    State(state): State<AppState>,
    Query(query): Query<ListCertificationsQuery>,
) -> Result<Json<ListCertificationsResponse>, AppError> {
    let certifications = state
        .showcase_service
        .list_certifications(query.issuer.as_deref(), query.limit)
        .await?;

    Ok(Json(ListCertificationsResponse {
        certifications: certifications.into_iter().map(Into::into).collect(),
    }))
}

/// Request to create a certification
#[derive(Debug, Deserialize)]
pub struct CreateCertificationRequest {
    pub title: String,
    pub description: String,
    pub image: String,
    pub issuer: String,
    pub date_issued: NaiveDate,
    pub credential_id: Option<String>,
    pub credential_url: Option<String>,
}

/// Response wrapping a single certification
#[derive(Debug, Serialize)]
pub struct CertificationEnvelope {
    pub certification: CertificationResponse,
}

/// POST /certifications
pub async fn create_certification(
    State(state): State<AppState>,
    Json(request): Json<CreateCertificationRequest>,
) -> Result<(StatusCode, Json<CertificationEnvelope>), AppError> {
    let cert = state
        .showcase_service
        .create_certification(NewCertification {
            title: request.title,
            description: request.description,
            image: request.image,
            issuer: request.issuer,
            date_issued: request.date_issued,
            credential_id: request.credential_id,
            credential_url: request.credential_url,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CertificationEnvelope {
            certification: cert.into(),
        }),
    ))
}

fn parse_category(category: Option<&str>) -> Result<Option<ProjectCategory>, AppError> {
    category
        .map(|c| {
            c.parse()
                .map_err(|_| AppError::BadRequest(format!("Invalid category: {}", c)))
        })
        .transpose()
}
