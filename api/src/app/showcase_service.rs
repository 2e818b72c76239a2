//! Showcase service
//!
//! Portfolio projects and certifications shown on the marketing pages.

use std::sync::Arc;

use crate::domain::entities::{
    Certification, NewCertification, NewShowcaseProject, ProjectCategory, ShowcaseProject,
    ShowcaseProjectId, ShowcaseProjectUpdate,
};
use crate::domain::ports::{CertificationRepository, ShowcaseProjectRepository};
use crate::error::AppError;

/// Service for showcase content
pub struct ShowcaseService<PR, CR>
where
    PR: ShowcaseProjectRepository,
    CR: CertificationRepository,
{
    projects: Arc<PR>,
    certifications: Arc<CR>,
}

impl<PR, CR> ShowcaseService<PR, CR>
where
    PR: ShowcaseProjectRepository,
    CR: CertificationRepository,
{
    pub fn new(projects: Arc<PR>, certifications: Arc<CR>) -> Self {
        Self {
            projects,
            certifications,
        }
    }

    pub async fn list_projects(
        &self,
        category: Option<ProjectCategory>,
        limit: Option<u64>,
    ) -> Result<Vec<ShowcaseProject>, AppError> {
        Ok(self.projects.list(category, limit).await?)
    }

    pub async fn get_project(
        &self,
        id: &ShowcaseProjectId,
    ) -> Result<ShowcaseProject, AppError> {
        self.projects
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Project {} not found", id)))
    }

    pub async fn create_project(
        &self,
        project: NewShowcaseProject,
    ) -> Result<ShowcaseProject, AppError> {
        if project.title.is_empty()
            || project.description.is_empty()
            || project.tech.is_empty()
            || project.year.is_empty()
            || project.image.is_empty()
        {
            return Err(AppError::BadRequest("Missing required fields".to_string()));
        }

        Ok(self.projects.create(&project).await?)
    }

    pub async fn update_project(
        &self,
        id: &ShowcaseProjectId,
        update: ShowcaseProjectUpdate,
    ) -> Result<ShowcaseProject, AppError> {
        self.projects
            .update(id, &update)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Project {} not found", id)))
    }

    pub async fn delete_project(&self, id: &ShowcaseProjectId) -> Result<(), AppError> {
        if !self.projects.delete(id).await? {
            return Err(AppError::NotFound(format!("Project {} not found", id)));
        }
        Ok(())
    }

    pub async fn list_certifications(
        &self,
        issuer: Option<&str>,
        limit: Option<u64>,
    ) -> Result<Vec<Certification>, AppError> {
        Ok(self.certifications.list(issuer, limit).await?)
    }

    pub async fn create_certification(
        &self,
        cert: NewCertification,
    ) -> Result<Certification, AppError> {
        if cert.title.is_empty()
            || cert.description.is_empty()
            || cert.image.is_empty()
            || cert.issuer.is_empty()
        {
            return Err(AppError::BadRequest("Missing required fields".to_string()));
        }

        Ok(self.certifications.create(&cert).await?)
    }
}
