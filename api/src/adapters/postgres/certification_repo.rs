//! PostgreSQL adapter for CertificationRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use uuid::Uuid;

use crate::domain::entities::{Certification, CertificationId, NewCertification};
use crate::domain::ports::CertificationRepository;
use crate::entity::certifications;
use crate::error::DomainError;

/// PostgreSQL implementation of CertificationRepository
pub struct PostgresCertificationRepository {
    db: DatabaseConnection,
}

impl PostgresCertificationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CertificationRepository for PostgresCertificationRepository {
    async fn list(
        &self,
        issuer: Option<&str>,
        limit: Option<u64>,
    ) -> Result<Vec<Certification>, DomainError> {
        let mut query = certifications::Entity::find()
            .order_by_desc(certifications::Column::DateIssued);

        if let Some(issuer) = issuer {
            query = query.filter(certifications::Column::Issuer.eq(issuer));
        }

        if let Some(limit) = limit {
            query = query.limit(limit);
        }

        let results = query
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn create(&self, cert: &NewCertification) -> Result<Certification, DomainError> {
        let id = Uuid::new_v4();
        let now = Utc::now().fixed_offset();

        let model = certifications::ActiveModel {
            id: Set(id),
            title: Set(cert.title.clone()),
            description: Set(cert.description.clone()),
            image: Set(cert.image.clone()),
            issuer: Set(cert.issuer.clone()),
            date_issued: Set(cert.date_issued),
            credential_id: Set(cert.credential_id.clone()),
            credential_url: Set(cert.credential_url.clone()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.into())
    }
}

/// Convert SeaORM model to domain entity
impl From<certifications::Model> for Certification {
    fn from(model: certifications::Model) -> Self {
        Certification {
            id: CertificationId(model.id),
            title: model.title,
            description: model.description,
            image: model.image,
            issuer: model.issuer,
            date_issued: model.date_issued,
            credential_id: model.credential_id,
            credential_url: model.credential_url,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}
