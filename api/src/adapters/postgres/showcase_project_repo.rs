//! PostgreSQL adapter for ShowcaseProjectRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use uuid::Uuid;

use crate::domain::entities::{
    NewShowcaseProject, ProjectCategory, ShowcaseProject, ShowcaseProjectId, ShowcaseProjectUpdate,
};
use crate::domain::ports::ShowcaseProjectRepository;
use crate::entity::showcase_projects;
use crate::error::DomainError;

/// PostgreSQL implementation of ShowcaseProjectRepository
pub struct PostgresShowcaseProjectRepository {
    db: DatabaseConnection,
}

impl PostgresShowcaseProjectRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ShowcaseProjectRepository for PostgresShowcaseProjectRepository {
    async fn list(
        &self,
        category: Option<ProjectCategory>,
        limit: Option<u64>,
    ) -> Result<Vec<ShowcaseProject>, DomainError> {
        let mut query = showcase_projects::Entity::find()
            .order_by_desc(showcase_projects::Column::CreatedAt);

        if let Some(category) = category {
            query = query.filter(showcase_projects::Column::Category.eq(category.to_string()));
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

    async fn find_by_id(
        &self,
        id: &ShowcaseProjectId,
    ) -> Result<Option<ShowcaseProject>, DomainError> {
        let result = showcase_projects::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn create(&self, project: &NewShowcaseProject) -> Result<ShowcaseProject, DomainError> {
        let id = Uuid::new_v4();
        let now = Utc::now().fixed_offset();

        let model = showcase_projects::ActiveModel {
            id: Set(id),
            title: Set(project.title.clone()),
            description: Set(project.description.clone()),
            tech: Set(serde_json::json!(project.tech)),
            year: Set(project.year.clone()),
            image: Set(project.image.clone()),
            website: Set(project.website.clone()),
            github: Set(project.github.clone()),
            role: Set(project.role.clone()),
            skills: Set(if project.skills.is_empty() {
                None
            } else {
                Some(serde_json::json!(project.skills))
            }),
            category: Set(project.category.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.into())
    }

    async fn update(
        &self,
        id: &ShowcaseProjectId,
        update: &ShowcaseProjectUpdate,
    ) -> Result<Option<ShowcaseProject>, DomainError> {
        let Some(model) = showcase_projects::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?
        else {
            return Ok(None);
        };

        let mut active: showcase_projects::ActiveModel = model.into();

        if let Some(title) = &update.title {
            active.title = Set(title.clone());
        }
        if let Some(description) = &update.description {
            active.description = Set(description.clone());
        }
        if let Some(tech) = &update.tech {
            active.tech = Set(serde_json::json!(tech));
        }
        if let Some(year) = &update.year {
            active.year = Set(year.clone());
        }
        if let Some(image) = &update.image {
            active.image = Set(image.clone());
        }
        if let Some(website) = &update.website {
            active.website = Set(Some(website.clone()));
        }
        if let Some(github) = &update.github {
            active.github = Set(Some(github.clone()));
        }
        if let Some(role) = &update.role {
            active.role = Set(Some(role.clone()));
        }
        if let Some(skills) = &update.skills {
            active.skills = Set(Some(serde_json::json!(skills)));
        }
        if let Some(category) = update.category {
            active.category = Set(category.to_string());
        }
        active.updated_at = Set(Utc::now().fixed_offset());

        let result = active
            .update(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(Some(result.into()))
    }

    async fn delete(&self, id: &ShowcaseProjectId) -> Result<bool, DomainError> {
        let result = showcase_projects::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.rows_affected > 0)
    }
}

fn strings_from_json(value: Option<sea_orm::JsonValue>) -> Vec<String> {
    value
        .and_then(|v| serde_json::from_value(v).ok())
        .unwrap_or_default()
}

/// Convert SeaORM model to domain entity
impl From<showcase_projects::Model> for ShowcaseProject {
    fn from(model: showcase_projects::Model) -> Self {
        ShowcaseProject {
            id: ShowcaseProjectId(model.id),
            title: model.title,
            description: model.description,
            tech: serde_json::from_value(model.tech).unwrap_or_default(),
            year: model.year,
            image: model.image,
            website: model.website,
            github: model.github,
            role: model.role,
            skills: strings_from_json(model.skills),
            category: model
                .category
                .parse()
                .unwrap_or(ProjectCategory::FullStack),
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}
