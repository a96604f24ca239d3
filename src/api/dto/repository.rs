//! DTOs for the repository endpoints.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::{NewRepository, Repository, RepositoryFields};

/// Request body for `POST /repositories` and `PUT /repositories/{id}`.
///
/// `title` and `url` are required strings; empty strings are stored as given.
/// `techs` defaults to an empty list when absent. Unknown fields, including
/// `likes`, are ignored.
#[derive(Debug, Deserialize)]
pub struct RepositoryRequest {
    pub title: String,
    pub url: String,

    #[serde(default)]
    pub techs: Vec<String>,
}

impl From<RepositoryRequest> for NewRepository {
    fn from(request: RepositoryRequest) -> Self {
        Self {
            title: request.title,
            url: request.url,
            techs: request.techs,
        }
    }
}

impl From<RepositoryRequest> for RepositoryFields {
    fn from(request: RepositoryRequest) -> Self {
        Self {
            title: request.title,
            url: request.url,
            techs: request.techs,
        }
    }
}

/// JSON representation of a repository.
#[derive(Debug, Serialize)]
pub struct RepositoryItem {
    pub id: Uuid,
    pub title: String,
    pub url: String,
    pub techs: Vec<String>,
    pub likes: u64,
}

impl From<Repository> for RepositoryItem {
    fn from(repository: Repository) -> Self {
        Self {
            id: repository.id,
            title: repository.title,
            url: repository.url,
            techs: repository.techs,
            likes: repository.likes,
        }
    }
}
