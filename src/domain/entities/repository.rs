//! Repository entity representing a catalogued source-code project.

use uuid::Uuid;

/// A catalogued repository with its like counter.
///
/// `id` is assigned once at creation and never changes. `likes` starts at zero
/// and is only ever incremented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    pub id: Uuid,
    pub title: String,
    pub url: String,
    pub techs: Vec<String>,
    pub likes: u64,
}

impl Repository {
    /// Creates a Repository instance from stored parts.
    pub fn new(id: Uuid, title: String, url: String, techs: Vec<String>, likes: u64) -> Self {
        Self {
            id,
            title,
            url,
            techs,
            likes,
        }
    }

    /// Builds a fresh record from creation input with a new v4 id and zero likes.
    pub fn create(new_repository: NewRepository) -> Self {
        Self::new(
            Uuid::new_v4(),
            new_repository.title,
            new_repository.url,
            new_repository.techs,
            0,
        )
    }

    /// Replaces the editable fields, keeping `id` and `likes`.
    pub fn apply(&mut self, fields: RepositoryFields) {
        self.title = fields.title;
        self.url = fields.url;
        self.techs = fields.techs;
    }

    /// Adds a single like.
    pub fn like(&mut self) {
        self.likes = self.likes.saturating_add(1);
    }
}

/// Input data for creating a new repository.
#[derive(Debug, Clone)]
pub struct NewRepository {
    pub title: String,
    pub url: String,
    pub techs: Vec<String>,
}

/// Replacement values for the editable fields of a repository.
///
/// Every field is replaced; there is no partial update.
#[derive(Debug, Clone)]
pub struct RepositoryFields {
    pub title: String,
    pub url: String,
    pub techs: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_repository() -> NewRepository {
        NewRepository {
            title: "Desafio Node.js".to_string(),
            url: "https://github.com/example/desafio".to_string(),
            techs: vec!["Node.js".to_string(), "Express".to_string()],
        }
    }

    #[test]
    fn test_create_starts_with_zero_likes() {
        let repository = Repository::create(new_repository());

        assert_eq!(repository.likes, 0);
        assert_eq!(repository.title, "Desafio Node.js");
        assert_eq!(repository.techs.len(), 2);
    }

    #[test]
    fn test_create_assigns_v4_id() {
        let repository = Repository::create(new_repository());

        assert_eq!(repository.id.get_version_num(), 4);
        assert_eq!(repository.id.to_string().len(), 36);
    }

    #[test]
    fn test_create_assigns_distinct_ids() {
        let a = Repository::create(new_repository());
        let b = Repository::create(new_repository());

        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_apply_keeps_id_and_likes() {
        let mut repository = Repository::create(new_repository());
        repository.like();
        repository.like();
        let id = repository.id;

        repository.apply(RepositoryFields {
            title: "Renamed".to_string(),
            url: "https://example.com/renamed".to_string(),
            techs: vec!["Rust".to_string()],
        });

        assert_eq!(repository.id, id);
        assert_eq!(repository.likes, 2);
        assert_eq!(repository.title, "Renamed");
        assert_eq!(repository.url, "https://example.com/renamed");
        assert_eq!(repository.techs, vec!["Rust".to_string()]);
    }

    #[test]
    fn test_like_increments_by_one() {
        let mut repository = Repository::create(new_repository());

        repository.like();
        assert_eq!(repository.likes, 1);

        repository.like();
        assert_eq!(repository.likes, 2);
    }
}
