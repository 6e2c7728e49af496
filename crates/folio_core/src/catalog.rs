use std::collections::BTreeSet;
use std::sync::Arc;

use serde::Deserialize;
use thiserror::Error;

pub type PostId = u32;

/// One article. `content` is an opaque body handed to the renderer as-is.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BlogPost {
    pub id: PostId,
    pub title: String,
    pub excerpt: String,
    pub date: String,
    pub category: String,
    pub read_time: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("duplicate post id {0}")]
    DuplicatePostId(PostId),
}

/// Read-only set of posts and projects supplied at startup.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    posts: Vec<Arc<BlogPost>>,
    projects: Vec<Project>,
}

impl Catalog {
    pub fn new(posts: Vec<BlogPost>, projects: Vec<Project>) -> Result<Self, CatalogError> {
        let mut seen = BTreeSet::new();
        for post in &posts {
            if !seen.insert(post.id) {
                return Err(CatalogError::DuplicatePostId(post.id));
            }
        }
        Ok(Self {
            posts: posts.into_iter().map(Arc::new).collect(),
            projects,
        })
    }

    pub fn post(&self, id: PostId) -> Option<&Arc<BlogPost>> {
        self.posts.iter().find(|post| post.id == id)
    }

    /// Posts in catalog order.
    pub fn posts(&self) -> &[Arc<BlogPost>] {
        &self.posts
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }
}

#[cfg(test)]
mod tests {
    use super::{BlogPost, Catalog, CatalogError};

    fn post(id: u32) -> BlogPost {
        BlogPost {
            id,
            title: format!("Post {id}"),
            excerpt: String::new(),
            date: "Dec 1, 2025".to_string(),
            category: "Design".to_string(),
            read_time: "5 min read".to_string(),
            content: String::new(),
        }
    }

    #[test]
    fn lookup_by_id_keeps_catalog_order() {
        let catalog = Catalog::new(vec![post(3), post(1)], Vec::new()).unwrap();
        assert_eq!(catalog.post(1).unwrap().title, "Post 1");
        assert!(catalog.post(2).is_none());
        let ids: Vec<_> = catalog.posts().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = Catalog::new(vec![post(1), post(1)], Vec::new()).unwrap_err();
        assert_eq!(err, CatalogError::DuplicatePostId(1));
    }
}
