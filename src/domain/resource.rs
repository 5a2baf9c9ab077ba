//! Resource variants managed through the editors: blog posts and portfolio
//! projects, serialized with the wire field names the API expects.

use clap::ValueEnum;
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use super::error::{DomainError, ensure_filled};

/// A persisted content entity addressable by a server-assigned identifier.
///
/// Identifiers only ever come from the server: a value whose `id()` is `None`
/// has never been persisted, and the id field is skipped during serialization
/// so a create payload carries no identifier at all.
pub trait Resource:
    Clone + Default + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Shape returned by list endpoints: identifier plus display fields only.
    type Summary: Clone + Serialize + DeserializeOwned + Send + Sync + 'static;

    /// API base path for the resource family, relative to the configured origin.
    const BASE_PATH: &'static str;
    /// Human-readable noun used in logs and prompts.
    const KIND: &'static str;

    fn id(&self) -> Option<&str>;

    /// Check the fields that must be non-empty before a save is attempted.
    fn validate(&self) -> Result<(), DomainError>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPostSummary {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub excerpt: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Resource for BlogPost {
    type Summary = BlogPostSummary;

    const BASE_PATH: &'static str = "api/blogs";
    const KIND: &'static str = "blog post";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn validate(&self) -> Result<(), DomainError> {
        ensure_filled(&self.title, "title")?;
        ensure_filled(&self.excerpt, "excerpt")?;
        ensure_filled(&self.content, "content")?;
        Ok(())
    }
}

/// Render shape used by the portfolio front-end for a project card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    #[default]
    Box,
    Sphere,
    Torus,
}

impl Shape {
    pub fn as_str(self) -> &'static str {
        match self {
            Shape::Box => "box",
            Shape::Sphere => "sphere",
            Shape::Torus => "torus",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub github_link: String,
    #[serde(default)]
    pub live_url: String,
    #[serde(default)]
    pub shape: Shape,
    #[serde(default)]
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSummary {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub shape: Shape,
}

impl Resource for Project {
    type Summary = ProjectSummary;

    const BASE_PATH: &'static str = "api/projects";
    const KIND: &'static str = "project";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn validate(&self) -> Result<(), DomainError> {
        ensure_filled(&self.title, "title")?;
        ensure_filled(&self.description, "description")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_payload_omits_absent_id() {
        let draft = BlogPost {
            title: "T".into(),
            excerpt: "E".into(),
            content: "C".into(),
            ..BlogPost::default()
        };
        let value = serde_json::to_value(&draft).expect("serialized draft");
        assert!(value.get("_id").is_none());
    }

    #[test]
    fn persisted_post_round_trips_wire_id() {
        let raw = r#"{"_id":"42","title":"T","excerpt":"E","content":"C","tags":["rust"]}"#;
        let post: BlogPost = serde_json::from_str(raw).expect("decoded post");
        assert_eq!(post.id(), Some("42"));
        let value = serde_json::to_value(&post).expect("serialized post");
        assert_eq!(value["_id"], "42");
    }

    #[test]
    fn project_uses_camel_case_field_names() {
        let project = Project {
            title: "T".into(),
            description: "D".into(),
            github_link: "https://github.com/x/y".into(),
            live_url: "https://y.example".into(),
            ..Project::default()
        };
        let value = serde_json::to_value(&project).expect("serialized project");
        assert_eq!(value["githubLink"], "https://github.com/x/y");
        assert_eq!(value["liveUrl"], "https://y.example");
        assert_eq!(value["shape"], "box");
    }

    #[test]
    fn validation_requires_trimmed_content() {
        let post = BlogPost {
            title: "T".into(),
            excerpt: "E".into(),
            content: "   ".into(),
            ..BlogPost::default()
        };
        let err = post.validate().expect_err("blank content rejected");
        assert_eq!(err, DomainError::required("content"));
    }

    #[test]
    fn project_validation_ignores_optional_fields() {
        let project = Project {
            title: "T".into(),
            description: "D".into(),
            ..Project::default()
        };
        assert!(project.validate().is_ok());
    }
}
