use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::LazyLock;
use thiserror::Error;

pub const CONTENT_FILE: &str = "portfolio.json";

/// Portfolio content, parsed once on first access and shared for the life of the process.
pub static PORTFOLIO: LazyLock<Portfolio> = LazyLock::new(|| {
    Portfolio::load().expect("embedded portfolio content should be valid")
});

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub linkedin: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub name: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDetails {
    pub purpose: String,
    pub value: String,
    pub features: Vec<String>,
    pub challenges: Vec<String>,
    pub solutions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub link: String,
    pub details: ProjectDetails,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub title: String,
    pub company: String,
    pub period: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CertificationStatus {
    Current,
    Previous,
}

impl CertificationStatus {
    pub fn heading(self) -> &'static str {
        match self {
            Self::Current => "Current",
            Self::Previous => "Previous",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certification {
    pub title: String,
    pub issuer: String,
    pub date: String,
    pub status: CertificationStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    pub skills: Vec<SkillGroup>,
    pub projects: Vec<Project>,
    pub experience: Vec<Role>,
    pub certifications: Vec<Certification>,
}

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Content file not found: {0}")]
    NotFound(String),
    #[error("Couldn't parse portfolio content: {0}")]
    ParseError(#[from] serde_json::Error),
    #[error("Project has an empty title")]
    EmptyTitle,
    #[error("Duplicate project title: {0}")]
    DuplicateProject(String),
    #[error("Duplicate technology '{tech}' in project '{project}'")]
    DuplicateTechnology { project: String, tech: String },
}

impl Portfolio {
    /// Load the embedded content file and validate it.
    pub fn load() -> Result<Self, ContentError> {
        let file = Assets::get(CONTENT_FILE)
            .ok_or_else(|| ContentError::NotFound(CONTENT_FILE.to_string()))?;
        Self::from_json(&file.data)
    }

    pub fn from_json(bytes: &[u8]) -> Result<Self, ContentError> {
        let portfolio: Portfolio = serde_json::from_slice(bytes)?;
        portfolio.validate()?;
        Ok(portfolio)
    }

    /// Project titles key the gallery, and tags render once each, so both must be unique.
    pub fn validate(&self) -> Result<(), ContentError> {
        let mut titles = HashSet::new();
        for project in &self.projects {
            if project.title.trim().is_empty() {
                return Err(ContentError::EmptyTitle);
            }
            if !titles.insert(project.title.as_str()) {
                return Err(ContentError::DuplicateProject(project.title.clone()));
            }
            let mut techs = HashSet::new();
            for tech in &project.technologies {
                if !techs.insert(tech.as_str()) {
                    return Err(ContentError::DuplicateTechnology {
                        project: project.title.clone(),
                        tech: tech.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    pub fn project(&self, title: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.title == title)
    }

    pub fn certifications_with(
        &self,
        status: CertificationStatus,
    ) -> impl Iterator<Item = &Certification> {
        self.certifications
            .iter()
            .filter(move |c| c.status == status)
    }
}
