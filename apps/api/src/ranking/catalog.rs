//! Role and skill catalogs — fixed, validated once at startup, then shared read-only.

use std::collections::HashSet;
use std::sync::Arc;

use thiserror::Error;

/// Target job titles considered as ranking candidates, in tie-break order.
pub const DEFAULT_ROLES: &[&str] = &[
    "Test Manager",
    "QA Manager",
    "Test Lead",
    "QA Lead",
    "Senior QA Lead",
    "Lead QA Engineer",
    "Test Architect",
    "Senior Test Architect",
    "Principal Test Architect",
    "Test Automation Lead",
    "Automation Test Lead",
    "Senior Automation Engineer",
    "Performance Test Architect",
    "Performance Test Lead",
    "Performance Engineer",
    "Embedded QA Lead",
    "Embedded Test Lead",
    "Embedded Systems Test Engineer",
    "Senior Software Engineer in Test",
    "SDET",
    "Principal Systems Engineer",
    "Test Manager - Embedded",
    "Validation Test Lead",
    "V&V Lead",
    "Test Strategy Lead",
    "QA Strategy Manager",
    "Head of QA",
    "Quality Engineering Lead",
    "Test Engineering Manager",
];

/// Skill and tool keywords that earn a per-skill bonus.
pub const DEFAULT_SKILLS: &[&str] = &[
    "Python",
    "pytest",
    "Selenium",
    "Appium",
    "Jenkins",
    "GitLab CI",
    "GitHub Actions",
    "CI/CD",
    "GNSS",
    "GPS",
    "BLE",
    "RTOS",
    "OTA",
    "FDA 21 CFR",
    "ISO 13485",
    "IEC 62304",
    "Postman",
    "JMeter",
    "API testing",
    "performance testing",
    "embedded",
];

#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("{0} catalog is empty")]
    Empty(&'static str),

    #[error("{0} catalog contains a blank entry")]
    Blank(&'static str),

    #[error("{kind} catalog lists '{entry}' more than once")]
    Duplicate { kind: &'static str, entry: String },
}

/// A catalog entry with its lower-cased form cached for matching.
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    pub name: String,
    pub lower: String,
}

/// Immutable, non-empty list of entries. Cheap to clone.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Arc<[CatalogEntry]>,
}

impl Catalog {
    fn build<S: AsRef<str>>(kind: &'static str, names: &[S]) -> Result<Self, CatalogError> {
        if names.is_empty() {
            return Err(CatalogError::Empty(kind));
        }

        let mut seen = HashSet::new();
        let mut entries = Vec::with_capacity(names.len());
        for name in names {
            let name = name.as_ref().trim();
            if name.is_empty() {
                return Err(CatalogError::Blank(kind));
            }
            let lower = name.to_lowercase();
            if !seen.insert(lower.clone()) {
                return Err(CatalogError::Duplicate {
                    kind,
                    entry: name.to_string(),
                });
            }
            entries.push(CatalogEntry {
                name: name.to_string(),
                lower,
            });
        }

        Ok(Self {
            entries: entries.into(),
        })
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.name.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[derive(Debug, Clone)]
pub struct RoleCatalog(Catalog);

#[derive(Debug, Clone)]
pub struct SkillCatalog(Catalog);

impl RoleCatalog {
    pub fn new<S: AsRef<str>>(roles: &[S]) -> Result<Self, CatalogError> {
        Catalog::build("role", roles).map(Self)
    }

    pub fn builtin() -> Result<Self, CatalogError> {
        Self::new(DEFAULT_ROLES)
    }
}

impl SkillCatalog {
    pub fn new<S: AsRef<str>>(skills: &[S]) -> Result<Self, CatalogError> {
        Catalog::build("skill", skills).map(Self)
    }

    pub fn builtin() -> Result<Self, CatalogError> {
        Self::new(DEFAULT_SKILLS)
    }
}

impl std::ops::Deref for RoleCatalog {
    type Target = Catalog;

    fn deref(&self) -> &Catalog {
        &self.0
    }
}

impl std::ops::Deref for SkillCatalog {
    type Target = Catalog;

    fn deref(&self) -> &Catalog {
        &self.0
    }
}
