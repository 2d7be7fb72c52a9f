//! Personality catalog - descriptive content keyed by type code.

use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

use super::{PersonalityProfile, TravelStyle, TypeCode};
use crate::domain::foundation::ValidationError;
use crate::domain::quiz::CatalogError;

const BUILTIN_TYPES: &str = include_str!("../../../data/personality_types.yaml");

static BUILTIN: Lazy<PersonalityCatalog> = Lazy::new(|| {
    PersonalityCatalog::from_yaml_str(BUILTIN_TYPES)
        .expect("embedded personality catalog must be valid")
});

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    types: Vec<PersonalityProfile>,
}

/// Answers whether a type code has descriptive content.
///
/// The type resolver consults this before handing a code to presentation.
pub trait TypeDirectory {
    fn contains(&self, code: TypeCode) -> bool;
}

#[derive(Debug, Clone)]
pub struct PersonalityCatalog {
    profiles: BTreeMap<TypeCode, PersonalityProfile>,
}

impl PersonalityCatalog {
    /// The embedded sixteen travel profiles.
    pub fn builtin() -> &'static PersonalityCatalog {
        &BUILTIN
    }

    pub fn new(profiles: Vec<PersonalityProfile>) -> Result<Self, CatalogError> {
        if profiles.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut map = BTreeMap::new();
        for profile in profiles {
            if profile.name.trim().is_empty() {
                return Err(ValidationError::empty_field(format!("{}.name", profile.code)).into());
            }
            let code = profile.code;
            if map.insert(code, profile).is_some() {
                return Err(CatalogError::DuplicateId(code.to_string()));
            }
        }

        Ok(Self { profiles: map })
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, CatalogError> {
        let doc: CatalogDocument = serde_yaml::from_str(yaml)?;
        Self::new(doc.types)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&yaml)
    }

    pub fn get(&self, code: TypeCode) -> Option<&PersonalityProfile> {
        self.profiles.get(&code)
    }

    pub fn codes(&self) -> impl Iterator<Item = TypeCode> + '_ {
        self.profiles.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn travel_recommendations(&self, code: TypeCode) -> Option<&TravelStyle> {
        self.get(code).map(|p| &p.travel_style)
    }
}

impl TypeDirectory for PersonalityCatalog {
    fn contains(&self, code: TypeCode) -> bool {
        self.profiles.contains_key(&code)
    }
}
