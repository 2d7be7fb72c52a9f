//! ResolveSharedResultHandler - Query handler for opening a share link.

use std::sync::Arc;

use crate::domain::personality::{
    PersonalityCatalog, PersonalityProfile, ShareData, ShareLink, TypeCode, TYPE_PARAM,
};
use crate::domain::quiz::QuizError;

#[derive(Debug, Clone)]
pub struct ResolveSharedResultQuery {
    pub url: String,
}

#[derive(Debug, Clone)]
pub struct ResolveSharedResultResult {
    pub type_code: TypeCode,
    pub profile: PersonalityProfile,
    pub share: ShareData,
}

pub struct ResolveSharedResultHandler {
    profiles: Arc<PersonalityCatalog>,
    share_base_url: String,
}

impl ResolveSharedResultHandler {
    pub fn new(profiles: Arc<PersonalityCatalog>, share_base_url: impl Into<String>) -> Self {
        Self {
            profiles,
            share_base_url: share_base_url.into(),
        }
    }

    pub fn handle(
        &self,
        query: ResolveSharedResultQuery,
    ) -> Result<ResolveSharedResultResult, QuizError> {
        let type_code = ShareLink::parse_type(&query.url)?
            .ok_or_else(|| QuizError::validation(TYPE_PARAM, "share link carries no type code"))?;

        let profile = self
            .profiles
            .get(type_code)
            .cloned()
            .ok_or_else(|| QuizError::profile_not_found(type_code))?;

        Ok(ResolveSharedResultResult {
            type_code,
            share: ShareData::for_profile(&profile, &self.share_base_url),
            profile,
        })
    }
}
