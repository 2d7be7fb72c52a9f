//! Share links and share payloads.
//!
//! A shared result carries only its type code, as `?type=<CODE>` on the
//! results page. Reopening the link resolves the same profile that a direct
//! lookup of the code would.

use serde::{Deserialize, Serialize};

use super::{PersonalityProfile, TypeCode};
use crate::domain::scoring::ScoringError;

/// Path of the results page relative to the share base URL.
pub const RESULTS_PATH: &str = "/results";

/// Query parameter carrying the type code.
pub const TYPE_PARAM: &str = "type";

pub struct ShareLink;

impl ShareLink {
    /// `{base}/results?type=CODE`
    pub fn for_type(base_url: &str, code: TypeCode) -> String {
        format!(
            "{}{}?{}={}",
            base_url.trim_end_matches('/'),
            RESULTS_PATH,
            TYPE_PARAM,
            code
        )
    }

    /// Extracts the type code from a share URL.
    ///
    /// The value is percent-decoded first. Returns `Ok(None)` when the URL
    /// has no `type` parameter, and `UnknownTypeCode` when the parameter
    /// holds anything but one of the sixteen codes.
    pub fn parse_type(url: &str) -> Result<Option<TypeCode>, ScoringError> {
        let query = match url.split_once('?') {
            Some((_, rest)) => rest.split('#').next().unwrap_or(""),
            None => return Ok(None),
        };

        let value = query
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .find(|(key, _)| *key == TYPE_PARAM)
            .map(|(_, value)| value);

        match value {
            Some(raw) => decode_component(raw).parse().map(Some),
            None => Ok(None),
        }
    }
}

/// Decodes a form-encoded query value: `+` becomes a space and `%XX` the
/// byte it names. Malformed escapes are kept as written.
fn decode_component(raw: &str) -> String {
    let bytes = raw.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => decoded.push(b' '),
            b'%' => {
                let escaped = bytes
                    .get(i + 1..i + 3)
                    .and_then(|hex| std::str::from_utf8(hex).ok())
                    .and_then(|hex| u8::from_str_radix(hex, 16).ok());
                match escaped {
                    Some(byte) => {
                        decoded.push(byte);
                        i += 3;
                        continue;
                    }
                    None => decoded.push(b'%'),
                }
            }
            other => decoded.push(other),
        }
        i += 1;
    }
    String::from_utf8_lossy(&decoded).into_owned()
}

/// Everything a share sheet or clipboard copy needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareData {
    pub title: String,
    pub text: String,
    pub url: String,
    pub personality_type: TypeCode,
    pub travel_style: String,
}

impl ShareData {
    pub fn for_profile(profile: &PersonalityProfile, base_url: &str) -> Self {
        Self {
            title: format!("MBTI Travel Style: {} - {}", profile.code, profile.name),
            text: format!(
                "🧳 I'm a {} ({}) traveler! Discover your MBTI travel style and find out \
                 what kind of adventurer you are! ✈️",
                profile.code, profile.name
            ),
            url: ShareLink::for_type(base_url, profile.code),
            personality_type: profile.code,
            travel_style: profile.travel_style.planning_style.clone(),
        }
    }

    /// True when title, text and url are all present.
    pub fn is_complete(&self) -> bool {
        !self.title.trim().is_empty() && !self.text.trim().is_empty() && !self.url.trim().is_empty()
    }

    /// Text placed on the clipboard when native sharing is unavailable.
    pub fn clipboard_text(&self) -> String {
        format!("{}\n\n{}", self.text, self.url)
    }
}
