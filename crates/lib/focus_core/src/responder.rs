//! Response selection — keyword scan, then profile rules, then a default tip.

use std::sync::Arc;

use crate::picker::{Picker, ThreadRngPicker};
use crate::profile::Profile;
use crate::tables::{DEFAULT_RESPONSES, KEYWORD_RULES, PROFILE_RULES};

/// Which rule produced a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionSource {
    /// A keyword matched the message.
    Keyword(&'static str),
    /// A profile field personalised the response.
    Profile(&'static str),
    /// Nothing applied.
    Default,
}

/// A chosen response and the rule it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub text: String,
    pub source: SelectionSource,
}

/// Picks a response for a chat message.
///
/// Stateless apart from the picker, so one instance can be shared across
/// request handlers.
#[derive(Clone)]
pub struct ResponseSelector {
    picker: Arc<dyn Picker>,
}

impl Default for ResponseSelector {
    fn default() -> Self {
        Self::new(Arc::new(ThreadRngPicker))
    }
}

impl std::fmt::Debug for ResponseSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResponseSelector").finish_non_exhaustive()
    }
}

impl ResponseSelector {
    pub fn new(picker: Arc<dyn Picker>) -> Self {
        Self { picker }
    }

    /// Selects a response.
    ///
    /// 1. The first keyword (in table order) found in the lowercased message
    ///    wins and one of its candidates is picked.
    /// 2. Otherwise, if the profile carries any truthy value, the first
    ///    profile rule whose field is truthy renders the response.
    /// 3. Otherwise a default response is picked.
    pub fn select(&self, message: &str, profile: &Profile) -> Selection {
        let lowered = message.to_lowercase();

        if let Some(rule) = KEYWORD_RULES
            .iter()
            .find(|rule| lowered.contains(rule.keyword))
        {
            Selection {
                text: self.choose(rule.responses).to_string(),
                source: SelectionSource::Keyword(rule.keyword),
            }
        } else if let Some(selection) = personalise(profile) {
            selection
        } else {
            Selection {
                text: self.choose(DEFAULT_RESPONSES).to_string(),
                source: SelectionSource::Default,
            }
        }
    }

    fn choose(&self, candidates: &'static [&'static str]) -> &'static str {
        let index = self.picker.pick(candidates.len());
        candidates[index.min(candidates.len() - 1)]
    }
}

fn personalise(profile: &Profile) -> Option<Selection> {
    if profile.is_empty() || !profile.has_truthy_value() {
        return None;
    }
    PROFILE_RULES.iter().find_map(|rule| {
        profile.get_truthy(rule.field).map(|value| Selection {
            text: (rule.render)(value),
            source: SelectionSource::Profile(rule.field),
        })
    })
}

/// Selects a response using the thread-local RNG.
pub fn select_response(message: &str, profile: &Profile) -> String {
    ResponseSelector::default().select(message, profile).text
}
