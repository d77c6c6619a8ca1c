//! Static response tables.
//!
//! All three tables are ordered: the selector walks them front to back and
//! stops at the first rule that applies.

use serde_json::Value;

use crate::profile::display_value;

/// Candidate responses for one trigger keyword.
#[derive(Debug, Clone, Copy)]
pub struct KeywordRule {
    /// Lowercase substring looked for in the lowercased message.
    pub keyword: &'static str,
    pub responses: &'static [&'static str],
}

/// Personalised response built from one profile field.
#[derive(Clone, Copy)]
pub struct ProfileRule {
    /// Profile key the rule reads (camelCase, as sent by the client).
    pub field: &'static str,
    /// Builds the response from the field's (truthy) value.
    pub render: fn(&Value) -> String,
}

pub const KEYWORD_RULES: &[KeywordRule] = &[
    KeywordRule {
        keyword: "distraction",
        responses: &[
            "Based on your profile, I notice you struggle with distractions. Try implementing the Pomodoro technique - work for 25 minutes, then take a 5-minute break.",
            "Distractions can significantly impact your focus. Consider using website blockers during your deep work sessions.",
            "For managing distractions, create a dedicated workspace that signals to your brain it's time to focus.",
        ],
    },
    KeywordRule {
        keyword: "energy",
        responses: &[
            "Your energy levels fluctuate throughout the day. Try scheduling your most demanding tasks during your peak energy hours.",
            "To maintain energy throughout the day, consider short movement breaks every hour.",
            "Proper hydration and nutrition can help maintain consistent energy levels during focus sessions.",
        ],
    },
    KeywordRule {
        keyword: "environment",
        responses: &[
            "Your work environment plays a crucial role in maintaining focus. Consider noise-cancelling headphones if you're in a noisy space.",
            "Optimize your workspace by removing visual clutter and ensuring proper lighting.",
            "Try working in different environments to see which one helps you maintain focus the longest.",
        ],
    },
    KeywordRule {
        keyword: "time",
        responses: &[
            "Time management is essential for deep focus. Try timeboxing your tasks to create a sense of urgency.",
            "Consider using the 2-minute rule: if a task takes less than 2 minutes, do it immediately.",
            "Track your focus sessions to identify patterns in your productivity throughout the day.",
        ],
    },
    KeywordRule {
        keyword: "productivity",
        responses: &[
            "To boost productivity, try batching similar tasks together to reduce context switching.",
            "The 'eat the frog' technique suggests tackling your most challenging task first thing in the morning.",
            "Regular breaks are essential for sustained productivity. Try the 52/17 rule - 52 minutes of work followed by 17 minutes of rest.",
        ],
    },
];

/// Used when neither a keyword nor a profile rule applies.
pub const DEFAULT_RESPONSES: &[&str] = &[
    "I recommend starting with a clear intention for each work session. What specific outcome do you want to achieve?",
    "Deep focus requires practice. Start with shorter sessions and gradually increase the duration as your focus muscle strengthens.",
    "Consider creating a pre-work ritual that signals to your brain it's time to enter a focused state.",
    "Reflection is key to improving focus. At the end of each day, note what helped and hindered your concentration.",
    "Remember that focus is a skill that improves with consistent practice. Be patient with yourself as you develop this ability.",
];

pub const PROFILE_RULES: &[ProfileRule] = &[
    ProfileRule {
        field: "distractions",
        render: render_distractions,
    },
    ProfileRule {
        field: "productiveHours",
        render: render_productive_hours,
    },
    ProfileRule {
        field: "currentChallenges",
        render: render_current_challenges,
    },
];

/// Looks up the candidates for a keyword.
pub fn responses_for(keyword: &str) -> Option<&'static [&'static str]> {
    KEYWORD_RULES
        .iter()
        .find(|rule| rule.keyword == keyword)
        .map(|rule| rule.responses)
}

fn render_distractions(value: &Value) -> String {
    // A list contributes its first entry; any other truthy value is used as is.
    let distraction = match value {
        Value::Array(items) if !items.is_empty() => &items[0],
        other => other,
    };
    format!(
        "I notice that {} is a significant distraction for you. Try setting specific times to check on these things rather than allowing them to interrupt your focus.",
        display_value(distraction)
    )
}

fn render_productive_hours(value: &Value) -> String {
    format!(
        "You mentioned you're most productive during {}. Try scheduling your most challenging tasks during this time to maximize your natural energy flow.",
        display_value(value)
    )
}

fn render_current_challenges(value: &Value) -> String {
    format!(
        "Regarding your challenge with {}, breaking this down into smaller, manageable tasks might help you make progress without feeling overwhelmed.",
        display_value(value)
    )
}
