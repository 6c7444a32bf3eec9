//! Static profile template catalog.
//!
//! Templates bundle habit titles and focus categories a user can apply to
//! bulk-replace their habit list.

use crate::model::task::Category;

/// Read-only profile template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub emoji: &'static str,
    pub description: &'static str,
    /// Accent color as `#RRGGBB`.
    pub color: &'static str,
    pub habits: &'static [&'static str],
    pub categories: &'static [Category],
    /// Target number of completed tasks per day.
    pub daily_goal: u32,
}

pub const PROFILE_TEMPLATES: &[ProfileTemplate] = &[
    ProfileTemplate {
        id: "student",
        name: "Student",
        emoji: "🎓",
        description: "Stay on top of classes, assignments and revision.",
        color: "#6366F1",
        habits: &[
            "Review lecture notes",
            "Study for 2 hours",
            "Read 20 pages",
            "Plan tomorrow",
        ],
        categories: &[Category::Learning, Category::Personal],
        daily_goal: 5,
    },
    ProfileTemplate {
        id: "professional",
        name: "Professional",
        emoji: "💼",
        description: "Deep work, focused meetings and a clean inbox.",
        color: "#0EA5E9",
        habits: &[
            "Inbox zero",
            "90 minutes of deep work",
            "Review calendar",
            "Write end-of-day notes",
        ],
        categories: &[Category::Work, Category::Finance],
        daily_goal: 6,
    },
    ProfileTemplate {
        id: "fitness",
        name: "Fitness",
        emoji: "💪",
        description: "Move daily, eat well and recover properly.",
        color: "#10B981",
        habits: &[
            "Workout 30 minutes",
            "Drink 2L of water",
            "10k steps",
            "Stretch before bed",
            "Sleep 8 hours",
        ],
        categories: &[Category::Health, Category::Personal],
        daily_goal: 4,
    },
    ProfileTemplate {
        id: "mindful",
        name: "Mindful",
        emoji: "🧘",
        description: "Slow down with journaling, meditation and screen breaks.",
        color: "#8B5CF6",
        habits: &["Meditate 10 minutes", "Gratitude journal", "No phone after 10pm"],
        categories: &[Category::Health, Category::Personal],
        daily_goal: 3,
    },
    ProfileTemplate {
        id: "creator",
        name: "Creator",
        emoji: "🎨",
        description: "Ship something small every day.",
        color: "#F59E0B",
        habits: &[
            "Create for 1 hour",
            "Share progress",
            "Collect inspiration",
            "Learn a new technique",
        ],
        categories: &[Category::Work, Category::Learning],
        daily_goal: 4,
    },
];

/// Looks up a template by id.
pub fn find_template(id: &str) -> Option<&'static ProfileTemplate> {
    let normalized = id.trim();
    PROFILE_TEMPLATES
        .iter()
        .find(|template| template.id == normalized)
}
