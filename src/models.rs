//! Frontend Models
//!
//! Project entries shown in the portfolio grid. The ordered list is fixed at
//! startup; the modal navigates it by index.

/// A single portfolio project
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub category: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub tech: Vec<String>,
    pub demo_url: Option<String>,
    pub code_url: Option<String>,
}

impl Project {
    fn new(
        category: &str,
        title: &str,
        description: &str,
        image: &str,
        tech: &[&str],
        demo_url: Option<&str>,
        code_url: Option<&str>,
    ) -> Self {
        Self {
            category: category.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            image: image.to_string(),
            tech: tech.iter().map(|t| t.to_string()).collect(),
            demo_url: demo_url.map(|u| u.to_string()),
            code_url: code_url.map(|u| u.to_string()),
        }
    }
}

/// The portfolio contents, in display and navigation order
pub fn sample_projects() -> Vec<Project> {
    vec![
        Project::new(
            "web",
            "Campus Event Portal",
            "Responsive event listing and registration site for campus activities.",
            "public/portfolio-1.jpg",
            &["HTML", "CSS", "JavaScript", "Responsive Design"],
            Some("https://example.com/events"),
            Some("https://github.com/anggerbs/event-portal"),
        ),
        Project::new(
            "app",
            "Task Tracker",
            "Small task manager with offline storage and daily streaks.",
            "public/portfolio-2.jpg",
            &["React", "Node.js", "MongoDB", "Express"],
            Some("https://example.com/tasks"),
            Some("https://github.com/anggerbs/task-tracker"),
        ),
        Project::new(
            "design",
            "Mobile Banking Concept",
            "UI/UX exploration for a mobile-first banking experience.",
            "public/portfolio-3.jpg",
            &["Figma", "Adobe XD", "UI/UX Design"],
            None,
            None,
        ),
        Project::new(
            "web",
            "Recipe Finder",
            "Search-driven recipe site with category filters and favorites.",
            "public/portfolio-4.jpg",
            &["Vue.js", "Firebase", "CSS3"],
            Some("https://example.com/recipes"),
            Some("https://github.com/anggerbs/recipe-finder"),
        ),
        Project::new(
            "app",
            "Study Timer",
            "Pomodoro-style study timer with session history charts.",
            "public/portfolio-5.jpg",
            &["Flutter", "Dart", "SQLite"],
            None,
            Some("https://github.com/anggerbs/study-timer"),
        ),
        Project::new(
            "design",
            "Portfolio Redesign",
            "Visual refresh of this very site, from wireframes to final mockups.",
            "public/portfolio-6.jpg",
            &["Figma", "Illustrator"],
            Some("https://example.com/redesign"),
            None,
        ),
    ]
}
