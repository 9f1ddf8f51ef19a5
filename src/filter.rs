use crate::content::Project;

pub const ALL: &str = "All";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectFilter {
    active: String,
}

impl Default for ProjectFilter {
    fn default() -> Self {
        Self {
            active: ALL.to_string(),
        }
    }
}

impl ProjectFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    pub fn is_active(&self, category: &str) -> bool {
        self.active == category
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.active = category.into();
    }

    pub fn visible_projects<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        projects
            .iter()
            .filter(|p| self.active == ALL || p.category == self.active)
            .collect()
    }
}

pub fn categories(projects: &[Project]) -> Vec<&str> {
    let mut out = vec![ALL];
    for project in projects {
        if !out.contains(&project.category) {
            out.push(project.category);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PROJECTS;

    fn project(id: u32, category: &'static str) -> Project {
        Project {
            id,
            title: "t",
            description: "d",
            technologies: &[],
            category,
            github_link: "#",
            live_link: "#",
            image: "",
        }
    }

    fn ids(projects: &[&Project]) -> Vec<u32> {
        projects.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_default_shows_everything() {
        let filter = ProjectFilter::new();
        assert_eq!(filter.active(), ALL);
        assert_eq!(ids(&filter.visible_projects(PROJECTS)), vec![1, 2, 3]);
    }

    #[test]
    fn test_each_category_selects_exact_subset() {
        let projects = vec![
            project(1, "Web App"),
            project(2, "CLI"),
            project(3, "Web App"),
            project(4, "Web Design"),
            project(5, "CLI"),
        ];
        let mut filter = ProjectFilter::new();
        for category in categories(&projects).into_iter().skip(1) {
            filter.set_category(category);
            let expected = projects
                .iter()
                .filter(|p| p.category == category)
                .map(|p| p.id)
                .collect::<Vec<_>>();
            assert_eq!(ids(&filter.visible_projects(&projects)), expected);
        }

        filter.set_category("CLI");
        assert_eq!(ids(&filter.visible_projects(&projects)), vec![2, 5]);
    }

    #[test]
    fn test_unknown_category_is_empty() {
        let mut filter = ProjectFilter::new();
        filter.set_category("Mobile");
        assert!(filter.is_active("Mobile"));
        assert!(filter.visible_projects(PROJECTS).is_empty());
    }

    #[test]
    fn test_back_to_all_restores_order() {
        let mut filter = ProjectFilter::new();
        filter.set_category("Web Design");
        assert_eq!(ids(&filter.visible_projects(PROJECTS)), vec![3]);
        filter.set_category(ALL);
        assert_eq!(ids(&filter.visible_projects(PROJECTS)), vec![1, 2, 3]);
    }

    #[test]
    fn test_categories_dedup_in_order() {
        assert_eq!(categories(PROJECTS), vec!["All", "Web App", "Web Design"]);
        assert_eq!(categories(&[]), vec!["All"]);
    }
}
