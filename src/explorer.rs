// Skill explorer - cross-filtering skills against everything tagged with them
//
// A text query narrows the skill-group lists (case-insensitive substring);
// selecting a skill filters projects, experience, education, and
// certifications down to entries carrying that tag (normalized exact match)
// and routes the result view to the first non-empty tab in precedence order.
// Single selection only: picking a second skill replaces the first, picking
// the same one again clears it.

use crate::content::{
    Certification, EducationEntry, ExperienceEntry, PortfolioContent, Project, SkillGroup,
};
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

/// Result tabs, in routing precedence order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Projects,
    Experience,
    Education,
    Certifications,
}

impl Tab {
    pub const ALL: [Tab; 4] = [
        Tab::Projects,
        Tab::Experience,
        Tab::Education,
        Tab::Certifications,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Projects => "Projects",
            Tab::Experience => "Experience",
            Tab::Education => "Education",
            Tab::Certifications => "Certifications",
        }
    }
}

/// Lowercase, trim, collapse runs of whitespace
pub fn normalize(input: &str) -> String {
    static WS: OnceLock<Regex> = OnceLock::new();
    let ws = WS.get_or_init(|| Regex::new(r"\s+").expect("whitespace pattern"));
    ws.replace_all(input.trim(), " ").to_lowercase()
}

/// Empty query matches everything; otherwise normalized substring match
pub fn skill_matches_query(skill: &str, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    normalize(skill).contains(&normalize(query))
}

fn has_skill(tags: &[&str], selected: &str) -> bool {
    let sel = normalize(selected);
    tags.iter().any(|t| normalize(t) == sel)
}

fn tags_for_project(p: &Project) -> Vec<&'static str> {
    p.tech.clone()
}

/// tech and tags merged, first occurrence wins
fn tags_for_experience(x: &ExperienceEntry) -> Vec<&'static str> {
    let mut seen = HashSet::new();
    x.tech
        .iter()
        .chain(x.tags.iter())
        .copied()
        .filter(|t| seen.insert(*t))
        .collect()
}

fn tags_for_education(e: &EducationEntry) -> Vec<&'static str> {
    e.tags.clone()
}

fn tags_for_cert(c: &Certification) -> Vec<&'static str> {
    c.tags.clone()
}

/// A skill group after query filtering
#[derive(Debug)]
pub struct FilteredGroup<'c> {
    pub group: &'c SkillGroup,
    pub items: Vec<&'static str>,
}

/// Mutable explorer state; content is passed in per call, read-only
#[derive(Debug, Default)]
pub struct ExplorerState {
    pub query: String,
    pub selected: Option<String>,
    active_tab: Option<Tab>,
    /// Experience entries shown in full rather than previewed
    pub expanded: HashSet<String>,
    /// Keyboard cursor over the flattened filtered skill list
    pub cursor: usize,
}

impl ExplorerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The tab the result view shows (defaults to projects)
    pub fn active_tab(&self) -> Tab {
        self.active_tab.unwrap_or(Tab::Projects)
    }

    pub fn set_active_tab(&mut self, tab: Tab) {
        self.active_tab = Some(tab);
    }

    /// Groups whose items survive the query; empty groups are dropped
    pub fn filtered_groups<'c>(&self, content: &'c PortfolioContent) -> Vec<FilteredGroup<'c>> {
        let query = self.query.trim();
        content
            .skill_groups
            .iter()
            .filter_map(|group| {
                let items: Vec<&'static str> = group
                    .items
                    .iter()
                    .copied()
                    .filter(|skill| skill_matches_query(skill, query))
                    .collect();
                if items.is_empty() {
                    None
                } else {
                    Some(FilteredGroup { group, items })
                }
            })
            .collect()
    }

    /// All visible skills flattened in display order (cursor target list)
    pub fn flattened_skills(&self, content: &PortfolioContent) -> Vec<&'static str> {
        self.filtered_groups(content)
            .into_iter()
            .flat_map(|g| g.items)
            .collect()
    }

    pub fn related_projects<'c>(&self, content: &'c PortfolioContent) -> Vec<&'c Project> {
        let Some(selected) = &self.selected else {
            return Vec::new();
        };
        content
            .projects
            .iter()
            .filter(|p| has_skill(&tags_for_project(p), selected))
            .collect()
    }

    pub fn related_experience<'c>(
        &self,
        content: &'c PortfolioContent,
    ) -> Vec<&'c ExperienceEntry> {
        let Some(selected) = &self.selected else {
            return Vec::new();
        };
        content
            .experience
            .iter()
            .filter(|x| has_skill(&tags_for_experience(x), selected))
            .collect()
    }

    pub fn related_education<'c>(&self, content: &'c PortfolioContent) -> Vec<&'c EducationEntry> {
        let Some(selected) = &self.selected else {
            return Vec::new();
        };
        content
            .education
            .education
            .iter()
            .filter(|e| has_skill(&tags_for_education(e), selected))
            .collect()
    }

    pub fn related_certifications<'c>(
        &self,
        content: &'c PortfolioContent,
    ) -> Vec<&'c Certification> {
        let Some(selected) = &self.selected else {
            return Vec::new();
        };
        content
            .education
            .certifications
            .iter()
            .filter(|c| has_skill(&tags_for_cert(c), selected))
            .collect()
    }

    /// Match counts per tab, in precedence order
    pub fn counts(&self, content: &PortfolioContent) -> [(Tab, usize); 4] {
        Tab::ALL.map(|tab| (tab, self.related_count(tab, content)))
    }

    fn related_count(&self, tab: Tab, content: &PortfolioContent) -> usize {
        match tab {
            Tab::Projects => self.related_projects(content).len(),
            Tab::Experience => self.related_experience(content).len(),
            Tab::Education => self.related_education(content).len(),
            Tab::Certifications => self.related_certifications(content).len(),
        }
    }

    /// Tabs with at least one match, precedence order preserved
    pub fn visible_tabs(&self, content: &PortfolioContent) -> Vec<Tab> {
        self.counts(content)
            .into_iter()
            .filter(|&(_, n)| n > 0)
            .map(|(tab, _)| tab)
            .collect()
    }

    /// First tab with matches for a skill: projects > experience >
    /// education > certifications, defaulting to projects.
    pub fn preferred_tab_for(&self, skill: &str, content: &PortfolioContent) -> Tab {
        if content
            .projects
            .iter()
            .any(|p| has_skill(&tags_for_project(p), skill))
        {
            return Tab::Projects;
        }
        if content
            .experience
            .iter()
            .any(|x| has_skill(&tags_for_experience(x), skill))
        {
            return Tab::Experience;
        }
        if content
            .education
            .education
            .iter()
            .any(|e| has_skill(&tags_for_education(e), skill))
        {
            return Tab::Education;
        }
        if content
            .education
            .certifications
            .iter()
            .any(|c| has_skill(&tags_for_cert(c), skill))
        {
            return Tab::Certifications;
        }
        Tab::Projects
    }

    /// Toggle semantics: same skill clears, a different one replaces the
    /// whole selection and re-routes the result tab.
    pub fn select_skill(&mut self, skill: &str, content: &PortfolioContent) {
        let same = self
            .selected
            .as_deref()
            .is_some_and(|prev| normalize(prev) == normalize(skill));
        if same {
            self.selected = None;
            return;
        }
        self.active_tab = Some(self.preferred_tab_for(skill, content));
        self.selected = Some(skill.to_string());
    }

    /// Editing the query resets the current selection
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.selected = None;
        self.expanded.clear();
        self.active_tab = Some(Tab::Projects);
        self.cursor = 0;
    }

    pub fn push_query_char(&mut self, c: char) {
        let mut q = self.query.clone();
        q.push(c);
        self.set_query(q);
    }

    pub fn pop_query_char(&mut self) {
        let mut q = self.query.clone();
        q.pop();
        self.set_query(q);
    }

    pub fn clear(&mut self) {
        self.query.clear();
        self.selected = None;
        self.expanded.clear();
        self.active_tab = Some(Tab::Projects);
        self.cursor = 0;
    }

    /// If the active tab lost all matches while others still have some,
    /// hop to the first non-empty tab in precedence order.
    pub fn ensure_valid_tab(&mut self, content: &PortfolioContent) {
        if self.selected.is_none() {
            return;
        }
        let visible = self.visible_tabs(content);
        if visible.is_empty() {
            return;
        }
        if !visible.contains(&self.active_tab()) {
            self.active_tab = Some(visible[0]);
        }
    }

    /// Cycle the active tab through visible tabs (forwards or backwards)
    pub fn cycle_tab(&mut self, content: &PortfolioContent, forward: bool) {
        let visible = self.visible_tabs(content);
        if visible.is_empty() {
            return;
        }
        let current = self.active_tab();
        let pos = visible.iter().position(|&t| t == current).unwrap_or(0);
        let next = if forward {
            (pos + 1) % visible.len()
        } else {
            (pos + visible.len() - 1) % visible.len()
        };
        self.active_tab = Some(visible[next]);
    }

    pub fn toggle_expanded(&mut self, id: &str) {
        if !self.expanded.remove(id) {
            self.expanded.insert(id.to_string());
        }
    }

    pub fn move_cursor(&mut self, content: &PortfolioContent, delta: i64) {
        let len = self.flattened_skills(content).len();
        if len == 0 {
            self.cursor = 0;
            return;
        }
        let cur = self.cursor.min(len - 1) as i64;
        self.cursor = (cur + delta).clamp(0, len as i64 - 1) as usize;
    }

    /// Select the skill under the cursor
    pub fn select_at_cursor(&mut self, content: &PortfolioContent) {
        let skills = self.flattened_skills(content);
        if let Some(&skill) = skills.get(self.cursor.min(skills.len().saturating_sub(1))) {
            self.select_skill(skill, content);
        }
    }
}

/// Stable identifier for an experience entry (expand/collapse key)
pub fn experience_id(x: &ExperienceEntry) -> String {
    format!("{}-{}-{}", x.role, x.org, x.dates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::portfolio;

    #[test]
    fn normalize_collapses_case_and_whitespace() {
        assert_eq!(normalize("  Tailwind   CSS "), "tailwind css");
        assert_eq!(normalize("SQL"), "sql");
    }

    #[test]
    fn query_filter_is_case_insensitive_substring() {
        let content = portfolio();
        let mut state = ExplorerState::new();
        state.set_query("Pyth");

        let matches = state.flattened_skills(&content);
        assert!(matches.contains(&"Python"));
        assert!(matches.iter().all(|s| normalize(s).contains("pyth")));
    }

    #[test]
    fn empty_groups_are_dropped_from_results() {
        let content = portfolio();
        let mut state = ExplorerState::new();
        state.set_query("zxcvbn-no-such-skill");
        assert!(state.filtered_groups(&content).is_empty());
    }

    #[test]
    fn tag_on_projects_and_experience_routes_to_projects() {
        let content = portfolio();
        let mut state = ExplorerState::new();
        // "Salesforce" appears on experience only; "Python" on a project.
        state.select_skill("Python", &content);
        assert_eq!(state.active_tab(), Tab::Projects);
        assert!(!state.related_projects(&content).is_empty());
    }

    #[test]
    fn cert_only_tag_routes_to_certifications() {
        let content = portfolio();
        let mut state = ExplorerState::new();
        // "Access Control" is tagged only on a certification.
        state.select_skill("Access Control", &content);
        assert_eq!(state.active_tab(), Tab::Certifications);
        assert!(state.related_projects(&content).is_empty());
        assert!(!state.related_certifications(&content).is_empty());
    }

    #[test]
    fn experience_only_tag_routes_to_experience() {
        let content = portfolio();
        let mut state = ExplorerState::new();
        state.select_skill("Salesforce", &content);
        assert_eq!(state.active_tab(), Tab::Experience);
    }

    #[test]
    fn selection_is_single_and_replacing() {
        let content = portfolio();
        let mut state = ExplorerState::new();
        state.select_skill("Python", &content);
        state.select_skill("Access Control", &content);

        assert_eq!(state.selected.as_deref(), Some("Access Control"));
        // The previous selection's matches are gone entirely.
        assert!(state
            .related_projects(&content)
            .iter()
            .all(|p| p.tech.iter().any(|t| normalize(t) == "access control")));
    }

    #[test]
    fn reselecting_the_same_skill_clears() {
        let content = portfolio();
        let mut state = ExplorerState::new();
        state.select_skill("Python", &content);
        state.select_skill("python", &content); // normalized match
        assert!(state.selected.is_none());
    }

    #[test]
    fn editing_query_resets_selection() {
        let content = portfolio();
        let mut state = ExplorerState::new();
        state.select_skill("Python", &content);
        state.push_query_char('a');
        assert!(state.selected.is_none());
        assert_eq!(state.active_tab(), Tab::Projects);
    }

    #[test]
    fn experience_tags_merge_tech_and_tags_without_duplicates() {
        let x = ExperienceEntry {
            role: "r",
            org: "o",
            dates: "d",
            location: None,
            bullets: vec![],
            tech: vec!["SQL", "Python"],
            tags: vec!["Python", "Networks"],
        };
        assert_eq!(tags_for_experience(&x), vec!["SQL", "Python", "Networks"]);
    }

    #[test]
    fn tag_match_is_exact_after_normalization() {
        let content = portfolio();
        let mut state = ExplorerState::new();
        // Substring of a real tag, but not an exact tag itself.
        state.select_skill("Sales", &content);
        assert!(state.related_experience(&content).is_empty());
    }

    #[test]
    fn ensure_valid_tab_hops_to_first_non_empty() {
        let content = portfolio();
        let mut state = ExplorerState::new();
        state.select_skill("Access Control", &content);
        state.set_active_tab(Tab::Projects); // force an empty tab
        state.ensure_valid_tab(&content);
        assert_eq!(state.active_tab(), Tab::Certifications);
    }
}
