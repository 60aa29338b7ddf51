//! Search and facet filtering over an issue collection.
//!
//! All active predicates are combined with logical AND. Filtering is a
//! stable pass over the input: the output keeps the input's relative
//! order and the source collection is never mutated.

use serde::{Deserialize, Serialize};

use crate::models::issue::{Category, Issue, IssueStatus, Priority};

/// A facet value, or `All` to leave the dimension unfiltered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Selection<T> {
    All,
    Only(T),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Selection::All
    }
}

impl<T: PartialEq> Selection<T> {
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(wanted) => wanted == value,
        }
    }
}

impl<T> Selection<T> {
    /// Parse a select-box value where `"all"` means no filtering.
    pub fn from_param(raw: &str, parse: impl FnOnce(&str) -> Option<T>) -> Option<Self> {
        if raw == "all" {
            Some(Selection::All)
        } else {
            parse(raw).map(Selection::Only)
        }
    }
}

/// Which text fields the search string is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchScope {
    #[default]
    TitleAndDescription,
    /// Title, description, and category name.
    IncludingCategory,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IssueFilter {
    pub search: String,
    pub status: Selection<IssueStatus>,
    pub category: Selection<Category>,
    pub priority: Selection<Priority>,
    #[serde(default)]
    pub scope: SearchScope,
}

impl IssueFilter {
    pub fn search(text: impl Into<String>) -> Self {
        Self {
            search: text.into(),
            ..Self::default()
        }
    }

    pub fn with_scope(mut self, scope: SearchScope) -> Self {
        self.scope = scope;
        self
    }

    pub fn with_status(mut self, status: IssueStatus) -> Self {
        self.status = Selection::Only(status);
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Selection::Only(category);
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Selection::Only(priority);
        self
    }

    pub fn is_wildcard(&self) -> bool {
        self.search.is_empty()
            && self.status == Selection::All
            && self.category == Selection::All
            && self.priority == Selection::All
    }

    pub fn matches(&self, issue: &Issue) -> bool {
        self.matches_lowered(issue, &self.search.to_lowercase())
    }

    fn matches_lowered(&self, issue: &Issue, needle: &str) -> bool {
        self.status.admits(&issue.status)
            && self.category.admits(&issue.category)
            && self.priority.admits(&issue.priority)
            && self.matches_text(issue, needle)
    }

    fn matches_text(&self, issue: &Issue, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        issue.title.to_lowercase().contains(needle)
            || issue.description.to_lowercase().contains(needle)
            || (self.scope == SearchScope::IncludingCategory
                && issue.category.as_str().to_lowercase().contains(needle))
    }

    /// Borrowing view of the issues that satisfy every active predicate.
    pub fn apply<'a>(&self, issues: &'a [Issue]) -> Vec<&'a Issue> {
        let needle = self.search.to_lowercase();
        issues
            .iter()
            .filter(|issue| self.matches_lowered(issue, &needle))
            .collect()
    }

    /// Owned variant of [`apply`](Self::apply).
    pub fn apply_owned(&self, issues: &[Issue]) -> Vec<Issue> {
        self.apply(issues).into_iter().cloned().collect()
    }
}
