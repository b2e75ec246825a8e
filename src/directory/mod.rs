mod fields;
mod filters;

use thiserror::Error;

use crate::dataset::{Dataset, EmployeeRecord};

pub use fields::{NameField, SortField};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    #[error("\"{query}\" is not in this database.")]
    NotFound { field: NameField, query: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Sort(SortField),
    FilterDepartment(String),
    FilterRole(String),
    Reset,
    SetFirstName(String),
    SetLastName(String),
    SearchFirstName,
    SearchLastName,
}

#[derive(Clone, Debug)]
pub struct Directory<'a> {
    dataset: &'a Dataset,
    display: Vec<&'a EmployeeRecord>,
    first_name: String,
    last_name: String,
}

impl<'a> Directory<'a> {
    pub fn new(dataset: &'a Dataset) -> Self {
        Self {
            dataset,
            display: dataset.in_id_order(),
            first_name: String::new(),
            last_name: String::new(),
        }
    }

    pub fn dataset(&self) -> &'a Dataset {
        self.dataset
    }

    pub fn display(&self) -> &[&'a EmployeeRecord] {
        &self.display
    }

    pub fn first_name_query(&self) -> &str {
        &self.first_name
    }

    pub fn last_name_query(&self) -> &str {
        &self.last_name
    }

    pub fn apply(&mut self, action: Action) -> Result<(), DirectoryError> {
        match action {
            Action::Sort(field) => self.sort_by(field),
            Action::FilterDepartment(value) => self.filter_department(&value),
            Action::FilterRole(value) => self.filter_role(&value),
            Action::Reset => self.reset(),
            Action::SetFirstName(text) => self.set_first_name(text),
            Action::SetLastName(text) => self.set_last_name(text),
            Action::SearchFirstName => return self.search_first_name(),
            Action::SearchLastName => return self.search_last_name(),
        }
        Ok(())
    }

    /// Reorders whatever is currently shown, unlike filters, searches, and
    /// reset, which start over from the dataset. Stable.
    pub fn sort_by(&mut self, field: SortField) {
        self.display.sort_by(|a, b| field.compare(a, b));
        tracing::debug!(field = field.key(), shown = self.display.len(), "sorted");
    }

    pub fn filter_department(&mut self, department: &str) {
        self.display = filters::by_department(self.dataset, department);
        tracing::debug!(department, shown = self.display.len(), "filtered by department");
    }

    pub fn filter_role(&mut self, role: &str) {
        self.display = filters::by_role(self.dataset, role);
        tracing::debug!(role, shown = self.display.len(), "filtered by role");
    }

    pub fn reset(&mut self) {
        self.display = self.dataset.in_id_order();
        tracing::debug!(shown = self.display.len(), "reset");
    }

    pub fn set_first_name(&mut self, text: impl Into<String>) {
        self.first_name = text.into();
    }

    pub fn set_last_name(&mut self, text: impl Into<String>) {
        self.last_name = text.into();
    }

    /// Exact-match search on first name. An empty query falls through to a
    /// last-name search with the pending last-name buffer.
    pub fn search_first_name(&mut self) -> Result<(), DirectoryError> {
        let query = std::mem::take(&mut self.first_name);
        if query.is_empty() {
            return self.search_last_name();
        }
        self.search(NameField::First, query)
    }

    pub fn search_last_name(&mut self) -> Result<(), DirectoryError> {
        let query = std::mem::take(&mut self.last_name);
        self.search(NameField::Last, query)
    }

    fn search(&mut self, field: NameField, query: String) -> Result<(), DirectoryError> {
        let found = filters::by_name(self.dataset, field, &query);
        if found.is_empty() {
            tracing::warn!(%field, query = %query, "no matching employee");
            return Err(DirectoryError::NotFound { field, query });
        }
        tracing::debug!(%field, query = %query, shown = found.len(), "search matched");
        self.display = found;
        Ok(())
    }
}
