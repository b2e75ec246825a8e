use std::collections::HashSet;
use std::path::Path;

use itertools::Itertools;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::utils;

const EMBEDDED_EMPLOYEES: &str = include_str!("../../data/employees.json");

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    pub id: u32,
    pub first_name: String,
    pub last_name: String,
    pub department: String,
    pub role: String,
    pub email: String,
    #[serde(deserialize_with = "text_or_number")]
    pub office_ext: String,
}

fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Int(n) => n.to_string(),
        Raw::Float(f) => f.to_string(),
    })
}

impl EmployeeRecord {
    pub const FIELD_NAMES: [&'static str; 7] = [
        "id",
        "first_name",
        "last_name",
        "department",
        "role",
        "email",
        "office_ext",
    ];

    pub fn cells(&self) -> [String; 7] {
        [
            self.id.to_string(),
            self.first_name.clone(),
            self.last_name.clone(),
            self.department.clone(),
            self.role.clone(),
            self.email.clone(),
            self.office_ext.clone(),
        ]
    }
}

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset: {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse dataset: {source}")]
    Parse {
        #[source]
        source: serde_json::Error,
    },

    #[error("dataset contains no employees")]
    Empty,

    #[error("duplicate employee id {id}")]
    DuplicateId { id: u32 },
}

#[derive(Clone, Debug)]
pub struct Dataset {
    records: Vec<EmployeeRecord>,
}

impl Dataset {
    pub fn new(records: Vec<EmployeeRecord>) -> Result<Self, DatasetError> {
        if records.is_empty() {
            return Err(DatasetError::Empty);
        }
        let mut seen = HashSet::with_capacity(records.len());
        for r in records.iter() {
            if !seen.insert(r.id) {
                return Err(DatasetError::DuplicateId { id: r.id });
            }
        }
        Ok(Self { records })
    }

    pub fn embedded() -> Result<Self, DatasetError> {
        Self::from_json_str(EMBEDDED_EMPLOYEES)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, DatasetError> {
        let records = serde_json::from_str::<Vec<EmployeeRecord>>(raw)
            .map_err(|source| DatasetError::Parse { source })?;
        Self::new(records)
    }

    pub fn load(path: &Path) -> Result<Self, DatasetError> {
        let raw = std::fs::read_to_string(path).map_err(|source| DatasetError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let dataset = Self::from_json_str(&raw)?;
        tracing::info!(
            path = %path.display(),
            employees = dataset.len(),
            "loaded dataset"
        );
        Ok(dataset)
    }

    pub fn records(&self) -> &[EmployeeRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn in_id_order(&self) -> Vec<&EmployeeRecord> {
        self.records.iter().sorted_by_key(|r| r.id).collect()
    }

    pub fn departments(&self) -> Vec<&str> {
        self.records
            .iter()
            .map(|r| r.department.as_str())
            .unique()
            .collect()
    }

    pub fn roles(&self) -> Vec<&str> {
        self.records
            .iter()
            .map(|r| r.role.as_str())
            .unique()
            .collect()
    }

    pub fn column_labels() -> Vec<String> {
        EmployeeRecord::FIELD_NAMES
            .iter()
            .map(|name| utils::humanize_field_name(name))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u32, first: &str, dept: &str, role: &str) -> EmployeeRecord {
        EmployeeRecord {
            id,
            first_name: first.to_string(),
            last_name: "Doe".to_string(),
            department: dept.to_string(),
            role: role.to_string(),
            email: format!("{}@example.com", first.to_lowercase()),
            office_ext: "100".to_string(),
        }
    }

    #[test]
    fn embedded_dataset_loads() {
        let ds = Dataset::embedded().unwrap();
        assert!(!ds.is_empty());
        let ids: Vec<u32> = ds.in_id_order().iter().map(|r| r.id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = Dataset::new(vec![
            record(1, "Bob", "Sales", "Rep"),
            record(1, "Amy", "IT", "Dev"),
        ])
        .unwrap_err();
        assert!(matches!(err, DatasetError::DuplicateId { id: 1 }));
    }

    #[test]
    fn rejects_empty_array() {
        assert!(matches!(
            Dataset::from_json_str("[]").unwrap_err(),
            DatasetError::Empty
        ));
    }

    #[test]
    fn accepts_numeric_office_ext() {
        let ds = Dataset::from_json_str(
            r#"[
              {"id":1,"first_name":"Bob","last_name":"Doe","department":"Sales","role":"Rep","email":"b@x","office_ext":4101},
              {"id":2,"first_name":"Amy","last_name":"Doe","department":"IT","role":"Dev","email":"a@x","office_ext":"0042"}
            ]"#,
        )
        .unwrap();
        assert_eq!(ds.records()[0].office_ext, "4101");
        assert_eq!(ds.records()[1].office_ext, "0042");
        assert_eq!(ds.records()[0].cells()[6], "4101");
    }

    #[test]
    fn rejects_non_scalar_office_ext() {
        let err = Dataset::from_json_str(
            r#"[{"id":1,"first_name":"Bob","last_name":"Doe","department":"Sales","role":"Rep","email":"b@x","office_ext":[1]}]"#,
        )
        .unwrap_err();
        assert!(matches!(err, DatasetError::Parse { .. }));
    }

    #[test]
    fn rejects_missing_fields() {
        let err = Dataset::from_json_str(r#"[{"id": 1, "first_name": "Bob"}]"#).unwrap_err();
        assert!(matches!(err, DatasetError::Parse { .. }));
    }

    #[test]
    fn distinct_values_keep_first_appearance_order() {
        let ds = Dataset::new(vec![
            record(3, "Cy", "Sales", "Rep"),
            record(1, "Bob", "IT", "Dev"),
            record(2, "Amy", "Sales", "Manager"),
            record(4, "Di", "IT", "Rep"),
        ])
        .unwrap();
        assert_eq!(ds.departments(), vec!["Sales", "IT"]);
        assert_eq!(ds.roles(), vec!["Rep", "Dev", "Manager"]);
    }

    #[test]
    fn in_id_order_does_not_touch_load_order() {
        let ds = Dataset::new(vec![record(2, "Amy", "IT", "Dev"), record(1, "Bob", "Sales", "Rep")])
            .unwrap();
        let ids: Vec<u32> = ds.in_id_order().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(ds.records()[0].id, 2);
    }

    #[test]
    fn field_names_match_serialized_keys() {
        let value = serde_json::to_value(record(1, "Bob", "Sales", "Rep")).unwrap();
        let keys: HashSet<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(|k| k.as_str())
            .collect();
        let expected: HashSet<&str> = EmployeeRecord::FIELD_NAMES.iter().copied().collect();
        assert_eq!(keys, expected);
    }

    #[test]
    fn column_labels_are_humanized() {
        assert_eq!(
            Dataset::column_labels(),
            vec![
                "Id",
                "First name",
                "Last name",
                "Department",
                "Role",
                "Email",
                "Office ext"
            ]
        );
    }

    #[test]
    fn load_reads_file_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(
            &mut file,
            br#"[{"id":7,"first_name":"Bob","last_name":"Doe","department":"Sales","role":"Rep","email":"b@x","office_ext":"1"}]"#,
        )
        .unwrap();
        let ds = Dataset::load(file.path()).unwrap();
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.records()[0].id, 7);
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Dataset::load(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, DatasetError::Read { .. }));
    }
}
