use crate::dataset::{Dataset, EmployeeRecord};

use super::fields::NameField;

pub(in crate::directory) fn matching<'a, F>(
    dataset: &'a Dataset,
    value: &str,
    field: F,
) -> Vec<&'a EmployeeRecord>
where
    F: Fn(&EmployeeRecord) -> &str,
{
    dataset
        .records()
        .iter()
        .filter(|r| field(*r) == value)
        .collect()
}

pub(in crate::directory) fn by_department<'a>(
    dataset: &'a Dataset,
    department: &str,
) -> Vec<&'a EmployeeRecord> {
    matching(dataset, department, |r| r.department.as_str())
}

pub(in crate::directory) fn by_role<'a>(dataset: &'a Dataset, role: &str) -> Vec<&'a EmployeeRecord> {
    matching(dataset, role, |r| r.role.as_str())
}

pub(in crate::directory) fn by_name<'a>(
    dataset: &'a Dataset,
    field: NameField,
    query: &str,
) -> Vec<&'a EmployeeRecord> {
    matching(dataset, query, |r| field.value(r))
}
