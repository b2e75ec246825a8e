use proptest::prelude::*;

use crate::dataset::{Dataset, EmployeeRecord};
use crate::directory::{Action, Directory, DirectoryError, NameField, SortField};

fn employee(id: u32, first: &str, last: &str, dept: &str, role: &str) -> EmployeeRecord {
    EmployeeRecord {
        id,
        first_name: first.to_string(),
        last_name: last.to_string(),
        department: dept.to_string(),
        role: role.to_string(),
        email: format!("{}.{}@example.com", first, last).to_lowercase(),
        office_ext: format!("{:04}", id),
    }
}

fn ids(dir: &Directory<'_>) -> Vec<u32> {
    dir.display().iter().map(|r| r.id).collect()
}

#[test]
fn two_employee_walkthrough() {
    let ds = Dataset::new(vec![
        employee(1, "Bob", "Stone", "Sales", "Rep"),
        employee(2, "Amy", "Reed", "IT", "Engineer"),
    ])
    .unwrap();
    let mut dir = Directory::new(&ds);

    dir.apply(Action::Sort(SortField::from_label("First name")))
        .unwrap();
    assert_eq!(ids(&dir), vec![2, 1]);

    dir.apply(Action::FilterDepartment("IT".to_string())).unwrap();
    assert_eq!(ids(&dir), vec![2]);

    dir.apply(Action::Reset).unwrap();
    assert_eq!(ids(&dir), vec![1, 2]);

    dir.apply(Action::SetFirstName("Zed".to_string())).unwrap();
    let err = dir.apply(Action::SearchFirstName).unwrap_err();
    assert_eq!(
        err,
        DirectoryError::NotFound {
            field: NameField::First,
            query: "Zed".to_string()
        }
    );
    assert_eq!(ids(&dir), vec![1, 2]);
    assert_eq!(dir.first_name_query(), "");
}

#[test]
fn bundled_directory_supports_every_filter_value() {
    let ds = Dataset::embedded().unwrap();
    let mut dir = Directory::new(&ds);
    for dept in ds.departments() {
        dir.filter_department(dept);
        assert!(!dir.display().is_empty());
        assert!(dir.display().iter().all(|r| r.department == dept));
    }
    for role in ds.roles() {
        dir.filter_role(role);
        assert!(!dir.display().is_empty());
        assert!(dir.display().iter().all(|r| r.role == role));
    }
}

fn arb_dataset() -> impl Strategy<Value = Dataset> {
    let row = (
        "[AaBb]{1,2}",
        "[CcDd]{1,2}",
        prop::sample::select(vec!["Sales", "IT", "Finance"]),
        prop::sample::select(vec!["Manager", "Engineer", "Rep"]),
    );
    prop::collection::vec(row, 1..10).prop_map(|rows| {
        let n = rows.len() as u32;
        let records = rows
            .into_iter()
            .enumerate()
            .map(|(i, (first, last, dept, role))| {
                // ids descend so load order differs from id order
                employee(n - i as u32, &first, &last, dept, role)
            })
            .collect();
        Dataset::new(records).unwrap()
    })
}

fn arb_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        prop::sample::select(SortField::ALL.to_vec()).prop_map(Action::Sort),
        prop::sample::select(vec!["Sales", "IT", "Legal"])
            .prop_map(|d| Action::FilterDepartment(d.to_string())),
        prop::sample::select(vec!["Manager", "Rep", "Intern"])
            .prop_map(|r| Action::FilterRole(r.to_string())),
        Just(Action::Reset),
        "[AaBb]{0,2}".prop_map(Action::SetFirstName),
        "[CcDd]{0,2}".prop_map(Action::SetLastName),
        Just(Action::SearchFirstName),
        Just(Action::SearchLastName),
    ]
}

fn run_actions(dir: &mut Directory<'_>, actions: Vec<Action>) {
    for action in actions {
        let _ = dir.apply(action);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn sort_is_ordered_and_idempotent(
        ds in arb_dataset(),
        field in prop::sample::select(SortField::ALL.to_vec()),
        actions in prop::collection::vec(arb_action(), 0..6),
    ) {
        let mut dir = Directory::new(&ds);
        run_actions(&mut dir, actions);
        dir.sort_by(field);
        let once = ids(&dir);
        for pair in dir.display().windows(2) {
            prop_assert_ne!(field.compare(pair[0], pair[1]), std::cmp::Ordering::Greater);
        }
        dir.sort_by(field);
        prop_assert_eq!(ids(&dir), once);
    }

    #[test]
    fn reset_always_yields_id_order(
        ds in arb_dataset(),
        actions in prop::collection::vec(arb_action(), 0..8),
    ) {
        let mut dir = Directory::new(&ds);
        run_actions(&mut dir, actions);
        dir.reset();
        let mut expected: Vec<u32> = ds.records().iter().map(|r| r.id).collect();
        expected.sort_unstable();
        prop_assert_eq!(ids(&dir), expected);
    }

    #[test]
    fn department_filter_is_the_exact_subsequence(
        ds in arb_dataset(),
        dept in prop::sample::select(vec!["Sales", "IT", "Finance", "Legal"]),
        actions in prop::collection::vec(arb_action(), 0..6),
    ) {
        let mut dir = Directory::new(&ds);
        run_actions(&mut dir, actions);
        dir.filter_department(dept);
        let expected: Vec<u32> = ds
            .records()
            .iter()
            .filter(|r| r.department == dept)
            .map(|r| r.id)
            .collect();
        prop_assert_eq!(ids(&dir), expected);
    }

    #[test]
    fn first_name_search_matches_exactly_or_leaves_view(
        ds in arb_dataset(),
        query in "[AaBb]{1,2}",
        actions in prop::collection::vec(arb_action(), 0..6),
    ) {
        let mut dir = Directory::new(&ds);
        run_actions(&mut dir, actions);
        let before = ids(&dir);
        dir.set_first_name(query.as_str());
        let expected: Vec<u32> = ds
            .records()
            .iter()
            .filter(|r| r.first_name == query)
            .map(|r| r.id)
            .collect();
        match dir.search_first_name() {
            Ok(()) => prop_assert_eq!(ids(&dir), expected),
            Err(DirectoryError::NotFound { field, query: missed }) => {
                prop_assert!(expected.is_empty());
                prop_assert_eq!(field, NameField::First);
                prop_assert_eq!(missed, query);
                prop_assert_eq!(ids(&dir), before);
            }
        }
        prop_assert_eq!(dir.first_name_query(), "");
    }

    #[test]
    fn empty_first_name_search_equals_last_name_search(
        ds in arb_dataset(),
        last in "[CcDd]{0,2}",
        actions in prop::collection::vec(arb_action(), 0..6),
    ) {
        let mut via_first = Directory::new(&ds);
        run_actions(&mut via_first, actions);
        let mut via_last = via_first.clone();

        via_first.set_first_name("");
        via_first.set_last_name(last.as_str());
        let a = via_first.search_first_name();

        via_last.set_last_name(last.as_str());
        let b = via_last.search_last_name();

        prop_assert_eq!(a, b);
        prop_assert_eq!(ids(&via_first), ids(&via_last));
        prop_assert_eq!(via_first.last_name_query(), "");
    }
}
