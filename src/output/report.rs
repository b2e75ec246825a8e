use std::fmt::Write as _;

use serde::Serialize;

use super::View;
use crate::dataset::{Dataset, EmployeeRecord};
use crate::directory::SortField;
use crate::utils::escape_html;

fn json_for_script_tag(value: &str) -> String {
    value.replace("</", "<\\/")
}

#[derive(Serialize)]
struct Payload<'a> {
    employees: &'a [EmployeeRecord],
    display: Vec<u32>,
    sortable: Vec<&'static str>,
}

fn options(values: &[&str]) -> String {
    let mut out = String::new();
    for v in values {
        let v = escape_html(v);
        let _ = writeln!(out, r#"          <option value="{v}">{v}</option>"#);
    }
    out
}

fn sort_options(labels: &[String]) -> String {
    let mut out = String::new();
    for label in labels {
        let key = escape_html(SortField::from_label(label).key());
        let label = escape_html(label);
        let _ = writeln!(
            out,
            r#"          <option value="{key}">{label}</option>"#
        );
    }
    out
}

fn header_cells(labels: &[String]) -> String {
    let mut out = String::new();
    for label in labels {
        let _ = writeln!(out, "          <th>{}</th>", escape_html(label));
    }
    out
}

fn body_rows(records: &[&EmployeeRecord]) -> String {
    let mut out = String::new();
    for r in records {
        out.push_str("        <tr>");
        for cell in r.cells().iter() {
            let _ = write!(out, "<td>{}</td>", escape_html(cell));
        }
        out.push_str("</tr>\n");
    }
    out
}

pub fn render_html(view: &View<'_>) -> Vec<u8> {
    let payload = Payload {
        employees: view.dataset.records(),
        display: view.display.iter().map(|r| r.id).collect(),
        sortable: SortField::ALL.iter().map(|f| f.key()).collect(),
    };
    let json = serde_json::to_string(&payload).unwrap_or_else(|_| "{}".to_string());
    let json = json_for_script_tag(&json);

    let labels = Dataset::column_labels();
    let title = escape_html(view.title);
    let sort_opts = sort_options(&labels);
    let dept_opts = options(&view.dataset.departments());
    let role_opts = options(&view.dataset.roles());
    let head = header_cells(&labels);
    let rows = body_rows(view.display);

    let html = format!(
        r####"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8"/>
  <meta content="width=device-width, initial-scale=1.0" name="viewport"/>
  <title>{title}</title>
  <style>
    body {{ font-family: system-ui, sans-serif; margin: 0; background: #f8fafc; color: #0f172a; }}
    header {{ background: #135bec; color: #fff; padding: 1.5rem 2rem; }}
    header h1 {{ margin: 0; font-size: 1.75rem; }}
    main {{ max-width: 1200px; margin: 0 auto; padding: 1.5rem 2rem; }}
    .controls {{ display: flex; flex-wrap: wrap; gap: 0.75rem; margin-bottom: 1rem; align-items: center; }}
    select, input, button {{ font: inherit; padding: 0.4rem 0.6rem; border: 1px solid #cbd5e1; border-radius: 0.375rem; background: #fff; }}
    button {{ cursor: pointer; }}
    form {{ display: flex; gap: 0.5rem; }}
    table {{ width: 100%; border-collapse: collapse; background: #fff; }}
    table.bordered th, table.bordered td {{ border: 1px solid #e2e8f0; padding: 0.5rem 0.75rem; text-align: left; }}
    table.striped tbody tr:nth-child(odd) {{ background: #f1f5f9; }}
    table.hover tbody tr:hover {{ background: #e0e7ff; }}
  </style>
</head>
<body>
  <script type="application/json" id="directory-data">{json}</script>
  <header><h1>{title}</h1></header>
  <main>
    <div class="controls">
      <select id="sort" aria-label="Sort">
        <option value="" selected>Sort</option>
{sort_opts}      </select>
      <select id="filter-department" aria-label="Filter by Department">
        <option value="" selected>Filter by Department</option>
{dept_opts}      </select>
      <select id="filter-role" aria-label="Filter by Role">
        <option value="" selected>Filter by Role</option>
{role_opts}      </select>
      <button id="reset" type="button">Reset Table</button>
    </div>
    <div class="controls">
      <form id="search-first">
        <input id="first-name" type="text" placeholder="First name" autocomplete="off"/>
        <button type="submit">Search</button>
      </form>
      <form id="search-last">
        <input id="last-name" type="text" placeholder="Last name" autocomplete="off"/>
        <button type="submit">Search</button>
      </form>
    </div>
    <table class="striped bordered hover">
      <thead>
        <tr>
{head}        </tr>
      </thead>
      <tbody id="table-body">
{rows}      </tbody>
    </table>
  </main>

  <script>
    (function() {{
      const payload = JSON.parse(document.getElementById('directory-data').textContent);
      const employees = payload.employees;
      const sortable = new Set(payload.sortable);
      const byId = new Map(employees.map(e => [e.id, e]));
      const columns = ['id', 'first_name', 'last_name', 'department', 'role', 'email', 'office_ext'];
      let display = payload.display.map(id => byId.get(id));

      function escapeHtml(value) {{
        return String(value)
          .replaceAll('&', '&amp;')
          .replaceAll('<', '&lt;')
          .replaceAll('>', '&gt;')
          .replaceAll('"', '&quot;')
          .replaceAll("'", '&#39;');
      }}

      function render() {{
        document.getElementById('table-body').innerHTML = display
          .map(e => '<tr>' + columns.map(c => `<td>${{escapeHtml(e[c])}}</td>`).join('') + '</tr>')
          .join('');
      }}

      function compareBy(key) {{
        return (a, b) => (a[key] < b[key] ? -1 : a[key] > b[key] ? 1 : 0);
      }}

      function sortBy(key) {{
        display = display.slice().sort(compareBy(sortable.has(key) ? key : 'id'));
        render();
      }}

      function filterBy(key, value) {{
        display = employees.filter(e => e[key] === value);
        render();
      }}

      function reset() {{
        display = employees.slice().sort(compareBy('id'));
        render();
      }}

      function search(key, input) {{
        const query = input.value;
        input.value = '';
        const found = employees.filter(e => e[key] === query);
        if (found.length === 0) {{
          alert(`"${{query}}" is not in this database.`);
          return;
        }}
        display = found;
        render();
      }}

      function bindSelect(id, handler) {{
        const el = document.getElementById(id);
        el.addEventListener('change', () => {{
          if (el.value !== '') handler(el.value);
          el.value = '';
        }});
      }}

      const firstInput = document.getElementById('first-name');
      const lastInput = document.getElementById('last-name');

      bindSelect('sort', sortBy);
      bindSelect('filter-department', v => filterBy('department', v));
      bindSelect('filter-role', v => filterBy('role', v));
      document.getElementById('reset').addEventListener('click', reset);
      document.getElementById('search-first').addEventListener('submit', ev => {{
        ev.preventDefault();
        if (firstInput.value === '') {{
          search('last_name', lastInput);
          return;
        }}
        search('first_name', firstInput);
      }});
      document.getElementById('search-last').addEventListener('submit', ev => {{
        ev.preventDefault();
        search('last_name', lastInput);
      }});
    }})();
  </script>
</body>
</html>
"####
    );

    html.into_bytes()
}
