pub mod report;

use colored::Colorize;

use crate::dataset::{Dataset, EmployeeRecord};
use crate::utils;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Html,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "text" | "txt" => Some(Self::Text),
            "json" => Some(Self::Json),
            "html" | "htm" => Some(Self::Html),
            _ => None,
        }
    }
}

pub fn infer_format_from_path(path: &str) -> Option<OutputFormat> {
    let lower = path.trim().to_lowercase();
    if lower.ends_with(".json") {
        return Some(OutputFormat::Json);
    }
    if lower.ends_with(".html") || lower.ends_with(".htm") {
        return Some(OutputFormat::Html);
    }
    if lower.ends_with(".txt") {
        return Some(OutputFormat::Text);
    }
    None
}

#[derive(Clone, Copy, Debug)]
pub struct View<'a> {
    pub title: &'a str,
    pub dataset: &'a Dataset,
    pub display: &'a [&'a EmployeeRecord],
}

pub fn render(format: OutputFormat, view: &View<'_>, styled: bool) -> Vec<u8> {
    match format {
        OutputFormat::Text => render_text(view.display, styled),
        OutputFormat::Json => render_json(view.display),
        OutputFormat::Html => render_html(view),
    }
}

pub fn render_text(records: &[&EmployeeRecord], styled: bool) -> Vec<u8> {
    let labels = Dataset::column_labels();
    let rows: Vec<[String; 7]> = records.iter().map(|r| r.cells()).collect();

    let mut widths: Vec<usize> = labels.iter().map(|l| l.chars().count()).collect();
    for row in rows.iter() {
        for (w, cell) in widths.iter_mut().zip(row.iter()) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let header = join_row(labels.iter().map(String::as_str), &widths);
    if styled {
        out.push_str(&header.bold().to_string());
    } else {
        out.push_str(&header);
    }
    out.push('\n');
    let rule = widths
        .iter()
        .map(|w| "-".repeat(*w))
        .collect::<Vec<_>>()
        .join("-+-");
    out.push_str(&rule);
    out.push('\n');
    for row in rows.iter() {
        out.push_str(&join_row(row.iter().map(String::as_str), &widths));
        out.push('\n');
    }
    out.into_bytes()
}

fn join_row<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    cells
        .zip(widths.iter())
        .map(|(cell, w)| utils::pad_cell(cell, *w))
        .collect::<Vec<_>>()
        .join(" | ")
        .trim_end()
        .to_string()
}

pub fn render_json(records: &[&EmployeeRecord]) -> Vec<u8> {
    let mut out = serde_json::to_vec_pretty(records).unwrap_or_else(|_| b"[]".to_vec());
    out.push(b'\n');
    out
}

pub fn render_html(view: &View<'_>) -> Vec<u8> {
    report::render_html(view)
}
