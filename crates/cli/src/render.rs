// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tables and notice lines for terminal output.

use comfy_table::{ContentArrangement, Table, presets::UTF8_FULL};
use helpdesk_console::{Notice, NoticeLevel};
use helpdesk_domain::{Department, Request, User};
use time::{format_description::BorrowedFormatItem, macros::format_description};

const CREATED_AT_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]");

fn table(headers: &[&str], rows: Vec<Vec<String>>) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(headers.to_vec());
    for row in rows {
        table.add_row(row);
    }
    table.to_string()
}

/// Renders the request list, newest first as served.
#[must_use]
pub fn requests(items: &[Request]) -> String {
    if items.is_empty() {
        return String::from("No requests found.");
    }
    let rows: Vec<Vec<String>> = items
        .iter()
        .map(|r| {
            vec![
                r.id.to_string(),
                r.created_at
                    .format(CREATED_AT_FORMAT)
                    .unwrap_or_else(|_| r.created_at.to_string()),
                r.subject.clone(),
                r.department_name.clone(),
                r.technician_full_name.clone(),
            ]
        })
        .collect();
    table(&["ID", "CREATED", "SUBJECT", "DEPARTMENT", "TECHNICIAN"], rows)
}

/// Renders a user list.
#[must_use]
pub fn users(items: &[User]) -> String {
    if items.is_empty() {
        return String::from("No users found.");
    }
    let rows: Vec<Vec<String>> = items
        .iter()
        .map(|u| {
            vec![
                u.id.to_string(),
                u.username.clone(),
                u.full_name(),
                String::from(if u.is_technician() { "technician" } else { "staff" }),
            ]
        })
        .collect();
    table(&["ID", "USERNAME", "NAME", "ROLE"], rows)
}

/// Renders a department list.
#[must_use]
pub fn departments(items: &[Department]) -> String {
    if items.is_empty() {
        return String::from("No departments found.");
    }
    let rows: Vec<Vec<String>> = items
        .iter()
        .map(|d| {
            vec![
                d.id.to_string(),
                d.name.clone(),
                d.director_label().to_string(),
            ]
        })
        .collect();
    table(&["ID", "NAME", "DIRECTOR"], rows)
}

/// Renders a notice as one line.
#[must_use]
pub fn notice(notice: &Notice) -> String {
    match notice.level {
        NoticeLevel::Success => format!("ok: {}", notice.message),
        NoticeLevel::Error => format!("error: {}", notice.message),
    }
}
