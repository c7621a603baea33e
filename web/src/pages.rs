/*
 * SPDX-FileCopyrightText: 2026 Integrity Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Minimal `format!`-based HTML rendering. The markup is the contract
//! here: list item classes and link targets are what external status
//! consumers scrape.

use integrity_core::project::Project;
use integrity_core::status::DisplayState;

pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head><title>{} — Integrity</title></head>\n<body>\n{}\n</body>\n</html>\n",
        escape_html(title),
        body
    )
}

fn visibility(project: &Project) -> &'static str {
    if project.public { "public" } else { "private" }
}

pub fn home(projects: &[(Project, DisplayState)], authenticated: bool) -> String {
    let mut body = String::from("<h1>Projects</h1>\n");

    if !authenticated {
        body.push_str("<a href=\"/login\">Login</a>\n");
    }

    body.push_str("<ul id=\"projects\">\n");
    for (project, state) in projects {
        body.push_str(&format!(
            "<li class=\"{} {}\"><a href=\"/{}\">{}</a> {}</li>\n",
            state.css_class(),
            visibility(project),
            escape_html(&project.name),
            escape_html(&project.display_name),
            escape_html(&state.status_line()),
        ));
    }
    body.push_str("</ul>");

    layout("Projects", &body)
}

pub fn project_detail(project: &Project, state: &DisplayState) -> String {
    let body = format!(
        "<h1>{}</h1>\n<p class=\"{}\">{}</p>\n<a href=\"/\">projects</a>",
        escape_html(&project.display_name),
        state.css_class(),
        escape_html(&state.status_line()),
    );

    layout(&project.display_name, &body)
}

pub fn not_found() -> String {
    layout(
        "Not found",
        "<h1>you seem a bit lost</h1>\n<a href=\"/\">go back</a>",
    )
}

pub fn unauthorized() -> String {
    layout(
        "Unauthorized",
        "<h1>know the password?</h1>\n<a href=\"/login\">try again</a> or <a href=\"/\">go back</a>",
    )
}

pub fn internal_error() -> String {
    layout(
        "Error",
        "<h1>something went terribly wrong</h1>\n<a href=\"/\">go back</a>",
    )
}
