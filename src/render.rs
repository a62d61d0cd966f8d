//! HTML rendering of a `PageView` with Leptos SSR.
//!
//! DESIGN
//! ======
//! The whole document is rebuilt per request from the view model. Every
//! region is always present in the markup; hidden ones carry the `hidden`
//! class. Text children and attribute values are escaped by Leptos.
//!
//! Dynamic text is pre-formatted into one string per element so the output
//! carries no text-node separator comments.

use leptos::prelude::*;

use crate::catalog::Announcement;
use crate::view::{PageView, Region, TrainingRow};

fn visibility_class(view: &PageView, region: Region) -> &'static str {
    if view.is_visible(region) { "region" } else { "region hidden" }
}

#[component]
fn NavBar(region_class: &'static str, user_name: String) -> impl IntoView {
    view! {
        <nav id={Region::NavigationBar.element_id()} class=region_class>
            <span class="brand">"Co-op Tracker"</span>
            <span id="user-name">{user_name}</span>
            <form method="post" action="/logout">
                <button type="submit">"ออกจากระบบ"</button>
            </form>
        </nav>
    }
}

#[component]
fn LoginSection(region_class: &'static str) -> impl IntoView {
    view! {
        <section id={Region::LoginView.element_id()} class=region_class>
            <h1>"เข้าสู่ระบบ"</h1>
            <form method="post" action="/login">
                <select id="roleSelect" name="role">
                    <option value="student">"นักศึกษา"</option>
                    <option value="teacher">"อาจารย์นิเทศ"</option>
                </select>
                <button type="submit">"เข้าสู่ระบบ"</button>
            </form>
        </section>
    }
}

#[component]
fn NewsItem(news: Announcement) -> impl IntoView {
    view! {
        <div class="news-item">
            <p>
                <strong>{news.title}</strong>
                <span class="news-date">{format!("({})", news.date)}</span>
            </p>
        </div>
    }
}

#[component]
fn TrainingTableRow(row: TrainingRow) -> impl IntoView {
    view! {
        <tr>
            <td>{row.topic}</td>
            <td>{row.hours.to_string()}</td>
            <td>
                <span class={format!("badge {}", row.badge_class)}>{row.label}</span>
            </td>
        </tr>
    }
}

#[component]
fn StudentDashboard(region_class: &'static str, news_list: Vec<Announcement>, training_rows: Vec<TrainingRow>) -> impl IntoView {
    view! {
        <section id={Region::StudentDashboard.element_id()} class=region_class>
            <h2>"ประกาศข่าวสาร"</h2>
            <div id="news-list">
                {news_list.into_iter().map(|news| view! { <NewsItem news=news /> }).collect_view()}
            </div>
            <h2>"ประวัติการอบรม"</h2>
            <table>
                <thead>
                    <tr>
                        <th>"หัวข้อ"</th>
                        <th>"ชั่วโมง"</th>
                        <th>"สถานะ"</th>
                    </tr>
                </thead>
                <tbody id="training-table-body">
                    {training_rows.into_iter().map(|row| view! { <TrainingTableRow row=row /> }).collect_view()}
                </tbody>
            </table>
        </section>
    }
}

#[component]
fn TeacherDashboard(region_class: &'static str) -> impl IntoView {
    view! {
        <section id={Region::TeacherDashboard.element_id()} class=region_class>
            <h2>"แดชบอร์ดอาจารย์"</h2>
        </section>
    }
}

/// Render the full page document.
#[must_use]
pub fn render_page(view: &PageView) -> String {
    let nav_class = visibility_class(view, Region::NavigationBar);
    let login_class = visibility_class(view, Region::LoginView);
    let student_class = visibility_class(view, Region::StudentDashboard);
    let teacher_class = visibility_class(view, Region::TeacherDashboard);
    let user_name = view.user_name.clone();
    let news_list = view.news_list.clone();
    let training_rows = view.training_rows.clone();

    let document = Owner::new().with(move || {
        view! {
            <html lang="th">
                <head>
                    <meta charset="utf-8" />
                    <meta name="viewport" content="width=device-width, initial-scale=1" />
                    <title>"ระบบติดตามนักศึกษาสหกิจ"</title>
                    <link rel="stylesheet" href="/static/style.css" />
                </head>
                <body>
                    <NavBar region_class=nav_class user_name=user_name />
                    <LoginSection region_class=login_class />
                    <StudentDashboard region_class=student_class news_list=news_list training_rows=training_rows />
                    <TeacherDashboard region_class=teacher_class />
                </body>
            </html>
        }
        .to_html()
    });

    format!("<!DOCTYPE html>{document}")
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    /// Opening tag of the element carrying `id`, e.g. `<section id="x" class="region">`.
    #[must_use]
    pub fn opening_tag<'a>(html: &'a str, id: &str) -> &'a str {
        let needle = format!("id=\"{id}\"");
        let at = html.find(&needle).unwrap_or_else(|| panic!("no element with id {id}"));
        let start = html[..at].rfind('<').unwrap();
        let end = at + html[at..].find('>').unwrap();
        &html[start..=end]
    }

    #[must_use]
    pub fn is_hidden(html: &str, id: &str) -> bool {
        opening_tag(html, id).contains("hidden")
    }

    /// Markup between the opening tag of `id` and the next `</tag>`.
    #[must_use]
    pub fn inner_html<'a>(html: &'a str, id: &str, tag: &str) -> &'a str {
        let open = opening_tag(html, id);
        let start = html.find(open).unwrap() + open.len();
        let end = start + html[start..].find(&format!("</{tag}>")).unwrap();
        &html[start..end]
    }
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
