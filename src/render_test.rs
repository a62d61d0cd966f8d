use super::test_helpers::{inner_html, is_hidden, opening_tag};
use super::*;
use crate::catalog::{Announcement, Catalog, TrainingRecord};

fn student_page() -> String {
    let mut view = PageView::initial();
    view.select_role("student", &Catalog::demo());
    render_page(&view)
}

#[test]
fn page_starts_with_doctype() {
    let html = render_page(&PageView::initial());
    assert!(html.starts_with("<!DOCTYPE html><html lang=\"th\">"));
    assert!(html.contains(r#"<link rel="stylesheet" href="/static/style.css""#));
}

#[test]
fn initial_page_hides_everything_but_login() {
    let html = render_page(&PageView::initial());
    assert!(!is_hidden(&html, "login-page"));
    assert!(is_hidden(&html, "main-navbar"));
    assert!(is_hidden(&html, "student-dashboard"));
    assert!(is_hidden(&html, "teacher-dashboard"));
    let label = inner_html(&html, "user-name", "span");
    assert!(!label.contains("สมชาย") && !label.contains("วิชาญ"));
}

#[test]
fn login_form_posts_role_select() {
    let html = render_page(&PageView::initial());
    assert!(opening_tag(&html, "roleSelect").contains(r#"name="role""#));
    assert!(html.contains(r#"<option value="student">"#));
    assert!(html.contains(r#"<option value="teacher">"#));
    assert!(html.contains(r#"action="/login""#));
    assert!(html.contains(r#"action="/logout""#));
}

#[test]
fn student_page_lists_news_and_rows_in_order() {
    let html = student_page();

    assert!(is_hidden(&html, "login-page"));
    assert!(!is_hidden(&html, "main-navbar"));
    assert!(!is_hidden(&html, "student-dashboard"));
    assert!(is_hidden(&html, "teacher-dashboard"));

    let news = inner_html(&html, "news-list", "div");
    assert_eq!(html.matches(r#"class="news-item""#).count(), 2);
    let first = news.find("แจ้งกำหนดการส่งเอกสารสหกิจ").unwrap();
    let second = news.find("บริษัท ABC เปิดรับสมัครนักศึกษาฝึกงาน").unwrap();
    assert!(first < second);

    let rows = inner_html(&html, "training-table-body", "tbody");
    assert_eq!(rows.matches("<tr>").count(), 2);
    assert!(rows.find("การเขียนเรซูเม่").unwrap() < rows.find("ทักษะการสัมภาษณ์งาน").unwrap());
    assert!(rows.contains(r#"<span class="badge badge-approved">อนุมัติแล้ว</span>"#));
    assert!(rows.contains(r#"<span class="badge badge-pending">รอตรวจสอบ</span>"#));

    assert_eq!(inner_html(&html, "user-name", "span"), "นศ. สมชาย ใจดี");
}

#[test]
fn news_item_emphasizes_title_and_parenthesizes_date() {
    let html = student_page();
    assert!(html.contains("<strong>แจ้งกำหนดการส่งเอกสารสหกิจ</strong>"));
    assert!(html.contains(r#"<span class="news-date">(2023-10-01)</span>"#));
}

#[test]
fn rendering_twice_is_byte_identical() {
    let catalog = Catalog::demo();
    let mut view = PageView::initial();
    view.select_role("student", &catalog);
    let once = render_page(&view);

    view.render_announcements(&catalog);
    view.render_training_history(&catalog);
    assert_eq!(render_page(&view), once);
}

#[test]
fn teacher_page_has_empty_lists() {
    let mut view = PageView::initial();
    view.select_role("teacher", &Catalog::demo());
    let html = render_page(&view);

    assert!(!is_hidden(&html, "teacher-dashboard"));
    assert!(is_hidden(&html, "student-dashboard"));
    assert!(!html.contains(r#"class="news-item""#));
    assert!(!inner_html(&html, "training-table-body", "tbody").contains("<tr>"));
    assert_eq!(inner_html(&html, "user-name", "span"), "อ. วิชาญ รักเรียน");
}

#[test]
fn unrecognized_role_shows_navbar_only() {
    let mut view = PageView::initial();
    view.select_role("", &Catalog::demo());
    let html = render_page(&view);

    assert!(!is_hidden(&html, "main-navbar"));
    assert!(is_hidden(&html, "login-page"));
    assert!(is_hidden(&html, "student-dashboard"));
    assert!(is_hidden(&html, "teacher-dashboard"));
}

#[test]
fn catalog_text_is_escaped() {
    let catalog = Catalog {
        announcements: vec![Announcement::new("<script>alert(1)</script>", "x & y")],
        training: vec![TrainingRecord::new("<b>topic</b>", 1, "APPROVED")],
    };
    let mut view = PageView::initial();
    view.render_announcements(&catalog);
    view.render_training_history(&catalog);
    let html = render_page(&view);

    assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    assert!(html.contains("(x &amp; y)"));
    assert!(html.contains("&lt;b&gt;topic&lt;/b&gt;"));
    assert!(!html.contains("<script>"));
    assert!(!html.contains("<b>"));
}
