// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nxqa-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nxqa and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use rstest::rstest;

use super::{
    affordance_label, notice_area, recall_row_cells, recall_row_style, view_title, App,
    PanelState, BUSY_NOTICE, RECALL_HEADER,
};
use crate::client::QueryError;
use crate::model::{QueryResult, RecallItem};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn sample_item(question: &str) -> RecallItem {
    RecallItem {
        score: 0.9,
        question: question.to_owned(),
        answer: "Click forgot password".to_owned(),
        filename: "faq1.md".to_owned(),
        header: "Account".to_owned(),
        product: "Core".to_owned(),
    }
}

fn sample_result(questions: &[&str]) -> QueryResult {
    QueryResult {
        answer: "Click forgot password".to_owned(),
        faq_recall: questions.iter().map(|question| sample_item(question)).collect(),
    }
}

#[test]
fn submit_while_idle_stages_request_and_goes_busy() {
    let mut app = App::new();
    app.query = "reset password".to_owned();

    app.submit();

    assert_eq!(app.state, PanelState::Busy);
    let request = app.take_pending_request().expect("staged request");
    assert_eq!(request.query, "reset password");
    assert!(app.take_pending_request().is_none());
}

#[test]
fn submit_sends_empty_query_as_is() {
    let mut app = App::new();

    app.submit();

    assert_eq!(app.take_pending_request().expect("staged request").query, "");
}

#[test]
fn busy_submit_is_refused_with_notice_and_no_request() {
    let mut app = App::new();
    app.submit();
    app.take_pending_request();

    app.submit();

    assert_eq!(app.notice.as_deref(), Some(BUSY_NOTICE));
    assert!(app.take_pending_request().is_none());
    // A rejected submit is not a state transition.
    assert_eq!(app.state, PanelState::Busy);
}

#[test]
fn double_enter_before_completion_stages_exactly_one_request() {
    let mut app = App::new();
    app.query = "reset password".to_owned();

    app.handle_key(key(KeyCode::Enter));
    app.handle_key(key(KeyCode::Enter));

    let mut staged = 0;
    while app.take_pending_request().is_some() {
        staged += 1;
    }
    assert_eq!(staged, 1);
    assert_eq!(app.notice.as_deref(), Some(BUSY_NOTICE));
}

#[test]
fn success_completion_restores_idle_and_renders_result() {
    let mut app = App::new();
    app.query = "reset password".to_owned();
    app.submit();
    app.take_pending_request();

    app.finish_request(Ok(sample_result(&["How to reset?"])));

    assert_eq!(app.state, PanelState::Idle);
    assert_eq!(affordance_label(app.state), "search");
    assert_eq!(app.recall.len(), 1);
    assert_eq!(app.recall[0].question, "How to reset?");
    assert_eq!(app.answer, "Click forgot password");
    assert_eq!(app.recall_state.selected(), Some(0));
}

#[test]
fn failure_completion_restores_idle_and_keeps_prior_table() {
    let mut app = App::new();
    app.finish_request(Ok(sample_result(&["How to reset?"])));

    app.submit();
    app.take_pending_request();
    app.finish_request(Err(QueryError::Service { status: 500, message: "timeout".to_owned() }));

    assert_eq!(app.state, PanelState::Idle);
    assert_eq!(affordance_label(app.state), "search");
    assert_eq!(app.notice.as_deref(), Some("timeout"));
    // Table and answer keep the prior successful response.
    assert_eq!(app.recall.len(), 1);
    assert_eq!(app.recall[0].question, "How to reset?");
    assert_eq!(app.answer, "Click forgot password");
}

#[test]
fn completion_preserves_recall_order() {
    let mut app = App::new();

    app.finish_request(Ok(sample_result(&["first", "second", "third"])));

    let questions: Vec<&str> = app.recall.iter().map(|item| item.question.as_str()).collect();
    assert_eq!(questions, vec!["first", "second", "third"]);
}

#[test]
fn answer_text_is_verbatim() {
    let mut app = App::new();
    let mut result = sample_result(&["q"]);
    result.answer = "  spaced\nanswer  ".to_owned();

    app.finish_request(Ok(result));

    assert_eq!(app.answer, "  spaced\nanswer  ");
}

#[test]
fn open_notice_blocks_all_keys_except_dismiss() {
    let mut app = App::new();
    app.query = "abc".to_owned();
    app.notice = Some("timeout".to_owned());

    app.handle_key(key(KeyCode::Char('x')));
    assert_eq!(app.query, "abc");
    assert!(app.notice.is_some());

    app.handle_key(key(KeyCode::Enter));
    assert!(app.notice.is_none());
    // Dismissal is not a submit.
    assert!(app.take_pending_request().is_none());
    assert_eq!(app.query, "abc");
}

#[test]
fn typing_edits_the_query_buffer() {
    let mut app = App::new();

    app.handle_key(key(KeyCode::Char('h')));
    app.handle_key(key(KeyCode::Char('i')));
    assert_eq!(app.query, "hi");

    app.handle_key(key(KeyCode::Backspace));
    assert_eq!(app.query, "h");

    app.handle_key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
    assert_eq!(app.query, "");
}

#[test]
fn escape_quits_when_no_notice_is_open() {
    let mut app = App::new();
    app.handle_key(key(KeyCode::Esc));
    assert!(app.should_quit);
}

#[test]
fn scroll_clamps_to_recall_bounds() {
    let mut app = App::new();
    app.finish_request(Ok(sample_result(&["a", "b"])));

    app.handle_key(key(KeyCode::Up));
    assert_eq!(app.recall_state.selected(), Some(0));

    app.handle_key(key(KeyCode::Down));
    app.handle_key(key(KeyCode::Down));
    assert_eq!(app.recall_state.selected(), Some(1));
}

#[test]
fn affordance_labels_match_panel_states() {
    assert_eq!(affordance_label(PanelState::Idle), "search");
    assert_eq!(affordance_label(PanelState::Busy), "running");
}

#[test]
fn header_cells_are_fixed_and_ordered() {
    assert_eq!(
        RECALL_HEADER,
        ["score", "question", "answer", "filename", "header", "product"]
    );
}

#[test]
fn row_cells_follow_header_order() {
    let cells = recall_row_cells(&sample_item("How to reset?"));
    assert_eq!(
        cells,
        [
            "0.9".to_owned(),
            "How to reset?".to_owned(),
            "Click forgot password".to_owned(),
            "faq1.md".to_owned(),
            "Account".to_owned(),
            "Core".to_owned(),
        ]
    );
}

#[rstest]
#[case(0, true)]
#[case(1, false)]
#[case(2, true)]
#[case(3, false)]
#[case(10, true)]
fn even_rows_get_the_alternate_style(#[case] index: usize, #[case] expect_alt: bool) {
    let style = recall_row_style(index);
    if expect_alt {
        assert_eq!(style.bg, Some(Color::DarkGray));
    } else {
        assert_eq!(style, Style::default());
    }
}

#[test]
fn view_title_appends_trimmed_tail() {
    assert_eq!(view_title("Query", None), "─ Query ");
    assert_eq!(view_title("FAQ Recall", Some("— 3 rows")), "─ FAQ Recall — 3 rows ");
    assert_eq!(view_title("FAQ Recall", Some("   ")), "─ FAQ Recall ");
}

#[test]
fn notice_area_stays_inside_the_frame() {
    let frame = Rect { x: 0, y: 0, width: 80, height: 24 };
    let modal = notice_area(frame);

    assert!(modal.width <= frame.width);
    assert!(modal.height <= frame.height);
    assert!(modal.x + modal.width <= frame.width);
    assert!(modal.y + modal.height <= frame.height);
    assert!(modal.width <= 60);
}

#[test]
fn notice_area_survives_tiny_frames() {
    let frame = Rect { x: 0, y: 0, width: 10, height: 3 };
    let modal = notice_area(frame);

    assert!(modal.x + modal.width <= frame.width);
    assert!(modal.y + modal.height <= frame.height);
}
