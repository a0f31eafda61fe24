//! UI automation tests for the resume intake flow
//!
//! These tests drive the real navbar and pages through egui_kittest,
//! simulating user interactions and checking the accessibility tree
//! for expected elements.

mod common;

use common::{build_harness, settle, TestApp};
use egui_kittest::kittest::Queryable;
use egui_kittest::Harness;
use mockly::intake::{IntakeError, ResumeFile};
use mockly::nav::Route;
use mockly::ui::{IntakeScreen, Screen};

fn intake_mut<'h>(harness: &'h mut Harness<'_, TestApp>) -> &'h mut IntakeScreen {
    match &mut harness.state_mut().state.screen {
        Screen::Intake(intake) => intake,
        _ => panic!("expected the intake screen to be mounted"),
    }
}

/// Open the intake screen through the navbar call to action
fn open_intake(harness: &mut Harness<'_, TestApp>) {
    harness.get_by_label("START INTERVIEW").click();
    settle(harness);
    assert_eq!(harness.state().state.route(), Route::Resume);
}

#[test]
fn test_navbar_cta_opens_intake() {
    let mut harness = build_harness();
    settle(&mut harness);

    harness.get_by_label("START INTERVIEW").click();
    settle(&mut harness);

    assert_eq!(harness.state().state.route(), Route::Resume);
    let _heading = harness.get_by_label("Welcome to Your Mock Interview");
}

#[test]
fn test_landing_cta_opens_intake() {
    let mut harness = build_harness();
    settle(&mut harness);

    harness.get_by_label("START INTERVIEW →").click();
    settle(&mut harness);

    assert_eq!(harness.state().state.route(), Route::Resume);
}

#[test]
fn test_submit_empty_form_shows_resume_error() {
    let mut harness = build_harness();
    settle(&mut harness);
    open_intake(&mut harness);

    harness.get_by_label("Begin Interview Session →").click();
    settle(&mut harness);

    // Still on the form, with the resume error showing
    assert_eq!(harness.state().state.route(), Route::Resume);
    let _error = harness.get_by_label("Please upload your resume");
}

#[test]
fn test_role_alone_still_requires_resume() {
    let mut harness = build_harness();
    settle(&mut harness);
    open_intake(&mut harness);

    harness.get_by_label("Role input").focus();
    settle(&mut harness);
    harness.get_by_label("Role input").type_text("Data Scientist");
    settle(&mut harness);

    harness.get_by_label("Begin Interview Session →").click();
    settle(&mut harness);

    assert_eq!(harness.state().state.route(), Route::Resume);
    let _error = harness.get_by_label("Please upload your resume");
}

#[test]
fn test_resume_without_role_shows_role_error() {
    let mut harness = build_harness();
    settle(&mut harness);
    open_intake(&mut harness);

    intake_mut(&mut harness).submission.resume = Some(ResumeFile::new("resume.pdf"));
    settle(&mut harness);

    harness.get_by_label("Begin Interview Session →").click();
    settle(&mut harness);

    assert_eq!(harness.state().state.route(), Route::Resume);
    assert_eq!(
        intake_mut(&mut harness).error,
        Some(IntakeError::MissingRole)
    );
    let _error = harness.get_by_label("Please enter your role");
}

#[test]
fn test_error_clears_when_role_edited() {
    let mut harness = build_harness();
    settle(&mut harness);
    open_intake(&mut harness);

    harness.get_by_label("Begin Interview Session →").click();
    settle(&mut harness);
    let _error = harness.get_by_label("Please upload your resume");

    harness.get_by_label("Role input").focus();
    settle(&mut harness);
    harness.get_by_label("Role input").type_text("Engineer");
    settle(&mut harness);

    assert!(
        harness.query_by_label("Please upload your resume").is_none(),
        "error banner should disappear once a field changes"
    );
}

#[test]
fn test_remove_button_detaches_resume() {
    let mut harness = build_harness();
    settle(&mut harness);
    open_intake(&mut harness);

    intake_mut(&mut harness).submission.resume = Some(ResumeFile::new("resume.pdf"));
    settle(&mut harness);
    let _attached = harness.get_by_label("resume.pdf");

    harness.get_by_label("Remove").click();
    settle(&mut harness);

    assert!(intake_mut(&mut harness).submission.resume.is_none());
    let _empty = harness.get_by_label("Drop your resume file here");
}

#[test]
fn test_complete_form_opens_session() {
    let mut harness = build_harness();
    settle(&mut harness);
    open_intake(&mut harness);

    intake_mut(&mut harness).submission.resume = Some(ResumeFile::new("resume.pdf"));
    settle(&mut harness);

    harness.get_by_label("Role input").focus();
    settle(&mut harness);
    harness.get_by_label("Role input").type_text("Software Engineer");
    settle(&mut harness);

    harness.get_by_label("Begin Interview Session →").click();
    settle(&mut harness);

    assert_eq!(harness.state().state.route(), Route::Session);
    let _heading = harness.get_by_label("Interview Session");
    let _timer = harness.get_by_label("00:00");
}

#[test]
fn test_back_to_home_returns_to_landing() {
    let mut harness = build_harness();
    settle(&mut harness);
    open_intake(&mut harness);

    harness.get_by_label("← Back to Home").click();
    settle(&mut harness);

    assert_eq!(harness.state().state.route(), Route::Landing);
}
