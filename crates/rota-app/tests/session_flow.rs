//! Integration tests walking the full user journey through a [`Session`]:
//! first run, welcome, duty screen, calendar, switching students, and the
//! behaviour a "restart" (new session over the same store) observes.

use chrono::NaiveDate;

use rota_app::application::show_duty::DutyView;
use rota_app::infrastructure::clock::FixedClock;
use rota_app::infrastructure::storage::{MemoryPrefsStore, PrefsStore};
use rota_app::{Session, ViewEvent, ViewState};
use rota_core::{AreaCode, HeuristicTextMeasure};

fn aug25() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 8, 25).expect("valid date")
}

#[test]
fn first_run_journey_lands_on_duty_screen_with_persisted_student() {
    let store = MemoryPrefsStore::default();
    let mut session = Session::start(store, FixedClock(aug25())).expect("start");
    assert_eq!(session.model().state, ViewState::FirstRun);

    session
        .dispatch(ViewEvent::StudentChosen("Marianne".to_string()))
        .expect("choose student");
    assert_eq!(
        session.model().state,
        ViewState::Welcoming { first_time: true }
    );

    session.dispatch(ViewEvent::WelcomeFinished).expect("finish welcome");
    assert_eq!(session.model().state, ViewState::ViewingDuty);
    assert_eq!(
        session.model().selected_student.as_deref(),
        Some("Marianne")
    );
    assert!(!session.prefs().is_first_launch);
}

#[test]
fn restart_after_first_run_shows_welcome_back() {
    let store = MemoryPrefsStore::default();

    // First launch: pick a student, then "quit".
    {
        let mut session = Session::start(&store, FixedClock(aug25())).expect("start");
        session
            .dispatch(ViewEvent::StudentChosen("Harshpreet".to_string()))
            .expect("choose student");
    }

    // Relaunch over the same store.
    let session = Session::start(&store, FixedClock(aug25())).expect("restart");
    assert_eq!(
        session.model().state,
        ViewState::Welcoming { first_time: false }
    );
    assert_eq!(
        session.model().selected_student.as_deref(),
        Some("Harshpreet")
    );
}

#[test]
fn switching_student_persists_and_skips_welcome() {
    let store = MemoryPrefsStore::default();
    let mut session = Session::start(&store, FixedClock(aug25())).expect("start");

    session
        .dispatch(ViewEvent::StudentChosen("Laura".to_string()))
        .expect("first choice");
    session.dispatch(ViewEvent::WelcomeFinished).expect("welcome");

    session.dispatch(ViewEvent::ChangeStudent).expect("open selection");
    assert_eq!(session.model().state, ViewState::Selecting);

    session
        .dispatch(ViewEvent::StudentChosen("Yunjia".to_string()))
        .expect("switch");
    assert_eq!(session.model().state, ViewState::ViewingDuty);

    let persisted = store.load().expect("load");
    assert_eq!(persisted.student_name.as_deref(), Some("Yunjia"));
}

#[test]
fn calendar_picks_a_date_and_duty_screen_renders_it() {
    let today = aug25();
    let store = MemoryPrefsStore::default();
    let mut session = Session::start(&store, FixedClock(today)).expect("start");

    session
        .dispatch(ViewEvent::StudentChosen("Bailasan".to_string()))
        .expect("choose");
    session.dispatch(ViewEvent::WelcomeFinished).expect("welcome");
    session.dispatch(ViewEvent::OpenCalendar).expect("open calendar");

    // Navigate to September and pick the 1st.
    session.dispatch(ViewEvent::NextMonth).expect("next month");
    let picked = NaiveDate::from_ymd_opt(2025, 9, 1).expect("valid date");
    session.dispatch(ViewEvent::DateChosen(picked)).expect("pick");
    session.dispatch(ViewEvent::CloseCalendar).expect("close");

    let model = session.model();
    assert_eq!(model.state, ViewState::ViewingDuty);
    assert_eq!(model.viewing_date, picked);

    // Day 1 puts Bailasan on area A; the composed screen agrees.
    let view = DutyView::compose(
        model.selected_student.as_deref().expect("student"),
        model.viewing_date,
        today,
        1080.0,
        1440.0,
        &HeuristicTextMeasure::default(),
    );
    assert_eq!(view.area, AreaCode::A);
    assert!(!view.is_today);
    assert_eq!(view.date_line, "Date 2025-9-1");
}
