//! End-to-end navigation flows through the app core

use std::sync::{Arc, Mutex};

use chirocare_app::screens::{DashboardTile, Screen};
use chirocare_app::{AppConfig, AppCore, AppError};
use chirocare_nav::{ChiroId, NavAction, NavError, NavEvent, NavEventKind, NavOptions, Route};

fn app_at(start: &str) -> AppCore {
    AppCore::new(AppConfig {
        start_route: start.to_string(),
        ..AppConfig::default()
    })
    .unwrap()
}

#[test]
fn profile_round_trip_from_home() {
    let mut app = app_at("home");
    app.navigate_path("chiro_profile/3", NavOptions::default())
        .unwrap();
    assert_eq!(app.current_route(), &Route::ChiroProfile { id: ChiroId(3) });
    assert_eq!(app.current_route().param("id").as_deref(), Some("3"));

    assert!(app.back());
    assert_eq!(app.current_route(), &Route::Home);
    assert!(!app.back());
}

#[test]
fn forgot_password_redirect_clears_history() {
    let mut app = app_at("forgot_password");
    let moved = app
        .interact(|screen| match screen {
            Screen::PasswordReset(notice) => Some(notice.go_to_login()),
            _ => None,
        })
        .unwrap();
    assert!(moved);
    assert_eq!(app.snapshot().stack, vec!["login".to_string()]);
    assert!(!app.back());
    assert_eq!(app.current_route(), &Route::Login);
}

#[test]
fn change_password_redirect_clears_history() {
    let mut app = app_at("home");
    app.interact(|screen| match screen {
        Screen::Dashboard(dashboard) => Some(dashboard.open(DashboardTile::ChangePassword)),
        _ => None,
    })
    .unwrap();
    assert_eq!(app.current_route(), &Route::ChangePassword);

    app.interact(|screen| match screen {
        Screen::PasswordReset(notice) => Some(notice.go_to_login()),
        _ => None,
    })
    .unwrap();
    assert_eq!(app.router().depth(), 1);
    assert!(!app.can_go_back());
}

#[test]
fn booking_flow_returns_home() {
    let mut app = app_at("home");
    app.dispatch(NavAction::push(Route::ChiroList)).unwrap();
    app.interact(|screen| match screen {
        Screen::Directory(directory) => {
            directory.filter("sports");
            directory.select(ChiroId(1))
        }
        _ => None,
    })
    .unwrap();
    app.interact(|screen| match screen {
        Screen::Profile(profile) => profile.book(),
        _ => None,
    })
    .unwrap();
    assert_eq!(app.current_route().path(), "booking/101");
    assert_eq!(app.screen().title(), "Booking #101");
    assert_eq!(app.router().depth(), 4);

    app.interact(|screen| match screen {
        Screen::Booking(booking) => Some(booking.done()),
        _ => None,
    })
    .unwrap();
    assert_eq!(app.snapshot().stack, vec!["home".to_string()]);
}

#[test]
fn conversation_opens_from_inbox() {
    let mut app = app_at("messages");
    app.interact(|screen| match screen {
        Screen::Messages(inbox) => inbox.open("c-okafor"),
        _ => None,
    })
    .unwrap();
    assert_eq!(app.current_route().path(), "conversation/c-okafor");

    app.interact(|screen| {
        if let Screen::Conversation(conversation) = screen {
            conversation.queue_message("Running 5 minutes late");
        }
        None
    })
    .unwrap();
    match app.screen() {
        Screen::Conversation(conversation) => assert_eq!(conversation.outbox().len(), 1),
        other => panic!("unexpected screen {other:?}"),
    }

    app.back();
    assert_eq!(app.current_route(), &Route::Messages);
}

#[test]
fn unknown_route_fails_without_mutation() {
    let mut app = app_at("home");
    app.navigate(Route::ChiroList).unwrap();
    let before = app.snapshot();

    let err = app
        .navigate_path("nonexistent_route", NavOptions::clear_stack())
        .unwrap_err();
    assert!(matches!(err, AppError::Nav(NavError::UnknownRoute { .. })));
    assert_eq!(app.snapshot(), before);
}

#[test]
fn observers_follow_the_flow() {
    let events: Arc<Mutex<Vec<NavEventKind>>> = Arc::default();
    let sink = events.clone();
    let mut app = app_at("login");
    app.subscribe(Arc::new(move |event: &NavEvent| {
        sink.lock().unwrap().push(event.kind);
    }));

    app.interact(|screen| match screen {
        Screen::Login(login) => Some(login.forgot_password()),
        _ => None,
    })
    .unwrap();
    app.interact(|screen| match screen {
        Screen::PasswordReset(notice) => Some(notice.go_to_login()),
        _ => None,
    })
    .unwrap();
    app.back();

    assert_eq!(
        *events.lock().unwrap(),
        vec![NavEventKind::Push, NavEventKind::Reset]
    );
}

#[test]
fn history_cap_from_config() {
    let mut app = AppCore::new(AppConfig {
        max_history: Some(3),
        ..AppConfig::default()
    })
    .unwrap();
    for id in 1..=5 {
        app.navigate(Route::ChiroProfile { id: ChiroId(id) }).unwrap();
    }
    assert_eq!(
        app.snapshot().stack,
        vec!["home", "chiro_profile/4", "chiro_profile/5"]
    );
}

#[test]
fn default_history_unwinds_every_push() {
    let mut app = AppCore::new(AppConfig::default()).unwrap();
    app.navigate(Route::ChiroList).unwrap();
    for id in 1..=60 {
        app.navigate(Route::ChiroProfile { id: ChiroId(id) }).unwrap();
    }
    assert_eq!(app.snapshot().stack.len(), 62);

    let mut backs = 0;
    while app.back() {
        backs += 1;
        if backs == 60 {
            assert_eq!(app.current_route(), &Route::ChiroList);
        }
    }
    assert_eq!(backs, 61);
    assert_eq!(app.snapshot().stack, vec!["home".to_string()]);
}
