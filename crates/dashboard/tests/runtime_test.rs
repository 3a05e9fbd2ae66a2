//! Render loop against an in-memory gateway

mod common;

use std::sync::Arc;

use common::{photo, CountingGateway};
use mission_common::Rover;
use mission_dashboard::{
    application::PhotoSet, Action, AppMsg, Application, MemorySurface, UpdateOptions,
};

fn app(gateway: &Arc<CountingGateway>) -> Application<MemorySurface> {
    Application::new(gateway.clone(), MemorySurface::new(), UpdateOptions::default())
}

#[tokio::test]
async fn test_manifest_fetched_once_across_renders() {
    let gateway = Arc::new(CountingGateway::new());
    let mut app = app(&gateway);

    app.render().unwrap();
    app.render().unwrap();
    assert_eq!(app.pending_fetches(), 1);
    assert!(app.surface().current().unwrap().contains("sk-circle"));

    app.run_until_idle().await.unwrap();

    assert_eq!(gateway.manifest_calls(), 1);
    assert_eq!(gateway.apod_calls(), 1);
    assert!(app.state().rovers_manifest.is_some());
}

#[tokio::test]
async fn test_dashboard_loads_manifest_then_image() {
    let gateway = Arc::new(CountingGateway::new());
    let mut app = app(&gateway);

    app.render().unwrap();
    app.run_until_idle().await.unwrap();

    let markup = app.surface().current().unwrap();
    assert!(markup.contains("Andromeda"));
    assert!(markup.contains("The Rovers Of Mars"));
    assert_eq!(app.state().apod.as_ref().unwrap().title, "Andromeda");

    // Further renders have everything they need
    app.render().unwrap();
    assert_eq!(app.pending_fetches(), 0);
}

#[tokio::test]
async fn test_navigation_flow() {
    let gateway = Arc::new(
        CountingGateway::new()
            .with_photos(2540, vec![photo(1), photo(2)])
            .with_photos(2539, vec![photo(3)]),
    );
    let mut app = app(&gateway);
    app.render().unwrap();
    app.run_until_idle().await.unwrap();

    app.handle_message(AppMsg::User(Action::Navigate("Curiosity".to_string())))
        .unwrap();
    assert_eq!(app.state().selected_rover, Some(Rover::Curiosity));
    assert_eq!(app.state().rover_photos, PhotoSet::Pending);
    app.run_until_idle().await.unwrap();

    let markup = app.surface().current().unwrap();
    assert_eq!(markup.matches("data-toggle=\"lightbox\"").count(), 2);
    assert!(markup.contains("disabled>Max Sol</button>"));

    // Forward is disabled at the newest sol
    app.handle_message(AppMsg::User(Action::NextSol)).unwrap();
    assert_eq!(app.state().selected_sol, Some(2540));

    app.handle_message(AppMsg::User(Action::PreviousSol)).unwrap();
    app.run_until_idle().await.unwrap();
    assert_eq!(app.state().selected_sol, Some(2539));
    assert!(app.surface().current().unwrap().contains("data-key=\"3\""));

    app.handle_message(AppMsg::User(Action::PreviousSol)).unwrap();
    app.run_until_idle().await.unwrap();
    assert!(app.surface().current().unwrap().contains("No photos found"));

    app.handle_message(AppMsg::User(Action::Navigate("dashboard".to_string())))
        .unwrap();
    assert_eq!(app.state().selected_rover, None);
    assert_eq!(app.state().selected_sol, None);
    assert!(app.surface().current().unwrap().contains("The Rovers Of Mars"));

    assert_eq!(gateway.manifest_calls(), 1);
    assert_eq!(gateway.apod_calls(), 1);
    assert_eq!(
        gateway.photo_calls(),
        vec![
            (Rover::Curiosity, 2540),
            (Rover::Curiosity, 2539),
            (Rover::Curiosity, 2538)
        ]
    );
}

#[tokio::test]
async fn test_failed_fetch_leaves_loader_and_allows_retry() {
    let gateway = Arc::new(CountingGateway::failing_manifest());
    let mut app = app(&gateway);

    app.render().unwrap();
    app.run_until_idle().await.unwrap();

    assert_eq!(gateway.manifest_calls(), 1);
    assert!(app.state().rovers_manifest.is_none());
    assert!(app.surface().current().unwrap().contains("sk-circle"));
    assert_eq!(app.surface().renders().len(), 1);

    app.render().unwrap();
    app.run_until_idle().await.unwrap();
    assert_eq!(gateway.manifest_calls(), 2);
}

#[tokio::test]
async fn test_quit_stops_the_loop() {
    let gateway = Arc::new(CountingGateway::new());
    let mut app = app(&gateway);
    app.sender().send(AppMsg::User(Action::Quit)).unwrap();

    app.run().await.unwrap();
    assert!(!app.surface().renders().is_empty());
}

#[tokio::test]
async fn test_closed_input_exits_once_fetches_settle() {
    let gateway = Arc::new(CountingGateway::new());
    let mut app = app(&gateway);
    app.sender().send(AppMsg::InputClosed).unwrap();

    app.run().await.unwrap();
    assert_eq!(gateway.manifest_calls(), 1);
}
