//! End-to-end exercises of the application services wired the way a
//! frontend wires them: seeded repositories, shared auth, one notification
//! center.

use std::sync::Arc;
use std::time::Duration;

use swaphub_application::{
    AuthService, ConnectPrompt, DirectoryBrowser, NotificationCenter, Page, PageController,
    RequestLedgerService, SwapRequestComposer,
};
use swaphub_core::notification::NotificationKind;
use swaphub_core::profile::ProfileRepository;
use swaphub_core::swap::SwapRequestRepository;
use swaphub_infrastructure::{
    InMemoryProfileRepository, InMemorySwapRequestRepository, seed_profiles, seed_requests,
};

struct App {
    auth: Arc<AuthService>,
    browser: DirectoryBrowser,
    composer: SwapRequestComposer,
    ledger: RequestLedgerService,
    notifications: Arc<NotificationCenter>,
    requests: Arc<InMemorySwapRequestRepository>,
}

fn app() -> App {
    let profiles: Arc<dyn ProfileRepository> =
        Arc::new(InMemoryProfileRepository::with_seed(seed_profiles()));
    let requests = Arc::new(InMemorySwapRequestRepository::with_seed(seed_requests()));
    let auth = Arc::new(AuthService::new(profiles.clone()).with_login_delay(Duration::ZERO));
    let notifications = Arc::new(NotificationCenter::new());

    App {
        browser: DirectoryBrowser::new(profiles.clone(), auth.clone()),
        composer: SwapRequestComposer::new(
            profiles.clone(),
            requests.clone() as Arc<dyn SwapRequestRepository>,
            auth.clone(),
            notifications.clone(),
        ),
        ledger: RequestLedgerService::new(
            requests.clone() as Arc<dyn SwapRequestRepository>,
            auth.clone(),
            notifications.clone(),
        ),
        auth,
        notifications,
        requests,
    }
}

#[tokio::test]
async fn test_anonymous_browse_then_connect_raises_login_prompt() {
    let app = app();
    let before = app.requests.list().await.unwrap();

    let page = app.browser.visible_page().await.unwrap();
    assert!(!page.is_empty());

    assert_eq!(app.browser.connect("u2").await, ConnectPrompt::LoginRequired);
    // nothing changed while anonymous
    assert_eq!(app.requests.list().await.unwrap(), before);
}

#[tokio::test]
async fn test_full_swap_round_trip_appears_in_outgoing_view() {
    let app = app();
    let mut pages = PageController::new();

    app.auth.login("marcus@swaphub.dev", "pw").await.unwrap();

    // pick a target from the directory
    app.browser.set_search_term("figma").await;
    let visible = app.browser.visible_page().await.unwrap();
    assert!(visible.users.iter().any(|p| p.id == "u2"));

    let ConnectPrompt::Compose { target_user_id } = app.browser.connect("u2").await else {
        panic!("expected compose prompt for an authenticated session");
    };
    pages.connect_user(target_user_id.clone());
    assert_eq!(pages.current(), Page::SwapRequest);

    // compose and send
    app.composer.begin(Some(target_user_id)).await;
    app.composer.add_offered_skill("React").await;
    app.composer.add_requested_skill("Figma").await;
    app.composer.set_message("hi").await;
    let sent = app.composer.submit().await.unwrap();
    pages.request_sent();

    assert_eq!(pages.current(), Page::Home);
    let outgoing = app.ledger.outgoing().await.unwrap();
    assert!(outgoing.iter().any(|r| r.id == sent.id));

    // form cleared
    let state = app.composer.state().await;
    assert!(state.offered.is_empty() && state.requested.is_empty() && state.message.is_empty());

    // acknowledgement queued
    let toasts = app.notifications.active().await;
    assert!(
        toasts
            .iter()
            .any(|n| n.kind == NotificationKind::Success
                && n.message == "SWAP REQUEST SENT SUCCESSFULLY!")
    );
}

#[tokio::test]
async fn test_rejected_submission_leaves_ledger_untouched() {
    let app = app();
    app.auth.login("marcus@swaphub.dev", "pw").await.unwrap();

    let before = app.requests.list().await.unwrap();

    app.composer.begin(Some("u2".to_string())).await;
    app.composer.add_requested_skill("Figma").await;
    app.composer.set_message("hi").await;
    assert!(app.composer.submit().await.is_err());

    assert_eq!(app.requests.list().await.unwrap(), before);
    let toasts = app.notifications.active().await;
    assert!(toasts.iter().any(|n| n.kind == NotificationKind::Warning));
}

#[tokio::test]
async fn test_accept_then_accept_again_is_a_noop() {
    let app = app();
    app.auth.login("marcus@swaphub.dev", "pw").await.unwrap();

    let incoming = app.ledger.incoming().await.unwrap();
    let target = incoming.iter().find(|r| r.is_pending()).unwrap();
    assert!(app.ledger.can_resolve(target).await);

    app.ledger.accept(&target.id).await.unwrap();
    let after = app.requests.list().await.unwrap();
    assert!(after.iter().all(|r| r.id != target.id));

    app.ledger.accept(&target.id).await.unwrap();
    assert_eq!(app.requests.list().await.unwrap(), after);
}

#[tokio::test]
async fn test_logout_hides_ledger_and_restores_full_directory() {
    let app = app();
    app.auth.login("marcus@swaphub.dev", "pw").await.unwrap();
    assert!(!app.ledger.incoming().await.unwrap().is_empty());

    app.auth.logout().await;
    app.browser.reset_view().await;

    assert!(app.ledger.incoming().await.unwrap().is_empty());
    // anonymous directory shows every public profile again
    let page = app.browser.visible_page().await.unwrap();
    assert_eq!(page.total_matches, 11);
}
