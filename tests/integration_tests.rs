// Integration tests for SignSync Algo

use chrono::NaiveDate;
use signsync_algo::core::filters::{search_engaged, zodiac_twins};
use signsync_algo::core::ranking::rank_by_compatibility;
use signsync_algo::core::zodiac::ZodiacSign;
use signsync_algo::models::REQUIRED_PERMISSIONS;
use signsync_algo::services::{
    EngagementFeed, HostBridge, HostMessage, LeaderboardFeed, MockDirectory, MockEngagementFeed,
    MockLeaderboardFeed, ProfileDirectory, Session,
};

#[tokio::test]
async fn test_cosmic_match_pipeline_end_to_end() {
    let directory = MockDirectory::new(0);
    let user = directory.current_user().await.unwrap();
    assert_eq!(user.sign(), ZodiacSign::Leo);

    let candidates = directory.list_profiles().await.unwrap();
    let matches = rank_by_compatibility(user.sign(), candidates);

    assert_eq!(matches.len(), 4);
    for pair in matches.windows(2) {
        assert!(pair[0].compatibility >= pair[1].compatibility);
    }

    // Leo-Leo candidates (Marcus, Sofia) hold the fixed self score
    for m in matches.iter().filter(|m| m.zodiac_sign == ZodiacSign::Leo) {
        assert_eq!(m.compatibility, 75);
    }
}

#[tokio::test]
async fn test_zodiac_twins_from_directory() {
    let directory = MockDirectory::new(0);
    let user = directory.current_user().await.unwrap();
    let candidates = directory.list_profiles().await.unwrap();

    let twins = zodiac_twins(&user, candidates);

    // Marcus Thompson and Sofia Martinez are the Leo candidates
    assert_eq!(twins.len(), 2);
    for twin in &twins {
        assert_eq!(twin.sign(), ZodiacSign::Leo);
        assert_ne!(twin.user_id, user.user_id);
    }
}

#[tokio::test]
async fn test_search_over_engagement_feed() {
    let feed = MockEngagementFeed::new(0);
    let snapshot = feed.engaged_profiles().await.unwrap();

    // Empty query returns everyone, ranked by the composite
    let all = search_engaged(snapshot.clone(), "", None);
    assert_eq!(all.len(), 6);
    assert_eq!(all[0].name, "Mystic Maya");
    assert_eq!(all[1].name, "Leo Community");

    // Sign filter keeps only classified Leos
    let leos = search_engaged(snapshot.clone(), "", Some(ZodiacSign::Leo));
    assert!(leos.iter().all(|p| p.sign() == ZodiacSign::Leo));

    // Query narrows by name or bio, case-insensitive
    let maya = search_engaged(snapshot, "MYSTIC", None);
    assert_eq!(maya.len(), 1);
    assert_eq!(maya[0].name, "Mystic Maya");
}

#[tokio::test]
async fn test_leaderboard_snapshot_shape() {
    let feed = MockLeaderboardFeed::new(0);
    let entries = feed.top_entries().await.unwrap();

    assert_eq!(entries.len(), 10);
    assert_eq!(entries[0].rank, 1);
    for pair in entries.windows(2) {
        assert!(pair[0].points >= pair[1].points);
        assert_eq!(pair[1].rank, pair[0].rank + 1);
    }
}

#[tokio::test]
async fn test_permission_flow_end_to_end() {
    let session = Session::new();
    let bridge = HostBridge::default();
    let mut rx = bridge.subscribe();

    // Partial grant is rejected and leaves the session untouched
    assert!(session
        .grant(vec![signsync_algo::Permission::Profile], &bridge)
        .await
        .is_err());
    assert!(!session.is_ready());

    // Full grant succeeds and fires the one-shot ready signal
    session
        .grant(REQUIRED_PERMISSIONS.to_vec(), &bridge)
        .await
        .unwrap();
    assert!(session.is_ready());

    let granted = rx.recv().await.unwrap();
    assert!(matches!(granted, HostMessage::PermissionsGranted { .. }));
    let ready = rx.recv().await.unwrap();
    assert!(matches!(ready, HostMessage::MiniAppReady { .. }));
}

#[tokio::test]
async fn test_host_suggestion_switches_tab() {
    let session = Session::new();
    let directory = MockDirectory::new(0);
    let user = directory.current_user().await.unwrap();

    session
        .handle_inbound(HostMessage::SuggestZodiacUsers { sign: user.sign() })
        .await;

    assert_eq!(session.active_tab().await, signsync_algo::Tab::Search);
    assert_eq!(session.suggested_sign().await, Some(ZodiacSign::Leo));
}

#[test]
fn test_wire_format_matches_host_contract() {
    let msg = HostMessage::PermissionsGranted {
        app_id: signsync_algo::services::APP_ID.to_string(),
        permissions: REQUIRED_PERMISSIONS.to_vec(),
    };
    let json = serde_json::to_value(&msg).unwrap();
    assert_eq!(json["type"], "PERMISSIONS_GRANTED");
    assert_eq!(json["payload"]["appId"], "signsync-zodiac-matcher");
    assert_eq!(json["payload"]["permissions"][1], "farcaster_search");
}

#[test]
fn test_profile_wire_names_are_camel_case() {
    let profile = signsync_algo::Profile {
        user_id: "1".to_string(),
        name: "Emma Wilson".to_string(),
        age: 26,
        birth_date: NaiveDate::from_ymd_opt(1997, 7, 15).unwrap(),
        birth_time: None,
        birth_place: None,
        location: "Brooklyn, NY".to_string(),
        avatar: "/placeholder.svg".to_string(),
        bio: "Artist".to_string(),
        interests: vec![],
        engagement: None,
        last_active: None,
    };
    let json = serde_json::to_value(&profile).unwrap();
    assert_eq!(json["userId"], "1");
    assert_eq!(json["birthDate"], "1997-07-15");
}

#[tokio::test]
async fn test_leaderboard_entries_carry_derived_sign() {
    use signsync_algo::models::RankedEntry;

    let feed = MockLeaderboardFeed::new(0);
    let entries = feed.top_entries().await.unwrap();
    let views: Vec<RankedEntry> = entries.into_iter().map(RankedEntry::from).collect();

    // astroqueen (born 1996-08-14) is a Leo
    let leo = views
        .iter()
        .find(|v| v.entry.username == "astroqueen")
        .unwrap();
    assert_eq!(leo.sign, Some(ZodiacSign::Leo));
    assert_eq!(leo.glyph, Some("\u{264C}"));

    // entries without a birth date carry no sign
    let unknown = views
        .iter()
        .find(|v| v.entry.username == "retrograde")
        .unwrap();
    assert_eq!(unknown.sign, None);
    assert_eq!(unknown.glyph, None);

    // the derived fields sit next to the flattened entry on the wire
    let json = serde_json::to_value(leo).unwrap();
    assert_eq!(json["username"], "astroqueen");
    assert_eq!(json["sign"], "Leo");
}

mod http {
    use actix_web::{test, web, App};
    use signsync_algo::routes;
    use signsync_algo::routes::matches::AppState;
    use signsync_algo::services::{
        ContentCache, HostBridge, MockDirectory, MockEngagementFeed, MockLeaderboardFeed, Session,
    };
    use std::sync::Arc;

    fn test_state() -> AppState {
        AppState {
            directory: Arc::new(MockDirectory::new(0)),
            engagement: Arc::new(MockEngagementFeed::new(0)),
            leaderboard: Arc::new(MockLeaderboardFeed::new(0)),
            cache: Arc::new(ContentCache::new(64, 60)),
            bridge: Arc::new(HostBridge::default()),
            session: Arc::new(Session::new()),
        }
    }

    #[actix_web::test]
    async fn test_daily_horoscope_is_decan_accurate_across_users() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .configure(routes::configure_routes),
        )
        .await;

        // Two Leos on the same reading date, born in different decans
        let early = test::TestRequest::post()
            .uri("/api/v1/horoscope/daily")
            .set_json(serde_json::json!({ "birthDate": "1995-08-02", "date": "2024-03-14" }))
            .to_request();
        let early_body: serde_json::Value = test::call_and_read_body_json(&app, early).await;
        assert_eq!(early_body["sign"], "Leo");
        assert_eq!(early_body["decan"], "early");

        let late = test::TestRequest::post()
            .uri("/api/v1/horoscope/daily")
            .set_json(serde_json::json!({ "birthDate": "1995-07-23", "date": "2024-03-14" }))
            .to_request();
        let late_body: serde_json::Value = test::call_and_read_body_json(&app, late).await;
        assert_eq!(late_body["sign"], "Leo");
        assert_eq!(late_body["decan"], "late");
        assert_ne!(
            early_body["forecast"]["preview"],
            late_body["forecast"]["preview"]
        );

        // Same decan on the same date is served from cache unchanged
        let repeat = test::TestRequest::post()
            .uri("/api/v1/horoscope/daily")
            .set_json(serde_json::json!({ "birthDate": "1995-07-23", "date": "2024-03-14" }))
            .to_request();
        let repeat_body: serde_json::Value = test::call_and_read_body_json(&app, repeat).await;
        assert_eq!(repeat_body, late_body);
    }

    #[actix_web::test]
    async fn test_leaderboard_route_serves_signs() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .configure(routes::configure_routes),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/v1/leaderboard")
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        let entries = body["entries"].as_array().unwrap();
        assert_eq!(entries.len(), 10);
        let with_birth = entries
            .iter()
            .find(|e| e["username"] == "astroqueen")
            .unwrap();
        assert_eq!(with_birth["sign"], "Leo");
        assert_eq!(with_birth["glyph"], "\u{264C}");
    }
}
