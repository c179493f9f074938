//! Integration tests for the resource wrappers and model strategies.

use std::collections::HashMap;

use chrono::{Duration, Utc};
use futures::TryStreamExt;
use serde_json::json;
use webex_api::models::{RawModels, SimpleModels};
use webex_api::rest::resources::{
    AttachmentActionCreateParams, BulkInviteeParams, DirectMessageListParams, EventListParams,
    GuestTokenRequest, MeetingCreateParams, MeetingInviteeListParams, MeetingInviteeParams,
    MeetingListParams, MessageCreateParams, RecordingListParams, RecordingScopeParams,
    RoomCreateParams, RoomUpdateParams, TeamMembershipListParams, WebhookCreateParams,
};
use webex_api::{AccessToken, BaseUrl, HttpError, WebexApi, WebexConfig};
use wiremock::matchers::{body_json, body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn create_test_config(server: &MockServer) -> WebexConfig {
    WebexConfig::builder()
        .access_token(AccessToken::new("test-token").unwrap())
        .base_url(BaseUrl::new(format!("{}/v1/", server.uri())).unwrap())
        .build()
        .unwrap()
}

fn create_test_api(server: &MockServer) -> WebexApi {
    WebexApi::new(&create_test_config(server)).unwrap()
}

fn room_json() -> serde_json::Value {
    json!({
        "id": "r1",
        "title": "Project Unicorn",
        "type": "group",
        "isLocked": false,
        "created": "2024-05-01T12:30:00.000Z"
    })
}

// ============================================================================
// Rooms
// ============================================================================

#[tokio::test]
async fn test_rooms_crud() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/rooms"))
        .and(body_json(json!({"title": "Project Unicorn"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(room_json()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/rooms/r1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(room_json()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/v1/rooms/r1"))
        .and(body_json(json!({"title": "Renamed", "isLocked": true})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": "r1", "title": "Renamed"})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/v1/rooms/r1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let rooms = create_test_api(&server).rooms();

    let created = rooms
        .create(&RoomCreateParams::new("Project Unicorn"))
        .await
        .unwrap();
    assert_eq!(created.id(), Some("r1"));
    assert_eq!(created.room_type(), Some("group"));
    assert_eq!(created.is_locked(), Some(false));
    assert_eq!(
        created.created().map(|c| c.to_rfc3339()),
        Some("2024-05-01T12:30:00+00:00".to_string())
    );

    let fetched = rooms.get("r1").await.unwrap();
    assert_eq!(fetched.title(), Some("Project Unicorn"));

    let updated = rooms
        .update(
            "r1",
            &RoomUpdateParams {
                title: "Renamed".to_string(),
                is_locked: Some(true),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.title(), Some("Renamed"));

    rooms.delete("r1").await.unwrap();
}

#[tokio::test]
async fn test_empty_id_is_rejected_without_a_request() {
    let server = MockServer::start().await;
    let error = create_test_api(&server).rooms().get("").await.unwrap_err();
    assert!(matches!(error, HttpError::InvalidRequest(_)));
}

#[tokio::test]
async fn test_room_meeting_info() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/rooms/r1/meetingInfo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "roomId": "r1",
            "meetingLink": "https://example.webex.com/m/abc",
            "meetingNumber": "123456789"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let info = create_test_api(&server)
        .rooms()
        .get_meeting_info("r1")
        .await
        .unwrap();
    assert_eq!(info.meeting_link(), Some("https://example.webex.com/m/abc"));
    assert_eq!(info.meeting_number(), Some("123456789"));
}

// ============================================================================
// Model Strategies
// ============================================================================

#[tokio::test]
async fn test_model_strategies_map_the_same_payload() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/rooms/r1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(room_json()))
        .expect(3)
        .mount(&server)
        .await;

    let config = create_test_config(&server);

    let typed = WebexApi::new(&config).unwrap().rooms().get("r1").await.unwrap();
    assert_eq!(typed.title(), Some("Project Unicorn"));

    let raw = WebexApi::<RawModels>::with_models(&config)
        .unwrap()
        .rooms()
        .get("r1")
        .await
        .unwrap();
    assert_eq!(raw.get("title"), Some(&json!("Project Unicorn")));

    let simple = WebexApi::<SimpleModels>::with_models(&config)
        .unwrap()
        .rooms()
        .get("r1")
        .await
        .unwrap();
    assert_eq!(simple.model(), "room");
    assert_eq!(simple.get_str("type"), Some("group"));
}

#[tokio::test]
async fn test_listing_with_raw_models_yields_json_objects() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/team/memberships"))
        .and(query_param("teamId", "t1"))
        .and(query_param("max", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{"id": "tm1", "teamId": "t1"}, {"id": "tm2", "teamId": "t1"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = WebexApi::<RawModels>::with_models(&create_test_config(&server)).unwrap();
    let items = api
        .team_memberships()
        .list(&TeamMembershipListParams::new("t1"))
        .unwrap()
        .collect_all()
        .await
        .unwrap();

    assert_eq!(items.len(), 2);
    assert_eq!(items[1].get("id"), Some(&json!("tm2")));
}

#[tokio::test]
async fn test_non_object_item_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/webhooks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": ["oops"]})))
        .mount(&server)
        .await;

    let result = create_test_api(&server)
        .webhooks()
        .list(&Default::default())
        .unwrap()
        .collect_all()
        .await;
    assert!(matches!(result, Err(HttpError::Malformed(_))));
}

// ============================================================================
// People, Webhooks, Messages
// ============================================================================

#[tokio::test]
async fn test_people_me() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/people/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "p1",
            "emails": ["me@example.com"],
            "displayName": "Me",
            "type": "person"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let me = create_test_api(&server).people().me().await.unwrap();
    assert_eq!(me.id(), Some("p1"));
    assert_eq!(me.emails(), ["me@example.com"]);
    assert_eq!(me.person_type(), Some("person"));
}

#[tokio::test]
async fn test_webhook_create_sends_camel_case_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/webhooks"))
        .and(body_json(json!({
            "name": "hook",
            "targetUrl": "https://example.com/hook",
            "resource": "messages",
            "event": "created"
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": "w1", "name": "hook"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let webhook = create_test_api(&server)
        .webhooks()
        .create(&WebhookCreateParams {
            name: "hook".to_string(),
            target_url: "https://example.com/hook".to_string(),
            resource: "messages".to_string(),
            event: "created".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(webhook.id(), Some("w1"));
}

#[tokio::test]
async fn test_message_with_local_file_is_uploaded_as_multipart() {
    let file = std::env::temp_dir().join("webex_api_integration_upload.txt");
    std::fs::write(&file, b"quarterly numbers").unwrap();

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .and(body_string_contains("name=\"roomId\""))
        .and(body_string_contains("filename=\"webex_api_integration_upload.txt\""))
        .and(body_string_contains("quarterly numbers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "m1",
            "roomId": "r1",
            "files": ["https://example.com/contents/1"]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let message = create_test_api(&server)
        .messages()
        .create(&MessageCreateParams {
            room_id: Some("r1".to_string()),
            text: Some("see attached".to_string()),
            files: vec![file.to_string_lossy().into_owned()],
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(message.files(), ["https://example.com/contents/1"]);
    std::fs::remove_file(file).ok();
}

#[tokio::test]
async fn test_direct_messages_listing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/messages/direct"))
        .and(query_param("personEmail", "friend@example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{"id": "m1", "text": "hi"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let query = create_test_api(&server)
        .messages()
        .list_direct(&DirectMessageListParams {
            person_email: Some("friend@example.com".to_string()),
            ..Default::default()
        })
        .unwrap();
    assert!(!query.params().contains("max"));

    let messages = query.collect_all().await.unwrap();
    assert_eq!(messages[0].text(), Some("hi"));
}

// ============================================================================
// Meeting Invitees
// ============================================================================

#[tokio::test]
async fn test_meeting_invitee_headers_reach_every_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/meetingInvitees"))
        .and(query_param("meetingId", "mt1"))
        .and(header("timezone", "UTC"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header(
                    "Link",
                    format!("<{}/v1/meetingInvitees?cursor=p2>; rel=\"next\"", server.uri())
                        .as_str(),
                )
                .set_body_json(json!({"items": [{"id": "i1", "email": "a@example.com"}]})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/meetingInvitees"))
        .and(query_param("cursor", "p2"))
        .and(header("timezone", "UTC"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{"id": "i2", "email": "b@example.com"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut headers = HashMap::new();
    headers.insert("timezone".to_string(), "UTC".to_string());

    let emails: Vec<String> = create_test_api(&server)
        .meeting_invitees()
        .list_with_headers(&MeetingInviteeListParams::new("mt1"), headers)
        .unwrap()
        .stream()
        .map_ok(|invitee| invitee.email().unwrap_or_default().to_string())
        .try_collect()
        .await
        .unwrap();

    assert_eq!(emails, ["a@example.com", "b@example.com"]);
}

#[tokio::test]
async fn test_meeting_invitees_bulk_insert() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/v1/meetingInvitees/bulkInsert"))
        .and(body_json(json!({
            "meetingId": "mt1",
            "items": [{"email": "a@example.com"}, {"email": "b@example.com"}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [
                {"id": "i1", "email": "a@example.com"},
                {"id": "i2", "email": "b@example.com"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let invitee = |email: &str| MeetingInviteeParams {
        email: email.to_string(),
        ..Default::default()
    };

    let created = create_test_api(&server)
        .meeting_invitees()
        .bulk(&BulkInviteeParams {
            meeting_id: "mt1".to_string(),
            items: vec![invitee("a@example.com"), invitee("b@example.com")],
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(created.len(), 2);
    assert_eq!(created[1].id(), Some("i2"));
}

// ============================================================================
// Meetings and Recordings
// ============================================================================

#[tokio::test]
async fn test_meetings_listing_with_filters_and_headers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/meetings"))
        .and(query_param("meetingType", "scheduledMeeting"))
        .and(query_param("from", "2026-03-01T00:00:00Z"))
        .and(header("timezone", "Europe/London"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [
                {"id": "mt1", "title": "Standup", "start": "2026-03-02T09:00:00Z"},
                {"id": "mt2", "title": "Retro", "start": "2026-03-06T15:00:00Z"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut headers = HashMap::new();
    headers.insert("timezone".to_string(), "Europe/London".to_string());

    let meetings = create_test_api(&server)
        .meetings()
        .list_with_headers(
            &MeetingListParams {
                meeting_type: Some("scheduledMeeting".to_string()),
                from: Some("2026-03-01T00:00:00Z".to_string()),
                ..Default::default()
            },
            headers,
        )
        .unwrap()
        .collect_all()
        .await
        .unwrap();

    assert_eq!(meetings.len(), 2);
    assert_eq!(meetings[0].title(), Some("Standup"));
    assert!(meetings[1].start().is_some());
}

#[tokio::test]
async fn test_meeting_create_and_delete() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/meetings"))
        .and(body_json(json!({
            "title": "Planning",
            "start": "2026-04-01T10:00:00Z",
            "end": "2026-04-01T11:00:00Z"
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"id": "mt9", "title": "Planning", "state": "active"})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/v1/meetings/mt9"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let meetings = create_test_api(&server).meetings();
    let created = meetings
        .create(&MeetingCreateParams {
            title: "Planning".to_string(),
            start: "2026-04-01T10:00:00Z".to_string(),
            end: "2026-04-01T11:00:00Z".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(created.state(), Some("active"));
    meetings.delete("mt9").await.unwrap();
}

#[tokio::test]
async fn test_recordings_listing_and_scoped_calls() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/recordings"))
        .and(query_param("from", "2026-02-01T00:00:00Z"))
        .and(query_param("max", "2"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header(
                    "Link",
                    format!("<{}/v1/recordings?cursor=p2>; rel=\"next\"", server.uri()).as_str(),
                )
                .set_body_json(json!({"items": [{"id": "rec1", "format": "MP4"}]})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/recordings"))
        .and(query_param("cursor", "p2"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"items": [{"id": "rec2", "format": "ARF"}]})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/recordings/rec1"))
        .and(query_param("siteUrl", "example.webex.com"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"id": "rec1", "durationSeconds": 600})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/v1/recordings/rec2"))
        .and(query_param("hostEmail", "host@example.com"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let recordings = create_test_api(&server).recordings();

    let formats: Vec<String> = recordings
        .list(&RecordingListParams {
            from: Some("2026-02-01T00:00:00Z".to_string()),
            max: Some(2),
            ..Default::default()
        })
        .unwrap()
        .stream()
        .map_ok(|rec| rec.format().unwrap_or_default().to_string())
        .try_collect()
        .await
        .unwrap();
    assert_eq!(formats, ["MP4", "ARF"]);

    let recording = recordings
        .get_scoped(
            "rec1",
            &RecordingScopeParams {
                site_url: Some("example.webex.com".to_string()),
                host_email: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(recording.duration_seconds(), Some(600));

    recordings
        .delete_scoped(
            "rec2",
            &RecordingScopeParams {
                site_url: None,
                host_email: Some("host@example.com".to_string()),
            },
        )
        .await
        .unwrap();
}

// ============================================================================
// Events and Attachment Actions
// ============================================================================

#[tokio::test]
async fn test_events_listing_filters_by_type() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/events"))
        .and(query_param("resource", "messages"))
        .and(query_param("type", "created"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{
                "id": "ev1",
                "resource": "messages",
                "type": "created",
                "actorId": "p1",
                "created": "2026-01-15T08:00:00.000Z",
                "data": {"id": "m1", "roomId": "r1", "text": "hello"}
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let events = create_test_api(&server)
        .events()
        .list(&EventListParams {
            resource: Some("messages".to_string()),
            event_type: Some("created".to_string()),
            ..Default::default()
        })
        .unwrap()
        .collect_all()
        .await
        .unwrap();

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].actor_id(), Some("p1"));
    assert_eq!(
        events[0].data().and_then(|data| data.get("text")),
        Some(&json!("hello"))
    );
}

#[tokio::test]
async fn test_attachment_action_submit_and_get() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/attachment/actions"))
        .and(body_json(json!({
            "type": "submit",
            "messageId": "m1",
            "inputs": {"choice": "yes"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "aa1",
            "type": "submit",
            "messageId": "m1",
            "inputs": {"choice": "yes"}
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/attachment/actions/aa1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"id": "aa1", "personId": "p7", "type": "submit"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let actions = create_test_api(&server).attachment_actions();
    let mut inputs = serde_json::Map::new();
    inputs.insert("choice".to_string(), json!("yes"));

    let created = actions
        .create(&AttachmentActionCreateParams::submit("m1", inputs))
        .await
        .unwrap();
    assert_eq!(created.inputs(), Some(&json!({"choice": "yes"})));

    let fetched = actions.get("aa1").await.unwrap();
    assert_eq!(fetched.person_id(), Some("p7"));
}

// ============================================================================
// Guest Issuer
// ============================================================================

#[tokio::test]
async fn test_guest_issuer_posts_signed_jwt() {
    use base64::prelude::*;

    let request = GuestTokenRequest {
        subject: "guest-1".to_string(),
        display_name: "Guest One".to_string(),
        issuer: "issuer-id".to_string(),
        expires_at: Utc::now() + Duration::hours(1),
        secret: BASE64_STANDARD.encode(b"guest-secret"),
    };
    let jwt = request.sign().unwrap();

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/jwt/login"))
        .and(header("authorization", format!("Bearer {jwt}").as_str()))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"token": "guest-access-token", "expiresIn": 21600})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let token = create_test_api(&server)
        .guest_issuer()
        .create(&request)
        .await
        .unwrap();

    assert_eq!(token.token(), Some("guest-access-token"));
    assert_eq!(token.expires_in(), Some(21600));
}
