use super::*;
use mockito::Matcher;
use serde_json::json;

fn session() -> SessionCredentials {
    SessionCredentials {
        username: "admin".to_string(),
        subsonic_token: "tok".to_string(),
        subsonic_salt: "salt".to_string(),
        client_unique_id: "cid-1".to_string(),
        token: "jwt".to_string(),
        is_admin: true,
    }
}

fn auth_query() -> Matcher {
    Matcher::AllOf(vec![
        Matcher::UrlEncoded("u".into(), "admin".into()),
        Matcher::UrlEncoded("t".into(), "tok".into()),
        Matcher::UrlEncoded("s".into(), "salt".into()),
        Matcher::UrlEncoded("c".into(), CLIENT_NAME.into()),
        Matcher::UrlEncoded("v".into(), API_VERSION.into()),
        Matcher::UrlEncoded("f".into(), "json".into()),
    ])
}

#[test]
fn envelope_parses_wrapped_and_bare_bodies() {
    let wrapped = SubsonicEnvelope::parse(
        r#"{"subsonic-response":{"status":"ok","deleteResponse":{"success":true}}}"#,
    )
    .unwrap();
    assert!(wrapped.is_ok());
    assert!(wrapped.delete_response.unwrap().success);

    let bare = SubsonicEnvelope::parse(r#"{"status":"failed","error":{"code":70,"message":"Song not found"}}"#)
        .unwrap();
    assert!(!bare.is_ok());
    assert_eq!(bare.error.unwrap().message, "Song not found");
}

#[test]
fn failure_message_prefers_action_then_error_then_fallback() {
    let envelope = SubsonicEnvelope::parse(
        r#"{"status":"ok","deleteResponse":{"success":false,"message":"locked"}}"#,
    )
    .unwrap();
    let err = envelope
        .action_result(envelope.delete_response.as_ref(), "Delete failed")
        .unwrap_err();
    assert_eq!(err.to_string(), "locked");

    let envelope =
        SubsonicEnvelope::parse(r#"{"status":"failed","error":{"code":0,"message":"boom"}}"#).unwrap();
    let err = envelope
        .action_result(envelope.delete_response.as_ref(), "Delete failed")
        .unwrap_err();
    assert_eq!(err.to_string(), "boom");

    let envelope = SubsonicEnvelope::parse(r#"{"status":"ok"}"#).unwrap();
    let err = envelope
        .action_result(envelope.delete_response.as_ref(), "Delete failed")
        .unwrap_err();
    assert_eq!(err.to_string(), "Delete failed");
}

#[tokio::test]
async fn delete_song_posts_body_with_session_credentials() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/rest/deleteSong")
        .match_query(auth_query())
        .match_header("x-nd-authorization", "Bearer jwt")
        .match_header("x-nd-client-unique-id", "cid-1")
        .match_body(Matcher::Json(json!({ "songId": "s1" })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"subsonic-response":{"status":"ok","deleteResponse":{"success":true,"message":"Song deleted successfully"}}}"#)
        .create_async()
        .await;

    let client = NavidromeClient::new(&server.url(), session());
    client.delete_item(ResourceKind::Song, "s1").await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn delete_album_reports_server_message_on_failure() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/rest/deleteAlbum")
        .match_query(Matcher::Any)
        .match_body(Matcher::Json(json!({ "albumId": "al-9" })))
        .with_status(200)
        .with_body(r#"{"subsonic-response":{"status":"failed","error":{"code":70,"message":"Album not found"}}}"#)
        .create_async()
        .await;

    let client = NavidromeClient::new(&server.url(), session());
    let err = client
        .delete_item(ResourceKind::Album, "al-9")
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Backend(ref m) if m == "Album not found"));
}

#[tokio::test]
async fn non_2xx_and_garbage_bodies_are_not_transport_errors() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/rest/deleteSong")
        .match_query(Matcher::Any)
        .with_status(502)
        .with_body("bad gateway")
        .create_async()
        .await;

    let client = NavidromeClient::new(&server.url(), session());
    let err = client.delete_item(ResourceKind::Song, "s1").await.unwrap_err();
    assert!(matches!(err, ApiError::Status { status: 502 }));
    assert!(!err.is_transport());

    let mut html_server = mockito::Server::new_async().await;
    html_server
        .mock("POST", "/rest/deleteSong")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("<html>not json</html>")
        .create_async()
        .await;
    let client = NavidromeClient::new(&html_server.url(), session());
    let err = client.delete_item(ResourceKind::Song, "s1").await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[tokio::test]
async fn unreachable_server_is_a_transport_error() {
    let client = NavidromeClient::new("http://127.0.0.1:1", session());
    let err = client.delete_item(ResourceKind::Song, "s1").await.unwrap_err();
    assert!(err.is_transport());
    assert!(err.user_message().starts_with("Network error: "));
}

#[tokio::test]
async fn empty_id_is_rejected_without_a_request() {
    let client = NavidromeClient::new("http://127.0.0.1:1", session());
    let err = client.delete_item(ResourceKind::Song, "  ").await.unwrap_err();
    assert!(matches!(err, ApiError::Validation(ref m) if m == "Song ID is required"));
}

#[tokio::test]
async fn download_sends_library_only_when_set() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/rest/downloadSong")
        .match_query(Matcher::Any)
        .match_body(Matcher::Json(json!({ "url": "https://youtu.be/abc" })))
        .with_status(200)
        .with_body(r#"{"subsonic-response":{"status":"ok","downloadResponse":{"success":true,"message":"Song downloaded successfully","file":"Artist - Title.mp3"}}}"#)
        .create_async()
        .await;

    let client = NavidromeClient::new(&server.url(), session());
    let request = DownloadRequest::new("https://youtu.be/abc", "").unwrap();
    let receipt = client.download_song(&request).await.unwrap();
    assert_eq!(receipt.file.as_deref(), Some("Artist - Title.mp3"));
    mock.assert_async().await;
}

#[tokio::test]
async fn album_tag_update_returns_server_counts() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("PUT", "/api/album/al-1/tags")
        .match_header("x-nd-authorization", "Bearer jwt")
        .match_body(Matcher::Json(json!({ "genre": "Jazz" })))
        .with_status(200)
        .with_body(r#"{"id":"al-1","success":true,"message":"Updated 9 songs, 1 errors","successCount":9,"errorCount":1}"#)
        .create_async()
        .await;

    let client = NavidromeClient::new(&server.url(), session());
    let patch = AlbumTagPatch {
        genre: Some("Jazz".to_string()),
        ..Default::default()
    };
    let outcome = client.update_album_tags("al-1", &patch).await.unwrap();
    assert_eq!(
        outcome,
        TagUpdateOutcome {
            success_count: 9,
            error_count: 1
        }
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn song_tag_update_surfaces_plain_text_errors() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("PUT", "/api/song/s1/tags")
        .with_status(404)
        .with_body("File is missing\n")
        .create_async()
        .await;

    let client = NavidromeClient::new(&server.url(), session());
    let patch = SongTagPatch {
        title: Some("x".to_string()),
        ..Default::default()
    };
    let err = client.update_song_tags("s1", &patch).await.unwrap_err();
    assert!(matches!(err, ApiError::Backend(ref m) if m == "File is missing"));
}

#[tokio::test]
async fn song_list_is_served_from_cache_until_invalidated() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/rest/search3")
        .match_query(Matcher::UrlEncoded("songCount".into(), "50".into()))
        .with_status(200)
        .with_body(r#"{"subsonic-response":{"status":"ok","searchResult3":{"song":[{"id":"s1","title":"One"}]}}}"#)
        .expect(2)
        .create_async()
        .await;

    let client = NavidromeClient::new(&server.url(), session());
    assert_eq!(client.get_songs(0, 50).await.unwrap().len(), 1);
    assert_eq!(client.get_songs(0, 50).await.unwrap()[0].title, "One");

    crate::cache_service::remove_by_prefix(list_cache_prefix(ResourceKind::Song));
    client.get_songs(0, 50).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn create_share_sends_every_id_once() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/rest/createShare")
        .match_query(Matcher::Regex(
            "(^|&)id=s1&id=s2&description=mix($|&)".into(),
        ))
        .with_status(200)
        .with_body(r#"{"subsonic-response":{"status":"ok","shares":{"share":[{"id":"sh1","url":"https://nd/share/sh1"}]}}}"#)
        .expect(1)
        .create_async()
        .await;

    let client = NavidromeClient::new(&server.url(), session());
    let share = client
        .create_share(&["s1".to_string(), "s2".to_string()], Some(" mix "), None)
        .await
        .unwrap();
    assert_eq!(share.url, "https://nd/share/sh1");
    mock.assert_async().await;
}

#[tokio::test]
async fn sign_in_stores_native_token_and_role() {
    let mut server = mockito::Server::new_async().await;
    let login = server
        .mock("POST", "/auth/login")
        .match_body(Matcher::Json(json!({ "username": "admin", "password": "secret" })))
        .with_status(200)
        .with_body(r#"{"id":"user-1","name":"Admin","username":"admin","isAdmin":true,"token":"jwt-abc","subsonicSalt":"s4lt","subsonicToken":"t0k"}"#)
        .create_async()
        .await;
    let ping = server
        .mock("GET", "/rest/ping")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("t".into(), "t0k".into()),
            Matcher::UrlEncoded("s".into(), "s4lt".into()),
        ]))
        .with_status(200)
        .with_body(r#"{"subsonic-response":{"status":"ok"}}"#)
        .create_async()
        .await;

    let credentials = NavidromeClient::sign_in(&server.url(), " admin ", "secret", "cid-7")
        .await
        .unwrap();
    assert_eq!(credentials.token, "jwt-abc");
    assert_eq!(credentials.client_unique_id, "cid-7");
    assert!(credentials.is_admin);
    login.assert_async().await;
    ping.assert_async().await;

    let tags = server
        .mock("PUT", "/api/song/s1/tags")
        .match_header("x-nd-authorization", "Bearer jwt-abc")
        .match_header("x-nd-client-unique-id", "cid-7")
        .with_status(200)
        .with_body(r#"{"id":"s1","success":true}"#)
        .create_async()
        .await;
    let client = NavidromeClient::new(&server.url(), credentials);
    let patch = SongTagPatch {
        title: Some("x".to_string()),
        ..Default::default()
    };
    client.update_song_tags("s1", &patch).await.unwrap();
    tags.assert_async().await;
}

#[tokio::test]
async fn rejected_login_reports_server_reason() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/auth/login")
        .with_status(401)
        .with_body(r#"{"error":"Invalid username or password"}"#)
        .create_async()
        .await;

    let err = NavidromeClient::sign_in(&server.url(), "admin", "wrong", "")
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Backend(ref m) if m == "Invalid username or password"));
}

#[tokio::test]
async fn login_without_token_is_an_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/auth/login")
        .with_status(200)
        .with_body(r#"{"username":"admin","isAdmin":false}"#)
        .create_async()
        .await;

    let err = NavidromeClient::sign_in(&server.url(), "admin", "secret", "")
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Backend(ref m) if m == "Login did not return a session token"));
}
