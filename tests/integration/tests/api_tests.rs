//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance with migrations applied
//! - Environment variables: DATABASE_URL, JWT_SECRET
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, check_test_env, fixtures::*, TestServer};
use reqwest::StatusCode;

/// Register a fresh user and return the auth payload
async fn register_user(server: &TestServer) -> AuthResponse {
    let request = RegisterRequest::unique();
    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

/// Create a workshop as `token` and return it
async fn create_workshop(server: &TestServer, token: &str) -> WorkshopResponse {
    let request = CreateWorkshopRequest::unique();
    let response = server
        .post_auth("/api/v1/workshops", token, &request)
        .await
        .unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

/// Create a club as `token` and return it
async fn create_club(server: &TestServer, token: &str, private: bool) -> ClubResponse {
    let request = if private {
        CreateClubRequest::private()
    } else {
        CreateClubRequest::unique()
    };
    let response = server.post_auth("/api/v1/clubs", token, &request).await.unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_register_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(auth.user.username, request.username);
    assert_eq!(auth.user.email, request.email);
    assert_eq!(auth.token_type, "Bearer");
    assert!(!auth.access_token.is_empty());
    assert!(!auth.refresh_token.is_empty());
}

#[tokio::test]
async fn test_register_duplicate_email() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let mut request = RegisterRequest::unique();

    server.post("/api/v1/auth/register", &request).await.unwrap();

    // Same email under a new username still conflicts
    request.username = format!("{}x", request.username);
    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_register_weak_password() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let mut request = RegisterRequest::unique();
    request.password = "alllowercase1".to_string();

    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_login() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let register = RegisterRequest::unique();
    server.post("/api/v1/auth/register", &register).await.unwrap();

    let login = LoginRequest::from_register(&register);
    let response = server.post("/api/v1/auth/login", &login).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(auth.user.email, register.email);
}

#[tokio::test]
async fn test_login_wrong_password() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let register = RegisterRequest::unique();
    server.post("/api/v1/auth/register", &register).await.unwrap();

    let mut login = LoginRequest::from_register(&register);
    login.password = "WrongPass123!".to_string();
    let response = server.post("/api/v1/auth/login", &login).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_refresh_rotates_session() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register_user(&server).await;

    let refresh = RefreshTokenRequest {
        refresh_token: auth.refresh_token.clone(),
    };
    let response = server.post("/api/v1/auth/refresh", &refresh).await.unwrap();
    let rotated: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!rotated.access_token.is_empty());

    // The old refresh token died with its session
    let response = server.post("/api/v1/auth/refresh", &refresh).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_logout_closes_session() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register_user(&server).await;

    let response = server
        .post_auth_empty("/api/v1/auth/logout", &auth.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // The refresh token bound to the closed session is now dead
    let refresh = RefreshTokenRequest {
        refresh_token: auth.refresh_token,
    };
    let response = server.post("/api/v1/auth/refresh", &refresh).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_unauthenticated_request_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/v1/users/@me").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// Profile Tests
// ============================================================================

#[tokio::test]
async fn test_get_current_profile() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register_user(&server).await;

    let response = server
        .get_auth("/api/v1/users/@me", &auth.access_token)
        .await
        .unwrap();
    let profile: CurrentProfileResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(profile.id, auth.user.id);
    assert_eq!(profile.username, auth.user.username);
}

#[tokio::test]
async fn test_update_profile() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register_user(&server).await;

    let body = serde_json::json!({ "display_name": "Ink Well", "bio": "I write." });
    let response = server
        .patch_auth("/api/v1/users/@me", &auth.access_token, &body)
        .await
        .unwrap();
    let profile: CurrentProfileResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(profile.display_name.as_deref(), Some("Ink Well"));
    assert_eq!(profile.bio.as_deref(), Some("I write."));

    // Empty string clears the field
    let body = serde_json::json!({ "display_name": "" });
    let response = server
        .patch_auth("/api/v1/users/@me", &auth.access_token, &body)
        .await
        .unwrap();
    let profile: CurrentProfileResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(profile.display_name.is_none());
}

#[tokio::test]
async fn test_public_profile_counts_contributions() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register_user(&server).await;
    create_workshop(&server, &auth.access_token).await;

    let response = server
        .get_auth(
            &format!("/api/v1/users/{}", auth.user.id),
            &auth.access_token,
        )
        .await
        .unwrap();
    let profile: ProfileWithStatsResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(profile.id, auth.user.id);
    assert!(profile.workshops_created >= 1);
}

// ============================================================================
// Workshop Tests
// ============================================================================

#[tokio::test]
async fn test_create_workshop_creator_is_first_member() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register_user(&server).await;

    let workshop = create_workshop(&server, &auth.access_token).await;
    assert_eq!(workshop.creator_id, auth.user.id);
    assert_eq!(workshop.current_participants, 1);
    assert_eq!(workshop.status, "recruiting");

    let response = server
        .get_auth(
            &format!("/api/v1/workshops/{}/members", workshop.id),
            &auth.access_token,
        )
        .await
        .unwrap();
    let members: Vec<MemberResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(members.len(), 1);
    assert_eq!(members[0].user.id, auth.user.id);
    assert_eq!(members[0].role, "creator");
}

#[tokio::test]
async fn test_get_workshop_joins_creator_profile() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register_user(&server).await;
    let workshop = create_workshop(&server, &auth.access_token).await;

    let response = server
        .get_auth(
            &format!("/api/v1/workshops/{}", workshop.id),
            &auth.access_token,
        )
        .await
        .unwrap();
    let detail: WorkshopDetailResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(detail.id, workshop.id);
    assert_eq!(detail.creator.id, auth.user.id);
}

#[tokio::test]
async fn test_update_workshop_requires_creator() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let creator = register_user(&server).await;
    let other = register_user(&server).await;
    let workshop = create_workshop(&server, &creator.access_token).await;

    let body = serde_json::json!({ "status": "closed" });
    let response = server
        .patch_auth(
            &format!("/api/v1/workshops/{}", workshop.id),
            &other.access_token,
            &body,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server
        .patch_auth(
            &format!("/api/v1/workshops/{}", workshop.id),
            &creator.access_token,
            &body,
        )
        .await
        .unwrap();
    let updated: WorkshopResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.status, "closed");
}

// ============================================================================
// Workshop Membership Tests
// ============================================================================

#[tokio::test]
async fn test_join_workshop() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let creator = register_user(&server).await;
    let joiner = register_user(&server).await;
    let workshop = create_workshop(&server, &creator.access_token).await;

    let response = server
        .post_auth_empty(
            &format!("/api/v1/workshops/{}/members", workshop.id),
            &joiner.access_token,
        )
        .await
        .unwrap();
    let joined: WorkshopJoinResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(joined.member.user.id, joiner.user.id);
    assert_eq!(joined.member.role, "member");
    assert_eq!(joined.current_participants, 2);
}

#[tokio::test]
async fn test_duplicate_join_conflicts() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let creator = register_user(&server).await;
    let joiner = register_user(&server).await;
    let workshop = create_workshop(&server, &creator.access_token).await;

    let path = format!("/api/v1/workshops/{}/members", workshop.id);
    let response = server.post_auth_empty(&path, &joiner.access_token).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server.post_auth_empty(&path, &joiner.access_token).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_join_missing_workshop() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register_user(&server).await;

    let response = server
        .post_auth_empty(
            "/api/v1/workshops/00000000-0000-0000-0000-000000000000/members",
            &auth.access_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_leave_workshop_and_second_leave() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let creator = register_user(&server).await;
    let joiner = register_user(&server).await;
    let workshop = create_workshop(&server, &creator.access_token).await;

    server
        .post_auth_empty(
            &format!("/api/v1/workshops/{}/members", workshop.id),
            &joiner.access_token,
        )
        .await
        .unwrap();

    let path = format!("/api/v1/workshops/{}/members/{}", workshop.id, joiner.user.id);
    let response = server.delete_auth(&path, &joiner.access_token).await.unwrap();
    let left: WorkshopLeaveResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(left.current_participants, 1);

    // Membership is gone; leaving again reads as absent
    let response = server.delete_auth(&path, &joiner.access_token).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_creator_cannot_leave() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let creator = register_user(&server).await;
    let workshop = create_workshop(&server, &creator.access_token).await;

    let response = server
        .delete_auth(
            &format!("/api/v1/workshops/{}/members/{}", workshop.id, creator.user.id),
            &creator.access_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_only_creator_removes_other_members() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let creator = register_user(&server).await;
    let member = register_user(&server).await;
    let stranger = register_user(&server).await;
    let workshop = create_workshop(&server, &creator.access_token).await;

    server
        .post_auth_empty(
            &format!("/api/v1/workshops/{}/members", workshop.id),
            &member.access_token,
        )
        .await
        .unwrap();

    let path = format!("/api/v1/workshops/{}/members/{}", workshop.id, member.user.id);

    // A third party cannot remove someone else
    let response = server.delete_auth(&path, &stranger.access_token).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    // The creator can
    let response = server.delete_auth(&path, &creator.access_token).await.unwrap();
    let left: WorkshopLeaveResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(left.current_participants, 1);
}

#[tokio::test]
async fn test_participant_counter_tracks_membership() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let creator = register_user(&server).await;
    let workshop = create_workshop(&server, &creator.access_token).await;
    let path = format!("/api/v1/workshops/{}/members", workshop.id);

    // Three joins, one leave: 1 (creator) + 3 - 1
    let mut joiners = Vec::new();
    for _ in 0..3 {
        let joiner = register_user(&server).await;
        let response = server.post_auth_empty(&path, &joiner.access_token).await.unwrap();
        assert_status(response, StatusCode::CREATED).await.unwrap();
        joiners.push(joiner);
    }

    let leaving = &joiners[0];
    server
        .delete_auth(
            &format!("{}/{}", path, leaving.user.id),
            &leaving.access_token,
        )
        .await
        .unwrap();

    let response = server
        .get_auth(
            &format!("/api/v1/workshops/{}", workshop.id),
            &creator.access_token,
        )
        .await
        .unwrap();
    let detail: WorkshopDetailResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(detail.current_participants, 3);

    let response = server.get_auth(&path, &creator.access_token).await.unwrap();
    let members: Vec<MemberResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(members.len(), 3);
}

// ============================================================================
// Workshop Chat Tests
// ============================================================================

#[tokio::test]
async fn test_member_sends_and_lists_messages() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let creator = register_user(&server).await;
    let member = register_user(&server).await;
    let workshop = create_workshop(&server, &creator.access_token).await;

    server
        .post_auth_empty(
            &format!("/api/v1/workshops/{}/members", workshop.id),
            &member.access_token,
        )
        .await
        .unwrap();

    let path = format!("/api/v1/workshops/{}/messages", workshop.id);
    let response = server
        .post_auth(&path, &member.access_token, &SendMessageRequest::simple("hi"))
        .await
        .unwrap();
    let sent: MessageResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // The returned message carries the sender's public profile
    assert_eq!(sent.content, "hi");
    assert_eq!(sent.sender.id, member.user.id);
    assert_eq!(sent.sender.username, member.user.username);

    // Both members see it
    for token in [&member.access_token, &creator.access_token] {
        let response = server.get_auth(&path, token).await.unwrap();
        let messages: Vec<MessageResponse> = assert_json(response, StatusCode::OK).await.unwrap();
        assert!(messages.iter().any(|m| m.id == sent.id));
    }
}

#[tokio::test]
async fn test_messages_listed_in_send_order() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let creator = register_user(&server).await;
    let workshop = create_workshop(&server, &creator.access_token).await;
    let path = format!("/api/v1/workshops/{}/messages", workshop.id);

    for content in ["first", "second", "third"] {
        let response = server
            .post_auth(&path, &creator.access_token, &SendMessageRequest::simple(content))
            .await
            .unwrap();
        assert_status(response, StatusCode::CREATED).await.unwrap();
    }

    let response = server.get_auth(&path, &creator.access_token).await.unwrap();
    let messages: Vec<MessageResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    let contents: Vec<&str> = messages.iter().map(|m| m.content.as_str()).collect();
    assert_eq!(contents, vec!["first", "second", "third"]);

    // Ascending created_at
    for pair in messages.windows(2) {
        assert!(pair[0].created_at <= pair[1].created_at);
    }
}

#[tokio::test]
async fn test_empty_message_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let creator = register_user(&server).await;
    let workshop = create_workshop(&server, &creator.access_token).await;
    let path = format!("/api/v1/workshops/{}/messages", workshop.id);

    for body in ["", "   \t  "] {
        let response = server
            .post_auth(&path, &creator.access_token, &SendMessageRequest::simple(body))
            .await
            .unwrap();
        assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
    }

    // No message row was produced
    let response = server.get_auth(&path, &creator.access_token).await.unwrap();
    let messages: Vec<MessageResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(messages.is_empty());
}

#[tokio::test]
async fn test_non_member_chat_access_forbidden() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let creator = register_user(&server).await;
    let stranger = register_user(&server).await;
    let workshop = create_workshop(&server, &creator.access_token).await;
    let path = format!("/api/v1/workshops/{}/messages", workshop.id);

    let response = server
        .post_auth(&path, &stranger.access_token, &SendMessageRequest::simple("hello"))
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    // Listing is forbidden too, never an empty 200
    let response = server.get_auth(&path, &stranger.access_token).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_message_deletion_moderation() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let creator = register_user(&server).await;
    let sender = register_user(&server).await;
    let bystander = register_user(&server).await;
    let workshop = create_workshop(&server, &creator.access_token).await;

    let members_path = format!("/api/v1/workshops/{}/members", workshop.id);
    for token in [&sender.access_token, &bystander.access_token] {
        server.post_auth_empty(&members_path, token).await.unwrap();
    }

    let messages_path = format!("/api/v1/workshops/{}/messages", workshop.id);
    let response = server
        .post_auth(&messages_path, &sender.access_token, &SendMessageRequest::simple("draft"))
        .await
        .unwrap();
    let sent: MessageResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let delete_path = format!("{}/{}", messages_path, sent.id);

    // A member who is neither sender nor creator cannot delete
    let response = server.delete_auth(&delete_path, &bystander.access_token).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    // The workshop creator can
    let response = server.delete_auth(&delete_path, &creator.access_token).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get_auth(&messages_path, &creator.access_token).await.unwrap();
    let messages: Vec<MessageResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(messages.iter().all(|m| m.id != sent.id));
}

/// End-to-end walk through the core membership/chat flow
#[tokio::test]
async fn test_flash_fiction_scenario() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let alice = register_user(&server).await;
    let bob = register_user(&server).await;

    // A creates "Flash Fiction"; creator is the first member
    let response = server
        .post_auth(
            "/api/v1/workshops",
            &alice.access_token,
            &CreateWorkshopRequest::named("Flash Fiction"),
        )
        .await
        .unwrap();
    let workshop: WorkshopResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(workshop.current_participants, 1);

    // B joins
    let members_path = format!("/api/v1/workshops/{}/members", workshop.id);
    let response = server
        .post_auth_empty(&members_path, &bob.access_token)
        .await
        .unwrap();
    let joined: WorkshopJoinResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(joined.current_participants, 2);

    // B says hi; both see it
    let messages_path = format!("/api/v1/workshops/{}/messages", workshop.id);
    let response = server
        .post_auth(&messages_path, &bob.access_token, &SendMessageRequest::simple("hi"))
        .await
        .unwrap();
    let sent: MessageResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(sent.sender.id, bob.user.id);

    for token in [&alice.access_token, &bob.access_token] {
        let response = server.get_auth(&messages_path, token).await.unwrap();
        let messages: Vec<MessageResponse> = assert_json(response, StatusCode::OK).await.unwrap();
        assert!(messages.iter().any(|m| m.id == sent.id));
    }

    // B leaves; the counter comes back down
    let response = server
        .delete_auth(
            &format!("{}/{}", members_path, bob.user.id),
            &bob.access_token,
        )
        .await
        .unwrap();
    let left: WorkshopLeaveResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(left.current_participants, 1);

    // B's chat access went with the membership
    let response = server
        .post_auth(&messages_path, &bob.access_token, &SendMessageRequest::simple("me again"))
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

// ============================================================================
// Book Club Tests
// ============================================================================

#[tokio::test]
async fn test_create_and_join_public_club() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let creator = register_user(&server).await;
    let joiner = register_user(&server).await;

    let club = create_club(&server, &creator.access_token, false).await;
    assert!(!club.is_private);
    assert_eq!(club.current_member_count, 1);

    let response = server
        .post_auth(
            &format!("/api/v1/clubs/{}/members", club.id),
            &joiner.access_token,
            &JoinClubRequest::default(),
        )
        .await
        .unwrap();
    let joined: ClubJoinResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(joined.current_member_count, 2);

    // Duplicate join conflicts
    let response = server
        .post_auth(
            &format!("/api/v1/clubs/{}/members", club.id),
            &joiner.access_token,
            &JoinClubRequest::default(),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_private_club_requires_invite() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let creator = register_user(&server).await;
    let joiner = register_user(&server).await;

    let club = create_club(&server, &creator.access_token, true).await;
    let members_path = format!("/api/v1/clubs/{}/members", club.id);

    // No code: forbidden
    let response = server
        .post_auth(&members_path, &joiner.access_token, &JoinClubRequest::default())
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    // Unknown code: not found
    let response = server
        .post_auth(
            &members_path,
            &joiner.access_token,
            &JoinClubRequest::with_code("nosuch00"),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    // A live invite opens the door
    let response = server
        .post_auth(
            &format!("/api/v1/clubs/{}/invites", club.id),
            &creator.access_token,
            &CreateInviteRequest::default(),
        )
        .await
        .unwrap();
    let invite: InviteResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(invite.inviter.id, creator.user.id);

    let response = server
        .post_auth(
            &members_path,
            &joiner.access_token,
            &JoinClubRequest::with_code(&invite.code),
        )
        .await
        .unwrap();
    let joined: ClubJoinResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(joined.current_member_count, 2);
}

#[tokio::test]
async fn test_invite_creation_is_creator_only() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let creator = register_user(&server).await;
    let member = register_user(&server).await;

    let club = create_club(&server, &creator.access_token, true).await;

    let response = server
        .post_auth(
            &format!("/api/v1/clubs/{}/invites", club.id),
            &member.access_token,
            &CreateInviteRequest::default(),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_club_leave_and_creator_lock_in() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let creator = register_user(&server).await;
    let joiner = register_user(&server).await;

    let club = create_club(&server, &creator.access_token, false).await;
    let members_path = format!("/api/v1/clubs/{}/members", club.id);

    server
        .post_auth(&members_path, &joiner.access_token, &JoinClubRequest::default())
        .await
        .unwrap();

    // The creator cannot walk away from their own club
    let response = server
        .delete_auth(
            &format!("{}/{}", members_path, creator.user.id),
            &creator.access_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();

    // A regular member can leave, once
    let leave_path = format!("{}/{}", members_path, joiner.user.id);
    let response = server.delete_auth(&leave_path, &joiner.access_token).await.unwrap();
    let left: ClubLeaveResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(left.current_member_count, 1);

    let response = server.delete_auth(&leave_path, &joiner.access_token).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Discussion Thread Tests
// ============================================================================

#[tokio::test]
async fn test_thread_with_replies() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = register_user(&server).await;
    let replier = register_user(&server).await;

    let response = server
        .post_auth("/api/v1/threads", &author.access_token, &CreateThreadRequest::unique())
        .await
        .unwrap();
    let thread: ThreadResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(thread.reply_count, 0);

    let replies_path = format!("/api/v1/threads/{}/replies", thread.id);
    let response = server
        .post_auth(&replies_path, &replier.access_token, &CreateReplyRequest::simple("nice idea"))
        .await
        .unwrap();
    let reply: ReplyResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(reply.author.id, replier.user.id);

    // Nested reply referencing the first
    let nested = CreateReplyRequest {
        content: "agreed".to_string(),
        parent_reply_id: Some(reply.id.clone()),
    };
    let response = server
        .post_auth(&replies_path, &author.access_token, &nested)
        .await
        .unwrap();
    let nested_reply: ReplyResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(nested_reply.parent_reply_id.as_deref(), Some(reply.id.as_str()));

    // reply_count moved with the reply rows
    let response = server
        .get_auth(&format!("/api/v1/threads/{}", thread.id), &author.access_token)
        .await
        .unwrap();
    let fetched: ThreadResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.reply_count, 2);
}

#[tokio::test]
async fn test_locked_thread_rejects_replies() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = register_user(&server).await;
    let replier = register_user(&server).await;

    let response = server
        .post_auth("/api/v1/threads", &author.access_token, &CreateThreadRequest::unique())
        .await
        .unwrap();
    let thread: ThreadResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let body = serde_json::json!({ "locked": true });
    let response = server
        .patch_auth(&format!("/api/v1/threads/{}", thread.id), &author.access_token, &body)
        .await
        .unwrap();
    let locked: ThreadResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(locked.is_locked);

    let response = server
        .post_auth(
            &format!("/api/v1/threads/{}/replies", thread.id),
            &replier.access_token,
            &CreateReplyRequest::simple("too late"),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

// ============================================================================
// Community Stats Tests
// ============================================================================

#[tokio::test]
async fn test_community_stats() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register_user(&server).await;
    create_workshop(&server, &auth.access_token).await;

    let response = server.get_auth("/api/v1/stats", &auth.access_token).await.unwrap();
    let stats: CommunityStatsResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(stats.total_writers >= 1);
    assert!(stats.total_workshops >= 1);
    assert!(stats.threads_last_7d <= stats.total_threads);
    assert!(stats.messages_last_7d <= stats.total_messages);
}
