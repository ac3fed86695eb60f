//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use crate::handlers::{
    auth, clubs, health, invites, members, messages, profiles, replies, stats, threads, workshops,
};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health, which is
/// mounted outside the rate limiter)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(profile_routes())
        .merge(workshop_routes())
        .merge(club_routes())
        .merge(thread_routes())
        .merge(stats_routes())
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/refresh", post(auth::refresh_token))
        .route("/auth/logout", post(auth::logout))
}

/// Profile routes
fn profile_routes() -> Router<AppState> {
    Router::new()
        .route("/users/@me", get(profiles::get_current_profile))
        .route("/users/@me", patch(profiles::update_current_profile))
        .route("/users/:user_id", get(profiles::get_profile))
}

/// Workshop routes
fn workshop_routes() -> Router<AppState> {
    Router::new()
        // Workshop CRUD
        .route("/workshops", post(workshops::create_workshop))
        .route("/workshops", get(workshops::list_workshops))
        .route("/workshops/:workshop_id", get(workshops::get_workshop))
        .route("/workshops/:workshop_id", patch(workshops::update_workshop))
        // Workshop members
        .route("/workshops/:workshop_id/members", get(members::list_workshop_members))
        .route("/workshops/:workshop_id/members", post(members::join_workshop))
        .route(
            "/workshops/:workshop_id/members/:user_id",
            delete(members::leave_workshop),
        )
        // Workshop chat
        .route("/workshops/:workshop_id/messages", get(messages::list_messages))
        .route("/workshops/:workshop_id/messages", post(messages::send_message))
        .route(
            "/workshops/:workshop_id/messages/:message_id",
            delete(messages::delete_message),
        )
}

/// Book club routes
fn club_routes() -> Router<AppState> {
    Router::new()
        // Club CRUD
        .route("/clubs", post(clubs::create_club))
        .route("/clubs", get(clubs::list_clubs))
        .route("/clubs/:club_id", get(clubs::get_club))
        .route("/clubs/:club_id", patch(clubs::update_club))
        // Club members
        .route("/clubs/:club_id/members", get(members::list_club_members))
        .route("/clubs/:club_id/members", post(members::join_club))
        .route("/clubs/:club_id/members/:user_id", delete(members::leave_club))
        // Club invites
        .route("/clubs/:club_id/invites", get(invites::list_invites))
        .route("/clubs/:club_id/invites", post(invites::create_invite))
}

/// Discussion thread routes
fn thread_routes() -> Router<AppState> {
    Router::new()
        // Thread CRUD
        .route("/threads", post(threads::create_thread))
        .route("/threads", get(threads::list_threads))
        .route("/threads/:thread_id", get(threads::get_thread))
        .route("/threads/:thread_id", patch(threads::lock_thread))
        // Replies
        .route("/threads/:thread_id/replies", get(replies::list_replies))
        .route("/threads/:thread_id/replies", post(replies::create_reply))
        .route("/replies/:reply_id", patch(replies::update_reply))
        .route("/replies/:reply_id", delete(replies::delete_reply))
}

/// Community statistics routes
fn stats_routes() -> Router<AppState> {
    Router::new().route("/stats", get(stats::community_stats))
}
