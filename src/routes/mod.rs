// Route exports
pub mod applications;
pub mod contractors;
pub mod notifications;

use std::sync::Arc;

use actix_web::web;

use crate::core::Matcher;
use crate::services::{ListingsClient, MailgunClient, SupabaseClient};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub listings: Arc<ListingsClient>,
    pub supabase: Arc<SupabaseClient>,
    pub mailgun: Arc<MailgunClient>,
    pub matcher: Matcher,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(contractors::configure)
            .configure(applications::configure)
            .configure(notifications::configure),
    );
}
