//! Synchronized data API.

mod columns;
mod listing;
mod routes;

use actix_web::web;

use self::routes::{
    changelogs_list, collections, commits_list, integration_status, issues_list,
    organizations_list, pulls_list, repositories_list, sync_all_data, users_list,
};

pub(crate) fn configure_github_handlers(cfg: &mut web::ServiceConfig) {
    cfg.route("/sync", web::get().to(sync_all_data))
        .route("/integration", web::get().to(integration_status))
        .route("/collections", web::get().to(collections))
        .route("/organizations", web::get().to(organizations_list))
        .route("/repositories", web::get().to(repositories_list))
        .route("/commits", web::get().to(commits_list))
        .route("/pulls", web::get().to(pulls_list))
        .route("/issues", web::get().to(issues_list))
        .route("/changelogs", web::get().to(changelogs_list))
        .route("/users", web::get().to(users_list));
}
