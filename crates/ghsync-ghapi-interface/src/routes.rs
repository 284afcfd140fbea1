//! REST routes, relative to the API root.

pub fn user() -> String {
    "/user".into()
}

pub fn user_orgs() -> String {
    "/user/orgs".into()
}

pub fn org_repos(org: &str) -> String {
    format!("/orgs/{org}/repos")
}

pub fn repo_commits(owner: &str, name: &str) -> String {
    format!("/repos/{owner}/{name}/commits")
}

pub fn repo_pulls(owner: &str, name: &str) -> String {
    format!("/repos/{owner}/{name}/pulls?state=all")
}

pub fn repo_issues(owner: &str, name: &str) -> String {
    format!("/repos/{owner}/{name}/issues?state=all")
}

pub fn issue_timeline(owner: &str, name: &str, issue_number: u64) -> String {
    format!("/repos/{owner}/{name}/issues/{issue_number}/timeline")
}

/// Append page selection to a route, keeping its existing query string.
pub fn paginated(route: &str, per_page: u64, page: u64) -> String {
    let separator = if route.contains('?') { '&' } else { '?' };
    format!("{route}{separator}per_page={per_page}&page={page}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paginated_routes() {
        assert_eq!(
            paginated(&org_repos("acme"), 100, 1),
            "/orgs/acme/repos?per_page=100&page=1"
        );
        assert_eq!(
            paginated(&repo_pulls("acme", "api"), 50, 3),
            "/repos/acme/api/pulls?state=all&per_page=50&page=3"
        );
    }

    #[test]
    fn timeline_route() {
        assert_eq!(
            issue_timeline("acme", "api", 12),
            "/repos/acme/api/issues/12/timeline"
        );
    }
}
