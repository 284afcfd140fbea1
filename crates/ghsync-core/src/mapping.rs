//! Conversion of GitHub payloads into stored records.

use ghsync_ghapi_interface::types::{
    GhCommit, GhIssue, GhOrganization, GhPullRequest, GhRepository, GhTimelineEvent, GhUser,
};
use ghsync_models::{
    Actor, Changelog, Commit, Issue, Organization, PullRequest, Repository, UserProfile,
};
use serde_json::Value;

pub fn actor(user: GhUser) -> Actor {
    Actor {
        id: user.id,
        login: user.login,
        avatar_url: user.avatar_url,
    }
}

pub fn user_profile(user: GhUser, raw: Value) -> UserProfile {
    UserProfile {
        user_id: user.id,
        login: user.login,
        name: user.name,
        avatar_url: user.avatar_url,
        email: user.email,
        raw,
    }
}

pub fn organization(org: GhOrganization, raw: Value) -> Organization {
    Organization {
        org_id: org.id,
        name: org.login,
        description: org.description,
        url: org.url,
        avatar_url: org.avatar_url,
        raw,
    }
}

pub fn repository(org_id: u64, repo: GhRepository, raw: Value) -> Repository {
    Repository {
        repo_id: repo.id,
        org_id,
        name: repo.name,
        full_name: repo.full_name,
        description: repo.description,
        url: repo.html_url,
        raw,
    }
}

pub fn commit(repo_id: u64, commit: GhCommit, raw: Value) -> Commit {
    Commit {
        commit_id: commit.sha,
        repo_id,
        author: commit.author.map(actor),
        message: commit.commit.message,
        date: commit.commit.author.and_then(|a| a.date),
        raw,
    }
}

pub fn pull_request(repo_id: u64, pull: GhPullRequest, raw: Value) -> PullRequest {
    PullRequest {
        pull_id: pull.id,
        repo_id,
        number: pull.number,
        title: pull.title,
        user: pull.user.map(actor),
        state: pull.state,
        created_at: pull.created_at,
        merged_at: pull.merged_at,
        raw,
    }
}

pub fn issue(repo_id: u64, issue: GhIssue, raw: Value) -> Issue {
    Issue {
        issue_id: issue.id,
        repo_id,
        number: issue.number,
        title: issue.title,
        user: issue.user.map(actor),
        state: issue.state,
        created_at: issue.created_at,
        closed_at: issue.closed_at,
        raw,
    }
}

/// `position` is the event index in the issue timeline.
pub fn changelog(issue_id: u64, position: usize, event: GhTimelineEvent, raw: Value) -> Changelog {
    Changelog {
        changelog_id: Changelog::key_for_event(issue_id, position, &raw),
        issue_id,
        event: event.event,
        changes: raw.clone(),
        created_at: event.created_at,
        raw,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn commit_without_linked_account() {
        let raw = json!({
            "sha": "abc",
            "author": null,
            "commit": {
                "message": "Initial commit",
                "author": {"name": "Me", "email": "me@example.com", "date": "2024-01-01T00:00:00Z"}
            }
        });
        let gh: GhCommit = serde_json::from_value(raw.clone()).unwrap();

        let commit = commit(7, gh, raw.clone());
        assert_eq!(commit.commit_id, "abc");
        assert_eq!(commit.repo_id, 7);
        assert_eq!(commit.author, None);
        assert_eq!(commit.message, "Initial commit");
        assert_eq!(
            commit.date,
            Some(time::macros::datetime!(2024-01-01 0:00 UTC))
        );
        assert_eq!(commit.raw, raw);
    }

    #[test]
    fn changelog_keys() {
        let raw = json!({"id": 12, "event": "labeled", "created_at": "2024-01-01T00:00:00Z"});
        let event: GhTimelineEvent = serde_json::from_value(raw.clone()).unwrap();
        let changelog = changelog(3, 0, event, raw.clone());
        assert_eq!(changelog.changelog_id, "12");
        assert_eq!(changelog.event.as_deref(), Some("labeled"));
        assert_eq!(changelog.changes, raw);

        let raw = json!({"event": "commented"});
        let event: GhTimelineEvent = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(changelog_id_of(3, 4, event, raw), "3:4");
    }

    fn changelog_id_of(
        issue_id: u64,
        position: usize,
        event: GhTimelineEvent,
        raw: Value,
    ) -> String {
        changelog(issue_id, position, event, raw).changelog_id
    }
}
