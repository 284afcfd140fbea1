use ghsync_models::{Actor, Commit, ListQuery, SortOrder};
use pretty_assertions::assert_eq;
use serde_json::json;
use time::macros::datetime;

use crate::testcase::db_test_case;

fn commit(sha: &str, repo_id: u64, message: &str) -> Commit {
    Commit {
        commit_id: sha.into(),
        repo_id,
        message: message.into(),
        raw: json!({"sha": sha}),
        ..Default::default()
    }
}

#[tokio::test]
async fn upsert_many() {
    db_test_case("commit_upsert_many", |db| async move {
        let written = db
            .commits_upsert_many(vec![
                commit("a", 1, "first"),
                commit("b", 1, "second"),
                commit("a", 1, "first, amended"),
            ])
            .await?;
        assert_eq!(written, 2);
        assert_eq!(db.commits_count().await?, 2);
        assert_eq!(
            db.commits_get("a").await?.map(|c| c.message),
            Some("first, amended".to_string())
        );

        // Same keys again: nothing new is created.
        db.commits_upsert_many(vec![commit("a", 1, "first"), commit("b", 1, "second")])
            .await?;
        assert_eq!(db.commits_count().await?, 2);

        assert_eq!(db.commits_upsert_many(vec![]).await?, 0);

        Ok(())
    })
    .await;
}

#[tokio::test]
async fn list() {
    db_test_case("commit_list", |db| async move {
        db.commits_upsert(Commit {
            author: Some(Actor {
                id: 7,
                login: "octocat".into(),
                avatar_url: None,
            }),
            date: Some(datetime!(2024-01-01 0:00 UTC)),
            ..commit("a", 1, "Initial commit")
        })
        .await?;
        db.commits_upsert(Commit {
            date: Some(datetime!(2024-03-01 0:00 UTC)),
            ..commit("b", 1, "Fix build")
        })
        .await?;
        db.commits_upsert(Commit {
            date: Some(datetime!(2024-02-01 0:00 UTC)),
            ..commit("c", 2, "Other repository")
        })
        .await?;

        let page = db.commits_list(&ListQuery::default()).await?;
        assert_eq!(
            page.items
                .iter()
                .map(|c| c.commit_id.as_str())
                .collect::<Vec<_>>(),
            vec!["b", "c", "a"]
        );

        let page = db
            .commits_list(&ListQuery {
                parent_id: Some(1),
                ..Default::default()
            })
            .await?;
        assert_eq!(page.total, 2);

        let page = db
            .commits_list(&ListQuery {
                search: Some("octo".into()),
                ..Default::default()
            })
            .await?;
        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].commit_id, "a");

        Ok(())
    })
    .await;
}

#[tokio::test]
async fn list_by_author_and_sort() {
    db_test_case("commit_list_by_author_and_sort", |db| async move {
        let authored = [("b", Some("OctoCat"), 3), ("a", None, 1), ("c", Some("hubot"), 2)];
        for (sha, login, day) in authored {
            db.commits_upsert(Commit {
                author: login.map(|login| Actor {
                    id: 7,
                    login: login.into(),
                    avatar_url: None,
                }),
                date: Some(datetime!(2024-01-01 0:00 UTC) + time::Duration::days(day)),
                ..commit(sha, 1, "cc octocat")
            })
            .await?;
        }

        let page = db
            .commits_list(&ListQuery {
                search: Some("octo".into()),
                ..Default::default()
            })
            .await?;
        assert_eq!(page.total, 3);

        let page = db
            .commits_list(&ListQuery {
                author: Some("OCTO".into()),
                ..Default::default()
            })
            .await?;
        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].commit_id, "b");

        let page = db
            .commits_list(&ListQuery {
                author: Some("ghost".into()),
                ..Default::default()
            })
            .await?;
        assert_eq!(page.total, 0);

        let ids = |page: ghsync_models::ListPage<Commit>| {
            page.items
                .into_iter()
                .map(|c| c.commit_id)
                .collect::<Vec<_>>()
        };
        let page = db
            .commits_list(&ListQuery {
                sort_by: Some("commitId".into()),
                sort_order: Some(SortOrder::Asc),
                ..Default::default()
            })
            .await?;
        assert_eq!(ids(page), vec!["a", "b", "c"]);

        // Default field, default direction: newest first.
        let page = db.commits_list(&ListQuery::default()).await?;
        assert_eq!(ids(page), vec!["b", "c", "a"]);

        Ok(())
    })
    .await;
}
