use ghsync_models::{Actor, ListQuery, PullRequest};
use pretty_assertions::assert_eq;
use time::macros::datetime;

use crate::testcase::db_test_case;

#[tokio::test]
async fn upsert_and_filter() {
    db_test_case("pull_request_upsert_and_filter", |db| async move {
        for (id, number, state, title) in [
            (100, 1, "open", "Add feature"),
            (101, 2, "closed", "Remove feature"),
            (102, 3, "open", "Update docs"),
        ] {
            db.pull_requests_upsert(PullRequest {
                pull_id: id,
                repo_id: 1,
                number,
                title: title.into(),
                state: state.into(),
                user: Some(Actor {
                    id: 7,
                    login: "octocat".into(),
                    avatar_url: None,
                }),
                created_at: Some(
                    datetime!(2024-01-01 0:00 UTC) + time::Duration::days(number as i64),
                ),
                ..Default::default()
            })
            .await?;
        }

        let page = db
            .pull_requests_list(&ListQuery {
                state: Some("OPEN".into()),
                ..Default::default()
            })
            .await?;
        assert_eq!(
            page.items.iter().map(|p| p.number).collect::<Vec<_>>(),
            vec![3, 1]
        );

        let page = db
            .pull_requests_list(&ListQuery {
                search: Some("feature".into()),
                state: Some("closed".into()),
                ..Default::default()
            })
            .await?;
        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].pull_id, 101);

        let merged = db
            .pull_requests_upsert(PullRequest {
                state: "closed".into(),
                merged_at: Some(datetime!(2024-02-01 0:00 UTC)),
                ..db.pull_requests_get(100).await?.unwrap()
            })
            .await?;
        assert_eq!(merged.merged_at, Some(datetime!(2024-02-01 0:00 UTC)));
        assert_eq!(db.pull_requests_count().await?, 3);

        Ok(())
    })
    .await;
}
