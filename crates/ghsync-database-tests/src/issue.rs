use ghsync_models::{Issue, ListQuery, SortOrder};
use pretty_assertions::assert_eq;
use time::macros::datetime;

use crate::testcase::db_test_case;

#[tokio::test]
async fn list() {
    db_test_case("issue_list", |db| async move {
        db.issues_upsert(Issue {
            issue_id: 1,
            repo_id: 1,
            number: 1,
            title: "Crash on start".into(),
            state: "open".into(),
            created_at: Some(datetime!(2024-01-01 0:00 UTC)),
            ..Default::default()
        })
        .await?;
        db.issues_upsert(Issue {
            issue_id: 2,
            repo_id: 1,
            number: 2,
            title: "Missing docs".into(),
            state: "closed".into(),
            created_at: Some(datetime!(2024-01-02 0:00 UTC)),
            closed_at: Some(datetime!(2024-01-03 0:00 UTC)),
            ..Default::default()
        })
        .await?;
        db.issues_upsert(Issue {
            issue_id: 3,
            repo_id: 2,
            number: 1,
            title: "Undated".into(),
            state: "open".into(),
            ..Default::default()
        })
        .await?;

        // Undated issues sort last when newest first.
        let page = db.issues_list(&ListQuery::default()).await?;
        assert_eq!(
            page.items.iter().map(|i| i.issue_id).collect::<Vec<_>>(),
            vec![2, 1, 3]
        );

        let page = db
            .issues_list(&ListQuery {
                sort_order: Some(SortOrder::Asc),
                ..Default::default()
            })
            .await?;
        assert_eq!(
            page.items.iter().map(|i| i.issue_id).collect::<Vec<_>>(),
            vec![3, 1, 2]
        );

        let page = db
            .issues_list(&ListQuery {
                parent_id: Some(1),
                state: Some("open".into()),
                ..Default::default()
            })
            .await?;
        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].issue_id, 1);

        Ok(())
    })
    .await;
}
