use ghsync_models::{Changelog, ListQuery};
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::testcase::db_test_case;

#[tokio::test]
async fn upsert_many_and_list() {
    db_test_case("changelog_upsert_many_and_list", |db| async move {
        let events = vec![
            Changelog {
                changelog_id: "11".into(),
                issue_id: 1,
                event: Some("labeled".into()),
                changes: json!({"label": {"name": "bug"}}),
                ..Default::default()
            },
            Changelog {
                changelog_id: "12".into(),
                issue_id: 1,
                event: Some("closed".into()),
                ..Default::default()
            },
            Changelog {
                changelog_id: "2:0".into(),
                issue_id: 2,
                event: Some("commented".into()),
                ..Default::default()
            },
        ];

        assert_eq!(db.changelogs_upsert_many(events.clone()).await?, 3);
        assert_eq!(db.changelogs_upsert_many(events).await?, 3);
        assert_eq!(db.changelogs_count().await?, 3);

        let page = db
            .changelogs_list(&ListQuery {
                parent_id: Some(1),
                ..Default::default()
            })
            .await?;
        assert_eq!(page.total, 2);

        let page = db
            .changelogs_list(&ListQuery {
                search: Some("LABEL".into()),
                ..Default::default()
            })
            .await?;
        assert_eq!(page.total, 1);
        assert_eq!(
            page.items[0].changes,
            json!({"label": {"name": "bug"}})
        );

        assert!(db.changelogs_get("2:0").await?.is_some());

        Ok(())
    })
    .await;
}
