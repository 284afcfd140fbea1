use ghsync_models::{ListQuery, UserProfile};
use pretty_assertions::assert_eq;

use crate::testcase::db_test_case;

#[tokio::test]
async fn upsert_and_search() {
    db_test_case("user_upsert_and_search", |db| async move {
        db.users_upsert(UserProfile {
            user_id: 1,
            login: "octocat".into(),
            email: Some("octo@example.com".into()),
            ..Default::default()
        })
        .await?;
        db.users_upsert(UserProfile {
            user_id: 2,
            login: "hubot".into(),
            name: Some("Hu Bot".into()),
            ..Default::default()
        })
        .await?;
        db.users_upsert(UserProfile {
            user_id: 1,
            login: "octocat".into(),
            name: Some("The Octocat".into()),
            ..Default::default()
        })
        .await?;

        assert_eq!(db.users_count().await?, 2);
        assert_eq!(
            db.users_get(1).await?.and_then(|u| u.name),
            Some("The Octocat".to_string())
        );

        let page = db.users_list(&ListQuery::default()).await?;
        assert_eq!(
            page.items.iter().map(|u| u.login.as_str()).collect::<Vec<_>>(),
            vec!["hubot", "octocat"]
        );

        let page = db
            .users_list(&ListQuery {
                search: Some("bot".into()),
                ..Default::default()
            })
            .await?;
        assert_eq!(page.total, 1);

        Ok(())
    })
    .await;
}
