use ghsync_models::{Collection, ListQuery, Organization, SortOrder};
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::testcase::db_test_case;

#[tokio::test]
async fn upsert() {
    db_test_case("organization_upsert", |db| async move {
        db.organizations_upsert(Organization {
            org_id: 1,
            name: "acme".into(),
            raw: json!({"login": "acme"}),
            ..Default::default()
        })
        .await?;

        let org = db
            .organizations_upsert(Organization {
                org_id: 1,
                name: "acme".into(),
                description: Some("Updated".into()),
                raw: json!({"login": "acme", "description": "Updated"}),
                ..Default::default()
            })
            .await?;

        assert_eq!(org.description.as_deref(), Some("Updated"));
        assert_eq!(db.organizations_count().await?, 1);
        assert_eq!(db.collection_count(Collection::Organizations).await?, 1);
        assert_eq!(db.organizations_get(1).await?, Some(org));

        Ok(())
    })
    .await;
}

#[tokio::test]
async fn list() {
    db_test_case("organization_list", |db| async move {
        for (id, name, description) in [
            (1, "zeta", None),
            (2, "alpha", Some("Tooling")),
            (3, "mid", Some("Web tools")),
        ] {
            db.organizations_upsert(Organization {
                org_id: id,
                name: name.into(),
                description: description.map(Into::into),
                ..Default::default()
            })
            .await?;
        }

        let page = db.organizations_list(&ListQuery::default()).await?;
        assert_eq!(page.total, 3);
        assert_eq!(
            page.items.iter().map(|o| o.name.as_str()).collect::<Vec<_>>(),
            vec!["alpha", "mid", "zeta"]
        );

        let page = db
            .organizations_list(&ListQuery {
                sort_order: Some(SortOrder::Desc),
                limit: 2,
                ..Default::default()
            })
            .await?;
        assert_eq!(page.total, 3);
        assert_eq!(
            page.items.iter().map(|o| o.org_id).collect::<Vec<_>>(),
            vec![1, 3]
        );

        let page = db
            .organizations_list(&ListQuery {
                search: Some("TOOL".into()),
                ..Default::default()
            })
            .await?;
        assert_eq!(page.total, 2);

        let page = db
            .organizations_list(&ListQuery {
                page: 3,
                limit: 2,
                ..Default::default()
            })
            .await?;
        assert_eq!(page.total, 3);
        assert!(page.items.is_empty());

        Ok(())
    })
    .await;
}
