use ghsync_database_interface::{DbService, Result};
use ghsync_models::{ListQuery, Repository, SortOrder};
use pretty_assertions::assert_eq;

use crate::testcase::db_test_case;

async fn full_names(db: &dyn DbService, query: ListQuery) -> Result<Vec<String>> {
    let page = db.repositories_list(&query).await?;
    Ok(page.items.into_iter().map(|r| r.full_name).collect())
}

#[tokio::test]
async fn list_by_organization() {
    db_test_case("repository_list_by_organization", |db| async move {
        for (id, org_id, name) in [(1, 10, "api"), (2, 10, "web"), (3, 20, "docs")] {
            db.repositories_upsert(Repository {
                repo_id: id,
                org_id,
                name: name.into(),
                full_name: format!("org{org_id}/{name}"),
                ..Default::default()
            })
            .await?;
        }

        let page = db
            .repositories_list(&ListQuery {
                parent_id: Some(10),
                ..Default::default()
            })
            .await?;
        assert_eq!(page.total, 2);
        assert_eq!(
            page.items.iter().map(|r| r.name.as_str()).collect::<Vec<_>>(),
            vec!["api", "web"]
        );

        let page = db
            .repositories_list(&ListQuery {
                search: Some("org20/".into()),
                ..Default::default()
            })
            .await?;
        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].repo_id, 3);

        Ok(())
    })
    .await;
}

#[tokio::test]
async fn list_sorted_by_field() {
    db_test_case("repository_list_sorted_by_field", |db| async move {
        for (id, org_id, name) in [(1, 20, "api"), (2, 10, "web"), (3, 10, "zeta")] {
            db.repositories_upsert(Repository {
                repo_id: id,
                org_id,
                name: name.into(),
                full_name: format!("org{org_id}/{name}"),
                ..Default::default()
            })
            .await?;
        }

        assert_eq!(
            full_names(db.as_ref(), ListQuery::default()).await?,
            vec!["org20/api", "org10/web", "org10/zeta"]
        );
        assert_eq!(
            full_names(db.as_ref(), ListQuery {
                sort_by: Some("fullName".into()),
                ..Default::default()
            })
            .await?,
            vec!["org10/web", "org10/zeta", "org20/api"]
        );
        assert_eq!(
            full_names(db.as_ref(), ListQuery {
                sort_by: Some("repoId".into()),
                sort_order: Some(SortOrder::Desc),
                ..Default::default()
            })
            .await?,
            vec!["org10/zeta", "org10/web", "org20/api"]
        );
        // Unknown fields fall back to the collection default.
        assert_eq!(
            full_names(db.as_ref(), ListQuery {
                sort_by: Some("stargazers".into()),
                ..Default::default()
            })
            .await?,
            vec!["org20/api", "org10/web", "org10/zeta"]
        );

        Ok(())
    })
    .await;
}

#[tokio::test]
async fn upsert_moves_repository() {
    db_test_case("repository_upsert_moves_repository", |db| async move {
        let repo = Repository {
            repo_id: 1,
            org_id: 10,
            name: "api".into(),
            full_name: "a/api".into(),
            ..Default::default()
        };
        db.repositories_upsert(repo.clone()).await?;
        db.repositories_upsert(Repository {
            org_id: 20,
            full_name: "b/api".into(),
            ..repo
        })
        .await?;

        let stored = db.repositories_get(1).await?.unwrap();
        assert_eq!(stored.org_id, 20);
        assert_eq!(stored.full_name, "b/api");
        assert_eq!(db.repositories_count().await?, 1);

        Ok(())
    })
    .await;
}
