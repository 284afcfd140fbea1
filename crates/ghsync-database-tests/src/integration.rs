use ghsync_database_interface::DatabaseError;
use ghsync_models::{Integration, SyncStatus, SyncType};
use pretty_assertions::assert_eq;
use serde_json::json;
use time::macros::datetime;

use crate::testcase::db_test_case;

#[tokio::test]
async fn upsert() {
    db_test_case("integration_upsert", |db| async move {
        let integration = db
            .integrations_upsert(Integration {
                user_id: 1,
                access_token: "token".into(),
                profile: json!({"login": "me"}),
                connected_at: Some(datetime!(2024-01-01 0:00 UTC)),
                ..Default::default()
            })
            .await?;
        assert_eq!(integration.access_token, "token");
        assert_eq!(integration.sync_status(), None);

        db.integrations_upsert(Integration {
            user_id: 1,
            access_token: "other".into(),
            ..integration
        })
        .await?;

        assert_eq!(db.integrations_all().await?.len(), 1);
        assert_eq!(
            db.integrations_get_expect(1).await?.access_token,
            "other"
        );

        Ok(())
    })
    .await;
}

#[tokio::test]
async fn set_sync_status() {
    db_test_case("integration_set_sync_status", |db| async move {
        let status = SyncStatus {
            last_synced: datetime!(2024-02-03 4:05:06 UTC),
            sync_type: SyncType::Full,
        };

        assert!(matches!(
            db.integrations_set_sync_status(1, status).await,
            Err(DatabaseError::UnknownIntegration(1))
        ));

        db.integrations_upsert(Integration {
            user_id: 1,
            access_token: "token".into(),
            ..Default::default()
        })
        .await?;

        let integration = db.integrations_set_sync_status(1, status).await?;
        assert_eq!(integration.sync_status(), Some(status));
        assert_eq!(integration.access_token, "token");

        Ok(())
    })
    .await;
}

#[tokio::test]
async fn delete() {
    db_test_case("integration_delete", |db| async move {
        assert!(!db.integrations_delete(1).await?);

        db.integrations_upsert(Integration {
            user_id: 1,
            ..Default::default()
        })
        .await?;

        assert!(db.integrations_delete(1).await?);
        assert_eq!(db.integrations_get(1).await?, None);

        Ok(())
    })
    .await;
}
