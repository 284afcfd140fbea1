use std::ops::Deref;

use ghsync_models::SyncType;
use sqlx::{
    postgres::{PgTypeInfo, PgValueRef},
    Decode, Postgres, Type,
};

pub struct SyncTypeDecode(SyncType);
impl<'r> Decode<'r, Postgres> for SyncTypeDecode {
    fn decode(value: PgValueRef) -> core::result::Result<Self, sqlx::error::BoxDynError> {
        let str_value = <&str as Decode<Postgres>>::decode(value)?;
        SyncType::try_from(str_value).map(Self).map_err(Into::into)
    }
}

impl Type<Postgres> for SyncTypeDecode {
    fn type_info() -> PgTypeInfo {
        PgTypeInfo::with_name("varchar")
    }
}

impl Deref for SyncTypeDecode {
    type Target = SyncType;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
