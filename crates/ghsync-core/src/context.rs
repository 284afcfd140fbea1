use ghsync_config::Config;
use ghsync_database_interface::DbService;
use ghsync_ghapi_interface::ApiService;

use crate::CoreModule;

pub struct CoreContext<'a> {
    pub config: &'a Config,
    pub core_module: &'a CoreModule,
    pub api_service: &'a (dyn ApiService + 'a),
    pub db_service: &'a (dyn DbService + 'a),
}

#[cfg(any(test, feature = "testkit"))]
pub(crate) mod tests {
    use ghsync_config::Config;
    use ghsync_database_memory::MemoryDb;
    use ghsync_ghapi_interface::{ApiService, MockApiService};

    use crate::{CoreContext, CoreModule};

    #[allow(dead_code)]
    pub struct CoreContextTest<A: ApiService = MockApiService> {
        pub config: Config,
        pub core_module: CoreModule,
        pub api_service: A,
        pub db_service: MemoryDb,
    }

    impl CoreContextTest {
        #[allow(dead_code)]
        pub fn new() -> Self {
            Self::with_api_service(MockApiService::new())
        }
    }

    impl<A: ApiService> CoreContextTest<A> {
        #[allow(dead_code)]
        pub fn with_api_service(api_service: A) -> Self {
            Self {
                config: Config::from_env_no_version(),
                core_module: CoreModule::builder().build(),
                api_service,
                db_service: MemoryDb::new(),
            }
        }

        #[allow(dead_code)]
        pub fn as_context(&self) -> CoreContext {
            CoreContext {
                config: &self.config,
                core_module: &self.core_module,
                api_service: &self.api_service,
                db_service: &self.db_service,
            }
        }
    }
}
