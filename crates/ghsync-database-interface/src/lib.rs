mod errors;
mod interface;
mod utils;

pub use errors::{DatabaseError, Result, INTEGRATIONS_STORE};
pub use interface::DbService;
pub use utils::dedupe_last_by_key;
