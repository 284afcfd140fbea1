mod testcase;

#[cfg(test)]
mod changelog;
#[cfg(test)]
mod commit;
#[cfg(test)]
mod integration;
#[cfg(test)]
mod issue;
#[cfg(test)]
mod organization;
#[cfg(test)]
mod pull_request;
#[cfg(test)]
mod repository;
#[cfg(test)]
mod user;

pub use testcase::{db_test_case, db_test_case_pg};
