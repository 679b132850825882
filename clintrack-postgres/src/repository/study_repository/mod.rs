pub mod repo_impl;
pub mod find_studies;
pub mod count_studies;

#[cfg(test)]
pub mod test_utils;

pub use repo_impl::StudyRepositoryImpl;
