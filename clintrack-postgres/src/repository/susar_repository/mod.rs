pub mod repo_impl;
pub mod find_susars;
pub mod count_susars;
pub mod count_susars_by;

#[cfg(test)]
pub mod test_utils;

pub use repo_impl::SusarRepositoryImpl;
