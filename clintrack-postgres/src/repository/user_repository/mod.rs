pub mod repo_impl;
pub mod load_users;

#[cfg(test)]
pub mod test_utils;

pub use repo_impl::UserRepositoryImpl;
