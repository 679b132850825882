pub mod repo_impl;
pub mod find_participants;
pub mod count_participants;
pub mod count_participants_by;

#[cfg(test)]
pub mod test_utils;

pub use repo_impl::ParticipantRepositoryImpl;
