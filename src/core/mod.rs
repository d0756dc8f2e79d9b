pub mod provider;
pub mod uri;
