use declopt::{ConfigError, Error};

#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    /// The option table itself is wrong; a bug in this program.
    #[error("bad option table: {0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Args(#[from] Error),
}

impl DemoError {
    pub fn exit_code(&self) -> i32 {
        match self {
            DemoError::Config(_) => 70,
            DemoError::Args(_) => 2,
        }
    }
}

pub type Result<T> = std::result::Result<T, DemoError>;
