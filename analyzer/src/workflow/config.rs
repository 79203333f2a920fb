use std::path::{Path, PathBuf};

#[derive(Clone, Debug)]
pub struct RunConfig {
    pub input: PathBuf,
}

impl RunConfig {
    pub fn from_args(input: PathBuf) -> Self {
        Self { input }
    }

    pub fn input(&self) -> &Path {
        &self.input
    }
}
