use crate::core::loader::{load_file, parse_scenarios};
use crate::core::{Scenario, ScenarioSource};
use crate::utils::error::Result;
use std::io::Cursor;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScenarioSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<Vec<Scenario>> {
        load_file(&self.path)
    }
}

/// Scenario text held in memory.
#[derive(Debug, Clone)]
pub struct TextSource {
    text: String,
}

impl TextSource {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl ScenarioSource for TextSource {
    fn describe(&self) -> String {
        "<memory>".to_string()
    }

    fn load(&self) -> Result<Vec<Scenario>> {
        parse_scenarios(Cursor::new(self.text.as_bytes()), Path::new("<memory>"))
    }
}
