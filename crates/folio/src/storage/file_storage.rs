use std::{
    fs, io,
    path::{Path, PathBuf},
};

use crate::{Error, Result};

/// Root of everything folio writes: `<data_local_dir>/folio` unless
/// `--datapath` says otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPath {
    base: PathBuf,
}

impl DataPath {
    pub fn new(base: impl AsRef<Path>) -> Self {
        Self {
            base: base.as_ref().to_path_buf(),
        }
    }

    pub fn default_base() -> Option<PathBuf> {
        dirs::data_local_dir().map(|dir| dir.join("folio"))
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    pub fn path(&self, typ: DataPathType) -> PathBuf {
        self.base.join(typ.dir_name())
    }
}

impl Default for DataPath {
    /// Falls back to the working directory on platforms without a data dir.
    fn default() -> Self {
        Self::new(Self::default_base().unwrap_or_else(|| PathBuf::from(".")))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataPathType {
    /// Daily rolling log files
    Log,
    /// `settings.json` with the saved preferences
    Setting,
}

impl DataPathType {
    pub fn dir_name(self) -> &'static str {
        match self {
            DataPathType::Log => "logs",
            DataPathType::Setting => "settings",
        }
    }
}

/// A directory of named files, read on demand.
#[derive(Debug, PartialEq, Clone)]
pub struct Directory {
    pub file_path: PathBuf,
}

impl Directory {
    pub fn new(file_path: PathBuf) -> Self {
        Self { file_path }
    }

    pub fn get_file(&self, file_name: &str) -> Result<String> {
        let path = self.file_path.join(file_name);
        if !path.is_file() {
            return Err(Error::Io(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} not found", path.display()),
            )));
        }
        Ok(fs::read_to_string(path)?)
    }

    pub fn has_file(&self, file_name: &str) -> bool {
        self.file_path.join(file_name).is_file()
    }
}

/// Write `data` to `directory/file_name`, creating the directory first.
pub fn write_file(directory: &Path, file_name: &str, data: &str) -> Result<()> {
    if !directory.exists() {
        fs::create_dir_all(directory)?
    }

    fs::write(directory.join(file_name), data)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{write_file, DataPath, DataPathType, Directory};
    use std::path::Path;

    #[test]
    fn write_creates_missing_directories() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let directory = Directory::new(tmp.path().join("settings"));
        let file_name = "settings.json";
        assert!(directory.get_file(file_name).is_err());

        write_file(&directory.file_path, file_name, "{}").expect("write");
        assert!(directory.has_file(file_name));
        assert_eq!(directory.get_file(file_name).expect("read"), "{}");
    }

    #[test]
    fn data_path_layout() {
        let path = DataPath::new("/tmp/folio-test");
        assert_eq!(path.base(), Path::new("/tmp/folio-test"));
        assert!(path.path(DataPathType::Setting).ends_with("settings"));
        assert!(path.path(DataPathType::Log).ends_with("logs"));
    }
}
