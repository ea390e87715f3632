//! Survey persistence: plain JSON documents, one key per target.

use std::fs;
use std::path::{Path, PathBuf};

use crate::{SurveyError, SurveyResult};

/// Default extension for survey files.
const EXTENSION: &str = "json";

/// Append the default extension when the path has none.
fn sanitize_path(path: &Path) -> PathBuf {
    if path.extension().is_none() {
        path.with_extension(EXTENSION)
    } else {
        path.to_path_buf()
    }
}

/// Save survey results as JSON.
///
/// Refuses to replace an existing file unless `overwrite` is set; missing
/// parent directories are created. Returns the path actually written.
pub fn save(results: &SurveyResult, path: impl AsRef<Path>, overwrite: bool) -> Result<PathBuf, SurveyError> {
    let path = sanitize_path(path.as_ref());
    if path.exists() && !overwrite {
        return Err(SurveyError::AlreadyExists(path));
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.is_dir() {
            fs::create_dir_all(parent)?;
        }
    }

    let file = fs::File::create(&path)?;
    let mut writer = std::io::BufWriter::new(file);
    serde_json::to_writer(&mut writer, results)?;
    std::io::Write::flush(&mut writer)?;
    Ok(path)
}

/// Load survey results from JSON.
pub fn load(path: impl AsRef<Path>) -> Result<SurveyResult, SurveyError> {
    let path = sanitize_path(path.as_ref());
    let file = fs::File::open(path)?;
    let results = serde_json::from_reader(std::io::BufReader::new(file))?;
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_defaults_to_json() {
        assert_eq!(sanitize_path(Path::new("survey")), PathBuf::from("survey.json"));
        assert_eq!(sanitize_path(Path::new("survey.json")), PathBuf::from("survey.json"));
        assert_eq!(sanitize_path(Path::new("out/survey.dat")), PathBuf::from("out/survey.dat"));
    }
}
