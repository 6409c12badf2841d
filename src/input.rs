use std::io::Read;
use std::path::Path;

use anyhow::Result;

/// Resolve the raw ingredient text: a file when `--file` is given, else the
/// positional TEXT argument, else stdin read to EOF.
pub fn read_raw_text(text: Option<&str>, file: Option<&Path>) -> Result<String> {
    if let Some(path) = file {
        return Ok(std::fs::read_to_string(path)?);
    }

    if let Some(text) = text {
        return Ok(text.to_string());
    }

    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_text_argument_wins_over_stdin() {
        let raw = read_raw_text(Some("Water, Glycerin"), None).unwrap();
        assert_eq!(raw, "Water, Glycerin");
    }

    #[test]
    fn test_file_input() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "Ingredients: Water, Parabens").unwrap();

        let raw = read_raw_text(None, Some(file.path())).unwrap();
        assert_eq!(raw, "Ingredients: Water, Parabens");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(read_raw_text(None, Some(Path::new("/nonexistent/list.txt"))).is_err());
    }
}
