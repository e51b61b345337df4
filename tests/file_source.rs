use std::path::{Path, PathBuf};

use fldarklint::error::LintError;
use fldarklint::source::{FileSource, LineSource, TextSource};
use fldarklint::universe::UniverseConfig;

// temp file unique to this test process, removed on drop even when an assertion fails
struct TempFile(PathBuf);

impl TempFile {
    fn new(name: &str, bytes: &[u8]) -> Self {
        let path = std::env::temp_dir().join(format!("fldarklint_{}_{name}", std::process::id()));
        std::fs::write(&path, bytes).expect("temp file");
        Self(path)
    }
    fn path(&self) -> &Path {
        &self.0
    }
}

impl Drop for TempFile {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.0);
    }
}

#[test]
fn reads_universe_from_disk() {
    let text = "[Base]\r\nnickname = Li01_01_Base\r\nstrid_name = 196609\r\nsystem = Li01\r\nfile = Universe\\Systems\\Li01\\Bases\\Li01_01_Base.ini\r\n[Time]\r\nseconds_per_day = 1800\r\n";
    let file = TempFile::new("universe.ini", text.as_bytes());

    let source = FileSource::new(file.path());
    assert_eq!(source.lines().unwrap().len(), 7);
    let (config, _document) = UniverseConfig::read(&source).expect("decodes");
    let base = config.base("li01_01_base").expect("base");
    assert_eq!(base.file.as_str(), "universe/systems/li01/bases/li01_01_base.ini");
    assert_eq!(config.time().seconds_per_day, 1800);
}

#[test]
fn invalid_utf8_is_read_lossy() {
    let file = TempFile::new("latin1.ini", b"; caf\xe9\n[Time]\nseconds_per_day = 60\n");

    let (config, document) = UniverseConfig::read(&FileSource::new(file.path())).expect("decodes");
    assert_eq!(config.time().seconds_per_day, 60);
    assert_eq!(document.comments().len(), 1);
}

#[test]
fn byte_order_mark_is_skipped() {
    let file = TempFile::new("bom.ini", b"\xef\xbb\xbf[Time]\r\nseconds_per_day = 1800\r\n");

    let source = FileSource::new(file.path());
    assert_eq!(source.lines().unwrap()[0], "[Time]");
    let (config, document) = UniverseConfig::read(&source).expect("decodes");
    assert_eq!(config.time().seconds_per_day, 1800);
    assert_eq!(document.sections().len(), 1);
}

#[test]
fn byte_order_mark_is_skipped_in_text() {
    let source = TextSource::new("universe.ini", "\u{feff}[Time]\nseconds_per_day = 30\n");
    let (config, _document) = UniverseConfig::read(&source).expect("decodes");
    assert_eq!(config.time().seconds_per_day, 30);
}

#[test]
fn missing_file_is_an_io_error() {
    let source = FileSource::new("/nonexistent/fldarklint/universe.ini");
    let err = UniverseConfig::read(&source).unwrap_err();
    assert!(matches!(err, LintError::Io(_)), "{err}");
}
