//! Working-directory lookup when the directory is gone.
//!
//! Changes the process cwd, so it lives in its own test binary.

use std::env;
use std::fs;
use std::path::PathBuf;

#[test]
fn test_deleted_cwd_yields_empty_path() {
    let dir = env::temp_dir().join(format!("event_log_cwd_{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    env::set_current_dir(&dir).unwrap();
    fs::remove_dir(&dir).unwrap();

    assert_eq!(event_log::fs::working_dir(), PathBuf::new());
}
