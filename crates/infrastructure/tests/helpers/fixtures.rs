#![allow(dead_code)]

use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

/// Create `name` in `dir` with its modification time set `secs_old` seconds
/// in the past.
pub fn create_aged_file(dir: &Path, name: &str, secs_old: u64) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, name.as_bytes()).unwrap();
    set_age(&path, secs_old);
    path
}

pub fn set_age(path: &Path, secs_old: u64) {
    let modified = SystemTime::now() - Duration::from_secs(secs_old);
    let file = File::options().write(true).open(path).unwrap();
    file.set_modified(modified).unwrap();
}

/// `count` files `file_00.log`.. where `file_00.log` is the oldest and each
/// following file is one hour newer.
pub fn populate(dir: &Path, count: usize) -> Vec<PathBuf> {
    (0..count)
        .map(|i| {
            let hours_old = (count - i) as u64;
            create_aged_file(dir, &format!("file_{:02}.log", i), hours_old * 3_600)
        })
        .collect()
}

pub fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_file())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
