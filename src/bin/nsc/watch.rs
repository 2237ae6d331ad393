//! Watch mode: debounced rebuild loop for `nsc watch`.
//!
//! Polls modification times under the configured rootdir instead of using
//! platform watchers; changes younger than the debounce window are left to
//! settle and picked up on the next poll. Ctrl-C exits cleanly.

use crate::commands;
use crate::logger;
use noshift::noshift::config::NsjsConfig;
use noshift::noshift::processor;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

const POLL_INTERVAL: Duration = Duration::from_millis(300);
const DEBOUNCE: Duration = Duration::from_millis(100);

pub fn run(no_header: bool) -> i32 {
    let cwd = match std::env::current_dir() {
        Ok(d) => d,
        Err(e) => {
            logger::error(&format!("Cannot determine working directory: {}", e));
            return 1;
        }
    };
    let config = match NsjsConfig::load(&cwd) {
        Ok(c) => c,
        Err(e) => {
            logger::error_code("NS0", &e.to_string());
            return 1;
        }
    };
    let runtime = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            logger::error(&format!("Failed to start watcher: {}", e));
            return 1;
        }
    };
    runtime.block_on(watch_loop(cwd, config, no_header))
}

async fn watch_loop(cwd: PathBuf, config: NsjsConfig, no_header: bool) -> i32 {
    logger::info("Starting compilation in watch mode...");
    if let Err(code) = commands::compile_all(&cwd, &config, no_header) {
        return code;
    }

    let root = cwd.join(&config.compileroptions.rootdir);
    let out = cwd.join(&config.compileroptions.outdir);
    logger::info(&format!(
        "Watching for file changes in '{}'... (Press Ctrl+C to stop)",
        logger::highlight(&config.compileroptions.rootdir)
    ));

    let mut mtimes = snapshot(&root);
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                logger::info("Stopped watching.");
                return 0;
            }
            _ = tokio::time::sleep(POLL_INTERVAL) => {}
        }

        let current = snapshot(&root);
        // Forget deleted files so a re-created file counts as changed.
        mtimes.retain(|path, _| current.contains_key(path));

        for (path, modified) in &current {
            if mtimes.get(path) == Some(modified) {
                continue;
            }
            // Let rapid successive writes settle; the next poll picks the
            // file up once it is older than the debounce window.
            if modified.elapsed().map(|age| age < DEBOUNCE).unwrap_or(false) {
                continue;
            }
            mtimes.insert(path.clone(), *modified);
            let rel = path
                .strip_prefix(&root)
                .unwrap_or(path)
                .display()
                .to_string();
            logger::dim(&format!("[{}] {} changed", timestamp(), rel));
            commands::compile_one(path, &root, &out, &config, no_header, &cwd);
        }
    }
}

fn snapshot(root: &Path) -> HashMap<PathBuf, SystemTime> {
    let mut mtimes = HashMap::new();
    if let Ok(files) = processor::find_source_files(root) {
        for file in files {
            if let Ok(modified) = fs::metadata(&file).and_then(|m| m.modified()) {
                mtimes.insert(file, modified);
            }
        }
    }
    mtimes
}

fn timestamp() -> String {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    format!(
        "{:02}:{:02}:{:02}",
        (secs / 3600) % 24,
        (secs / 60) % 60,
        secs % 60
    )
}
