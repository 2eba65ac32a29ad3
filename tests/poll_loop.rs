use std::error::Error;
use std::fs;
use std::io::Write;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use tempfile::tempdir;
use tokio::sync::watch;

use docreload::engine::{Orchestrator, RebuildAction};
use docreload::watch::WatchPattern;

type TestResult = Result<(), Box<dyn Error>>;

fn counting_action(counter: Arc<AtomicUsize>) -> RebuildAction {
    Arc::new(move || {
        let counter = counter.clone();
        Box::pin(async move {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(())
        })
    })
}

#[tokio::test]
async fn two_flushes_in_one_poll_window_trigger_one_rebuild() -> TestResult {
    let dir = tempdir()?;
    let docs = dir.path().join("docs");
    fs::create_dir_all(&docs)?;

    let counter = Arc::new(AtomicUsize::new(0));
    let mut orchestrator = Orchestrator::new();
    let build = orchestrator.register_action("build", counting_action(counter.clone()));
    orchestrator.bind(
        WatchPattern::new(format!("{}/**/*.rst", docs.display()))?,
        build,
    );

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let loop_handle = tokio::spawn(orchestrator.run(build, Duration::from_millis(50), shutdown_rx));

    // The initial build runs before the first tick; the writes below land
    // well inside the first poll window.
    tokio::time::sleep(Duration::from_millis(10)).await;
    let mut file = fs::File::create(docs.join("index.rst"))?;
    file.write_all(b"Title\n=====\n")?;
    file.flush()?;
    file.write_all(b"\nSecond flush of the same file.\n")?;
    file.flush()?;
    drop(file);

    // Give the loop a few ticks; both flushes must collapse into a single
    // triggered rebuild on top of the initial one.
    tokio::time::sleep(Duration::from_millis(300)).await;
    assert_eq!(counter.load(Ordering::SeqCst), 2);

    // Quiet ticks add nothing.
    tokio::time::sleep(Duration::from_millis(150)).await;
    assert_eq!(counter.load(Ordering::SeqCst), 2);

    shutdown_tx.send(true)?;
    loop_handle.await??;

    Ok(())
}

#[tokio::test]
async fn initial_build_runs_even_without_any_changes() -> TestResult {
    let dir = tempdir()?;
    let docs = dir.path().join("docs");
    fs::create_dir_all(&docs)?;

    let counter = Arc::new(AtomicUsize::new(0));
    let mut orchestrator = Orchestrator::new();
    let build = orchestrator.register_action("build", counting_action(counter.clone()));
    orchestrator.bind(
        WatchPattern::new(format!("{}/**/*.rst", docs.display()))?,
        build,
    );

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let loop_handle = tokio::spawn(orchestrator.run(build, Duration::from_millis(50), shutdown_rx));

    tokio::time::sleep(Duration::from_millis(180)).await;
    assert_eq!(counter.load(Ordering::SeqCst), 1);

    shutdown_tx.send(true)?;
    loop_handle.await??;

    Ok(())
}
