//! How the listener reacts when one of its tasks ends

use tokio::task::JoinSet;

use crate::task_outcome;

async fn crash() -> anyhow::Result<()> {
    panic!("watcher crashed")
}

#[tokio::test]
async fn failed_task_error_is_returned() {
    let mut tasks: JoinSet<anyhow::Result<()>> = JoinSet::new();
    tasks.spawn(async { anyhow::bail!("Failed to register hotkey for save") });

    let err = task_outcome(tasks.join_next().await).unwrap_err();
    assert_eq!(err.to_string(), "Failed to register hotkey for save");
}

#[tokio::test]
async fn task_exiting_cleanly_is_still_an_error() {
    let mut tasks: JoinSet<anyhow::Result<()>> = JoinSet::new();
    tasks.spawn(async { Ok(()) });

    assert!(task_outcome(tasks.join_next().await).is_err());
}

#[tokio::test]
async fn panicked_task_is_an_error() {
    let mut tasks: JoinSet<anyhow::Result<()>> = JoinSet::new();
    tasks.spawn(crash());

    let err = task_outcome(tasks.join_next().await).unwrap_err();
    assert_eq!(err.to_string(), "A listener task panicked");
}

#[test]
fn no_tasks_is_an_error() {
    assert!(task_outcome(None).is_err());
}
