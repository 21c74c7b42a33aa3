// Host-side tests for loading-screen progress.

use viewer_core::*;

#[test]
fn stages_advance_at_their_ceilings() {
    assert_eq!(progress_after(0), LoadingProgress::default());
    assert_eq!(progress_after(31).stage, LoadingStage::Initializing);

    let assets = progress_after(32);
    assert_eq!(assets.stage, LoadingStage::LoadingAssets);
    assert_eq!(assets.percent, 25.0);

    let preparing = progress_after(32 + 84);
    assert_eq!(preparing.stage, LoadingStage::PreparingScene);
    assert_eq!(preparing.percent, 75.0);
}

#[test]
fn completes_and_stays_complete() {
    assert!(!progress_after(100).is_complete());
    let done = progress_after(200);
    assert!(done.is_complete());
    assert_eq!(done.percent, 100.0);
    assert_eq!(done.display_percent(), 100);
    assert_eq!(done.step(), done);
    assert_eq!(done.stage.caption(), "Ready!");
}

#[test]
fn progress_is_monotonic() {
    let mut prev = LoadingProgress::default();
    for _ in 0..200 {
        let next = prev.step();
        assert!(next.percent >= prev.percent);
        prev = next;
    }
}
