mod common;

use common::FakeScoringService;
use contender_sim::config::SimulatorConfig;
use contender_sim::contender_actor::{self, ContenderAction, ContenderError};
use std::collections::BTreeMap;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

fn fast_config(seed: u64) -> SimulatorConfig {
    SimulatorConfig {
        pacing: 2.0,
        time_unit: Duration::from_millis(1),
        seed: Some(seed),
        ..SimulatorConfig::default()
    }
}

/// A driver running unattended against a stateful server ends with exactly
/// the ticks the server holds for it.
#[tokio::test]
async fn test_driver_state_matches_server_after_run() {
    let service = FakeScoringService::new(&[1, 2, 3, 4, 5], &[(1, "Open"), (2, "Youth")]);
    service.register("AB12CD34");
    service.seed_tick("AB12CD34", 5);

    let driver =
        contender_actor::new("AB12CD34", service.remote_for("AB12CD34"), &fast_config(7), 0).unwrap();
    let stop = CancellationToken::new();
    let handle = tokio::spawn(driver.run(stop.clone()));

    tokio::time::sleep(Duration::from_millis(200)).await;
    stop.cancel();
    let exit = handle.await.unwrap().unwrap();

    assert!(exit.actions > 0, "expected some actions in 200ms");
    assert!(exit.state.is_consistent());
    assert_eq!(exit.state.all_problems().len(), 5);

    let local: BTreeMap<_, _> = exit.state.ticks().iter().map(|(p, t)| (*p, t.id)).collect();
    assert_eq!(local, service.ticks_of("AB12CD34"));

    let profile = service.contender("AB12CD34").unwrap();
    assert_eq!(profile.comp_class_id, exit.state.contender.comp_class_id);
    assert!(profile.name.is_some());
}

/// Failed writes skip the action but leave local and server state in agreement.
#[tokio::test]
async fn test_driver_survives_failing_writes() {
    let service = FakeScoringService::new(&[1, 2, 3], &[(1, "Open")]);
    service.register("EF56GH78");

    let config = SimulatorConfig {
        action_weights: vec![(ContenderAction::AddTick, 1), (ContenderAction::RemoveTick, 1)],
        ..fast_config(3)
    };
    let driver = contender_actor::new("EF56GH78", service.remote_for("EF56GH78"), &config, 0).unwrap();
    let stop = CancellationToken::new();
    let handle = tokio::spawn(driver.run(stop.clone()));

    // Let the join go through before writes start failing.
    tokio::time::sleep(Duration::from_millis(30)).await;
    service.fail_every_nth_write(2);
    tokio::time::sleep(Duration::from_millis(150)).await;
    stop.cancel();

    let exit = handle.await.unwrap().unwrap();
    assert!(exit.state.is_consistent());
    let local: BTreeMap<_, _> = exit.state.ticks().iter().map(|(p, t)| (*p, t.id)).collect();
    assert_eq!(local, service.ticks_of("EF56GH78"));
}

#[tokio::test]
async fn test_unknown_contender_never_joins() {
    let service = FakeScoringService::new(&[1], &[(1, "Open")]);

    let driver = contender_actor::new("UNKNOWN", service.remote_for("UNKNOWN"), &fast_config(1), 0).unwrap();
    let err = driver.run(CancellationToken::new()).await.unwrap_err();

    assert!(matches!(err, ContenderError::Load(_)));
    assert_eq!(service.requests(), 1);
}
