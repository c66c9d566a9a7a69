use sim_import::config::{ImportPaths, PathsConfig, RewriteConfig};
use sim_import::error::ErrorCode;
use sim_import::importer;
use sim_import::rewrite::Rewriter;
use sim_import::test_utils::fixtures::UnitTestFixture;

use crate::common::{BODY, BODY_NAME, RECORDED_SIMULATION};

fn setup(fixture: &UnitTestFixture) -> ImportPaths {
    let (recorder, project) = fixture.create_recorder_layout(
        RECORDED_SIMULATION,
        &[(BODY_NAME, BODY), ("unrelated.txt", "ignored")],
    );
    PathsConfig {
        project_root: project,
        recorder_root: recorder,
        ..PathsConfig::default()
    }
    .resolve()
}

fn rewriter() -> Rewriter {
    Rewriter::new(&RewriteConfig::default()).unwrap()
}

#[test]
fn full_run_populates_project() {
    let fixture = UnitTestFixture::new();
    let paths = setup(&fixture);

    let report = importer::run(&paths, &rewriter()).unwrap();

    assert_eq!(
        report.import.bodies_copied,
        vec![paths.bodies_target.join(BODY_NAME)]
    );
    assert_eq!(
        std::fs::read_to_string(paths.bodies_target.join(BODY_NAME)).unwrap(),
        BODY
    );
    assert!(!paths.bodies_target.join("unrelated.txt").exists());

    let output = std::fs::read_to_string(&paths.simulation_output).unwrap();
    assert!(output.ends_with("}\n"));
    assert_eq!(output.lines().count(), report.import.rewrite.lines_written);
    assert!(output.contains("cookieJar.store.get(CookieKey(\"xsrf-token\""));
}

#[test]
fn stale_artifacts_are_replaced() {
    let fixture = UnitTestFixture::new();
    let paths = setup(&fixture);
    let stale_body = fixture.create_file(
        "project/src/test/resources/request-bodies/RecordedSimulation_0042_request.txt",
        "stale",
    );
    let own_body = fixture.create_file(
        "project/src/test/resources/request-bodies/login.json",
        "mine",
    );
    fixture.create_file(
        "project/src/test/scala/simulations/RecordedSimulation.scala",
        "stale simulation",
    );

    let report = importer::run(&paths, &rewriter()).unwrap();

    assert_eq!(report.cleanup.bodies_removed, 1);
    assert!(report.cleanup.output_removed);
    assert!(!stale_body.exists());
    assert!(own_body.exists());
    let output = std::fs::read_to_string(&paths.simulation_output).unwrap();
    assert!(!output.contains("stale simulation"));
}

#[test]
fn cleanup_twice_reaches_same_state() {
    let fixture = UnitTestFixture::new();
    let paths = setup(&fixture);
    importer::run(&paths, &rewriter()).unwrap();

    let first = importer::run_cleanup(&paths).unwrap();
    let second = importer::run_cleanup(&paths).unwrap();

    assert_eq!(first.bodies_removed, 1);
    assert!(first.output_removed);
    assert_eq!(second.bodies_removed, 0);
    assert!(!second.output_removed);
    assert!(!paths.simulation_output.exists());
    assert_eq!(std::fs::read_dir(&paths.bodies_target).unwrap().count(), 0);
}

#[test]
fn missing_recorder_bodies_fail_the_run() {
    let fixture = UnitTestFixture::new();
    let mut paths = setup(&fixture);
    paths.bodies_source = fixture.data_path.join("no-such-dir");

    let err = importer::run(&paths, &rewriter()).unwrap_err();
    assert_eq!(err.code(), ErrorCode::IoError);
    assert!(!paths.simulation_output.exists());
}

#[test]
fn malformed_recording_leaves_no_output() {
    let fixture = UnitTestFixture::new();
    let paths = setup(&fixture);
    std::fs::write(
        &paths.simulation_input,
        "\t\t.exec(http(\"request_0\")\n\t\t\t.headers(headers_0))\n",
    )
    .unwrap();

    let err = importer::run(&paths, &rewriter()).unwrap_err();
    assert_eq!(err.code(), ErrorCode::MalformedRequest);
    assert!(err.to_string().contains("line 1"));
    assert!(!paths.simulation_output.exists());
}
