//! Snapshot tests for report output.

use insta::assert_snapshot;
use xrinput_conformance::prelude::*;
use xrinput_test_helpers::prelude::*;

fn hmd_without_right_eye() -> SnapshotProvider {
    let fixture = DeviceFixture::hmd(1)
        .without_feature("RightEyeRotation")
        .with_feature("EyeGazeConfidence", SemanticType::Float)
        .in_subsystem(SubsystemId(1));
    SnapshotProvider::new()
        .with_subsystem(Subsystem::new(1, "MockProvider-Input"))
        .with_device(fixture.device, fixture.features, fixture.haptics)
}

#[test]
fn test_report_text() {
    let report = ConformanceRunner::default().run(&hmd_without_right_eye());

    assert_snapshot!(report.to_string(), @r#"
    FAIL [Mock HMD #1] A Generic/HMD device must have a RightEyeRotation usage
    INFO [Mock HMD] Provider specific feature detected: "EyeGazeConfidence" (float). Its backing value type cannot be verified
    1 Generic/HMD device(s) found
    1 device(s) checked, 1 violation(s): FAIL
    "#);
}

#[test]
fn test_report_json() -> TestResult {
    let report = ConformanceRunner::default()
        .run_checks(&hmd_without_right_eye(), &[Check::RoleRequirements]);

    assert_snapshot!(serde_json::to_string(&report)?, @r#"{"violations":[{"device_name":"Mock HMD","device_id":1,"kind":"role_feature_missing","role":"Generic","feature":"RightEyeRotation"}],"notices":[],"devices_checked":1,"role_counts":{"Generic":1}}"#);
    Ok(())
}
