use curp::features;

#[test]
fn analysis_is_always_enabled() {
    assert!(features::is_enabled("analysis"));
    assert!(!features::is_enabled("billing"));
}

#[test]
fn analysis_is_reachable_through_the_facade() {
    let report = features::analysis::analyze("GOMJ800101HDFRRL01");
    assert!(report.outcome.is_valid());
}

#[cfg(feature = "server")]
#[test]
fn init_registers_every_slice() {
    let slices = curp::init().expect("init should succeed");
    let names: Vec<_> = slices.iter().map(|s| s.name()).collect();
    assert_eq!(names, vec!["Analyzer"]);
    assert!(features::is_enabled("server"));
}
