//! Uninstall-package command tests
#![cfg(unix)]

mod common;

use predicates::prelude::*;

#[test]
fn test_uninstall_without_environment_is_a_skip() {
    let project = common::TestProject::new();

    common::clientgen_cmd(&project)
        .arg("uninstall-package")
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing to uninstall"));
}

#[test]
fn test_uninstall_absent_package_is_a_skip() {
    let project = common::TestProject::new();
    // pip that reports "not installed" for show
    project.write_executable(
        "venv/bin/pip",
        &format!(
            "#!/bin/sh\necho \"$@\" >> \"{}/pip.log\"\ncase \"$1\" in show) exit 1;; esac\nexit 0\n",
            project.path.display()
        ),
    );

    common::clientgen_cmd(&project)
        .arg("uninstall-package")
        .assert()
        .success()
        .stdout(predicate::str::contains("is not installed"));

    let log = project.tool_log("pip");
    assert_eq!(log.len(), 1);
    assert_eq!(log[0], "show -q openapi-client");
}

#[test]
fn test_uninstall_removes_installed_package() {
    let project = common::TestProject::new();
    project.write_executable(
        "venv/bin/pip",
        &format!(
            "#!/bin/sh\necho \"$@\" >> \"{}/pip.log\"\nexit 0\n",
            project.path.display()
        ),
    );

    common::clientgen_cmd(&project)
        .arg("uninstall-package")
        .assert()
        .success()
        .stdout(predicate::str::contains("uninstalled"));

    let log = project.tool_log("pip");
    assert_eq!(log.len(), 2);
    assert_eq!(log[0], "show -q openapi-client");
    assert_eq!(log[1], "uninstall -y openapi-client");
}

#[test]
fn test_uninstall_uses_configured_package_name() {
    let project = common::TestProject::new();
    project.write_config("package_name: devices-client\n");
    project.write_executable(
        "venv/bin/pip",
        &format!(
            "#!/bin/sh\necho \"$@\" >> \"{}/pip.log\"\nexit 0\n",
            project.path.display()
        ),
    );

    common::clientgen_cmd(&project)
        .arg("uninstall-package")
        .assert()
        .success();

    let log = project.tool_log("pip");
    assert_eq!(log[1], "uninstall -y devices-client");
}

#[test]
fn test_uninstall_failure_is_fatal() {
    let project = common::TestProject::new();
    // show succeeds, uninstall fails
    project.write_executable(
        "venv/bin/pip",
        "#!/bin/sh\ncase \"$1\" in uninstall) exit 2;; esac\nexit 0\n",
    );

    common::clientgen_cmd(&project)
        .arg("uninstall-package")
        .assert()
        .failure()
        .stderr(predicate::str::contains("exited with status 2"));
}
