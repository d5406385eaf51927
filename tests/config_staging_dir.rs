use command_error::CommandExt;
use miette::IntoDiagnostic;
use test_harness::GitDir;

#[test]
fn config_staging_dir() -> miette::Result<()> {
    let session = GitDir::new()?;
    session.setup_remote("my-repo")?;

    session.write_config(&format!(
        "staging_dir = \"{}\"\n",
        session.path("elsewhere")
    ))?;

    session
        .cmd()
        .env_remove("GIT_DIR_STAGING_DIR")
        .args(["--url", &session.remote_url("my-repo", "main", "src")])
        .status_checked()
        .into_diagnostic()?;

    assert!(session.path("elsewhere/my-repo/.git").exists());
    assert!(!session.path("staging").exists());
    assert!(session.path("work/src/main.rs").exists());

    Ok(())
}
