use command_error::CommandExt;
use miette::IntoDiagnostic;
use test_harness::GitDir;

#[test]
fn config_staging_dir_cli() -> miette::Result<()> {
    let session = GitDir::new()?;
    session.setup_remote("my-repo")?;

    session.write_config(&format!(
        "staging_dir = \"{}\"\n",
        session.path("elsewhere")
    ))?;

    // The command-line takes precedence over the configuration file.
    session
        .cmd()
        .args([
            "--staging-dir",
            session.path("scratch").as_str(),
            "--url",
            &session.remote_url("my-repo", "main", "src"),
        ])
        .status_checked()
        .into_diagnostic()?;

    assert!(session.path("scratch/my-repo/.git").exists());
    assert!(!session.path("elsewhere").exists());
    assert!(session.path("work/src/main.rs").exists());

    Ok(())
}
