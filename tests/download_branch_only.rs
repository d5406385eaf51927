use command_error::CommandExt;
use miette::IntoDiagnostic;
use test_harness::GitDir;

#[test]
fn download_branch_only() -> miette::Result<()> {
    let session = GitDir::new()?;
    session.setup_remote("my-repo")?;

    // A URL ending at the branch copies the whole checkout into the current directory.
    session
        .cmd()
        .args(["--url", "https://git.example.com/puppy/my-repo/tree/main"])
        .status_checked()
        .into_diagnostic()?;

    assert!(session.path("work/README.md").exists());
    assert!(session.path("work/docs/guide/intro.md").exists());
    assert!(session.path("work/src/main.rs").exists());

    Ok(())
}
