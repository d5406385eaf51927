use command_error::CommandExt;
use expect_test::expect;
use miette::IntoDiagnostic;
use test_harness::GitDir;

#[test]
fn download_file() -> miette::Result<()> {
    let session = GitDir::new()?;
    session.setup_remote("my-repo")?;

    session
        .cmd()
        .args(["--url", &session.remote_url("my-repo", "main", "README.md")])
        .status_checked()
        .into_diagnostic()?;

    session
        .dir_state("work")
        .file(
            "README.md",
            expect![[r#"
                puppy doggy
            "#]],
        )
        .only()
        .assert();

    Ok(())
}
