use command_error::CommandExt;
use expect_test::expect;
use miette::IntoDiagnostic;
use test_harness::GitDir;

#[test]
fn download_existing_destination() -> miette::Result<()> {
    let session = GitDir::new()?;
    session.setup_remote("my-repo")?;

    session.sh(
        r#"
        mkdir -p work/guide
        echo "old intro" > work/guide/intro.md
        echo "my notes" > work/guide/notes.md
        "#,
    )?;

    session
        .cmd()
        .args(["--url", &session.remote_url("my-repo", "main", "docs/guide")])
        .status_checked()
        .into_diagnostic()?;

    // Existing files are overwritten, and files only in the destination are kept.
    session
        .dir_state("work/guide")
        .file(
            "intro.md",
            expect![[r#"
                # Introduction
            "#]],
        )
        .file(
            "notes.md",
            expect![[r#"
                my notes
            "#]],
        )
        .file(
            "advanced/tips.md",
            expect![[r#"
                Sit. Stay.
            "#]],
        )
        .only()
        .assert();

    Ok(())
}
