use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

const PREFIX: &str = "pkg/usr/share/mailman-templates";

fn setup_catalogs(test: &CliTest) -> Result<()> {
    test.write_file(
        "i18n/de.json",
        r#"{
    "@metadata": {"authors": ["Jemand"]},
    "list-user-notice-welcome": "  hello  ",
    "list-member-digest-footer": "",
    "list-user-notice-no-more-today": "Heute nicht mehr\n"
}"#,
    )?;
    test.write_file("i18n/en.json", r#"{"list-user-notice-welcome": "Welcome"}"#)?;
    test.write_file(
        "i18n/qqq.json",
        r#"{"@metadata": {}, "list-user-notice-welcome": "Sent to new members"}"#,
    )
}

#[test]
fn test_export_writes_layout() -> Result<()> {
    let test = CliTest::new()?;
    setup_catalogs(&test)?;

    let output = test.run(&["export", "--destdir", "pkg"])?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    assert_eq!(
        test.read_file(&format!("{PREFIX}/de/list:user:notice:welcome.txt"))?,
        "hello\n"
    );
    assert_eq!(
        test.read_file(&format!("{PREFIX}/de/list:member:digest:footer.txt"))?,
        ""
    );
    assert_eq!(
        test.read_file(&format!("{PREFIX}/de/list:user:notice:no-more-today.txt"))?,
        "Heute nicht mehr\n"
    );
    assert_eq!(
        test.read_file(&format!("{PREFIX}/en/list:user:notice:welcome.txt"))?,
        "Welcome\n"
    );
    Ok(())
}

#[test]
fn test_export_skips_metadata_and_qqq() -> Result<()> {
    let test = CliTest::new()?;
    setup_catalogs(&test)?;

    assert!(test.run(&["export", "--destdir", "pkg"])?.status.success());

    let root = test.root().join(PREFIX);
    assert!(!root.join("qqq").exists());
    let mut names: Vec<_> = std::fs::read_dir(root.join("de"))?
        .map(|e| e.map(|e| e.file_name().to_string_lossy().into_owned()))
        .collect::<Result<_, _>>()?;
    names.sort();
    assert_eq!(
        names,
        vec![
            "list:member:digest:footer.txt",
            "list:user:notice:no-more-today.txt",
            "list:user:notice:welcome.txt",
        ]
    );
    Ok(())
}

#[test]
fn test_export_reports_each_write() -> Result<()> {
    let test = CliTest::new()?;
    setup_catalogs(&test)?;

    assert_cmd_snapshot!(test.command().args(["export", "--destdir", "pkg"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Wrote to pkg/usr/share/mailman-templates/de/list:user:notice:welcome.txt
    Wrote to pkg/usr/share/mailman-templates/de/list:member:digest:footer.txt
    Wrote to pkg/usr/share/mailman-templates/de/list:user:notice:no-more-today.txt
    Wrote to pkg/usr/share/mailman-templates/en/list:user:notice:welcome.txt
    ✓ Exported 4 templates for 2 languages into pkg/usr/share/mailman-templates

    ----- stderr -----
    ");
    Ok(())
}

#[test]
fn test_export_ignores_malformed_doc_catalog() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("i18n/de.json", r#"{"help": "Hilfe"}"#)?;
    test.write_file("i18n/qqq.json", "[1]")?;

    let output = test.run(&["export", "--destdir", "pkg"])?;
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert_eq!(test.read_file(&format!("{PREFIX}/de/help.txt"))?, "Hilfe\n");
    assert!(!test.root().join(PREFIX).join("qqq").exists());
    Ok(())
}

#[test]
fn test_export_writes_earlier_languages_before_failing() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("i18n/de.json", r#"{"help": "Hilfe"}"#)?;
    test.write_file("i18n/fr.json", r#"{"help": 1}"#)?;

    let output = test.run(&["export", "--destdir", "pkg"])?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stdout(&output).contains(&format!("Wrote to {PREFIX}/de/help.txt")));
    assert!(stderr(&output).contains("must be a string"));
    assert_eq!(test.read_file(&format!("{PREFIX}/de/help.txt"))?, "Hilfe\n");
    Ok(())
}

#[test]
fn test_export_malformed_catalog_is_error() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("i18n/fr.json", "{ not json")?;

    let output = test.run(&["export", "--destdir", "pkg"])?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Failed to parse JSON file"));
    Ok(())
}
