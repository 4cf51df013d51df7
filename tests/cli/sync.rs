use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_sync_writes_sorted_tab_indented_catalog() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("en/list:user:notice:welcome.txt", "Welcome to $listname!\n")?;
    test.write_file("en/list:admin:action:post.txt", "Post requires approval\n\n")?;
    test.write_file("en/domain:admin:notice:new-list.txt", "New list created\n")?;

    let output = test.run(&["sync"])?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Synced 3 templates into"));

    assert_eq!(
        test.read_file("i18n/en.json")?,
        "{\n\
         \t\"domain-admin-notice-new-list\": \"New list created\",\n\
         \t\"list-admin-action-post\": \"Post requires approval\",\n\
         \t\"list-user-notice-welcome\": \"Welcome to $listname!\"\n\
         }"
    );
    Ok(())
}

#[test]
fn test_sync_twice_is_byte_identical() -> Result<()> {
    let test = CliTest::new()?;
    for name in ["c.txt", "a.txt", "b:x.txt", "list:member:digest:footer.txt"] {
        test.write_file(&format!("en/{}", name), &format!("{} body\n", name))?;
    }

    assert!(test.run(&["sync"])?.status.success());
    let first = test.read_file("i18n/en.json")?;
    assert!(test.run(&["sync"])?.status.success());
    let second = test.read_file("i18n/en.json")?;

    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_sync_warns_on_unlisted_hyphenated_template() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("en/list:user:notice:hold-on.txt", "Hold on\n")?;

    let root = test.root_filter();
    insta::with_settings!({filters => vec![(root.as_str(), "[ROOT]")]}, {
        assert_cmd_snapshot!(test.command().arg("sync"), @r#"
        success: true
        exit_code: 0
        ----- stdout -----
        warning: "list:user:notice:hold-on.txt" will not export under the same name
          = hint: add its key to the irregular key table
        warning: 1 key in the catalog will not round-trip through export
        ✓ Synced 1 template into [ROOT]/i18n/en.json

        ----- stderr -----
        "#);
    });
    assert!(test.read_file("i18n/en.json")?.contains("list-user-notice-hold-on"));
    Ok(())
}

#[test]
fn test_sync_honours_config_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".templatesrc.json",
        r#"{"templatesDir": "templates/en", "messagesDir": "translations"}"#,
    )?;
    test.write_file("templates/en/help.txt", "Help\n")?;

    assert!(test.run(&["sync"])?.status.success());
    assert_eq!(test.read_file("translations/en.json")?, "{\n\t\"help\": \"Help\"\n}");
    Ok(())
}

#[test]
fn test_sync_escapes_non_ascii() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("en/list:user:notice:welcome.txt", "Grüße – “$listname”\n")?;

    assert!(test.run(&["sync"])?.status.success());
    assert_eq!(
        test.read_file("i18n/en.json")?,
        r#"{
	"list-user-notice-welcome": "Gr\u00fc\u00dfe \u2013 \u201c$listname\u201d"
}"#
    );
    Ok(())
}

#[test]
fn test_sync_missing_template_dir_is_error() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["sync"])?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).starts_with("Error: Template directory"));
    Ok(())
}
