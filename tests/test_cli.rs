use clap::Parser;
use noteview::cli::args::{Args, Command};

#[test]
fn given_no_subcommand_when_parsing_then_fails() {
    // Arrange
    let args = vec!["noteview"];

    // Act & Assert
    let result = Args::try_parse_from(args);
    assert!(result.is_err(), "Should fail without subcommand");
}

#[test]
fn given_list_command_when_parsing_then_defaults_to_first_page() {
    // Arrange
    let args = vec!["noteview", "list"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::List { page, limit } => {
            assert_eq!(page, 1);
            assert_eq!(limit, None);
        }
        _ => panic!("Expected List command"),
    }
    assert_eq!(parsed.config, None);
    assert_eq!(parsed.api_url, None);
}

#[test]
fn given_list_command_with_page_and_limit_when_parsing_then_succeeds() {
    // Arrange
    let args = vec!["noteview", "list", "--page", "3", "--limit", "5"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::List { page, limit } => {
            assert_eq!(page, 3);
            assert_eq!(limit, Some(5));
        }
        _ => panic!("Expected List command"),
    }
}

#[test]
fn given_view_command_when_parsing_then_succeeds() {
    // Arrange
    let args = vec!["noteview", "view", "1234567890"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::View {
            note_id,
            json,
            open,
        } => {
            assert_eq!(note_id, 1234567890);
            assert!(!json);
            assert!(!open);
        }
        _ => panic!("Expected View command"),
    }
}

#[test]
fn given_view_command_with_json_flag_when_parsing_then_sets_it() {
    // Arrange
    let args = vec!["noteview", "view", "42", "--json"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::View { json, .. } => assert!(json),
        _ => panic!("Expected View command"),
    }
}

#[test]
fn given_add_command_with_prefill_flags_when_parsing_then_succeeds() {
    // Arrange
    let args = vec![
        "noteview",
        "add",
        "--title",
        "Test Note",
        "--content",
        "This is a test note content",
        "--image",
        "photo.png",
        "--no-input",
    ];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::Add {
            title,
            content,
            image,
            no_input,
        } => {
            assert_eq!(title.as_deref(), Some("Test Note"));
            assert_eq!(content.as_deref(), Some("This is a test note content"));
            assert_eq!(image, Some(std::path::PathBuf::from("photo.png")));
            assert!(no_input);
        }
        _ => panic!("Expected Add command"),
    }
}

#[test]
fn given_delete_command_when_parsing_then_succeeds() {
    // Arrange
    let args = vec!["noteview", "delete", "1234567890"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::Delete { note_id, yes } => {
            assert_eq!(note_id, 1234567890);
            assert!(!yes);
        }
        _ => panic!("Expected Delete command"),
    }
}

#[test]
fn given_global_api_url_flag_when_parsing_then_succeeds() {
    // Arrange
    let args = vec![
        "noteview",
        "-a",
        "http://notes.example:8080",
        "delete",
        "7",
        "--yes",
    ];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::Delete { note_id, yes } => {
            assert_eq!(note_id, 7);
            assert!(yes);
        }
        _ => panic!("Expected Delete command"),
    }
    assert_eq!(parsed.api_url.as_deref(), Some("http://notes.example:8080"));
}

#[test]
fn given_global_config_flag_when_parsing_then_succeeds() {
    // Arrange
    let args = vec!["noteview", "-c", "/path/to/config.json", "about"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    assert!(matches!(parsed.command, Command::About));
    assert_eq!(
        parsed.config,
        Some(std::path::PathBuf::from("/path/to/config.json"))
    );
}
