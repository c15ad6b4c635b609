use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const SDL: &str = r#"
    "The root query type"
    type Query {
        user(id: ID!): User
        version: String
    }

    "A registered user"
    type User {
        id: ID!
        name: String
    }

    union SearchResult = Book | Movie
    type Book { title: String }
    type Movie { title: String }
"#;

fn schemadoc_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("schemadoc"));
    cmd.env_remove("SCHEMADOC_SCHEMA");
    cmd
}

fn write_schema(dir: &TempDir) -> String {
    let path = dir.path().join("schema.graphql");
    std::fs::write(&path, SDL).unwrap();
    path.to_string_lossy().into_owned()
}

// =============================================================================
// Basic CLI
// =============================================================================

#[test]
fn test_help() {
    schemadoc_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("documentation explorer"));
}

#[test]
fn test_version() {
    schemadoc_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("schemadoc"));
}

#[test]
fn test_missing_schema_argument() {
    let temp_dir = TempDir::new().unwrap();

    schemadoc_cmd()
        .arg("page")
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("No schema given"));
}

#[test]
fn test_unreadable_schema_file() {
    let temp_dir = TempDir::new().unwrap();

    schemadoc_cmd()
        .args(["--schema", "nope.graphql", "page"])
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load schema"));
}

#[test]
fn test_invalid_sdl() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.graphql");
    std::fs::write(&path, "type {").unwrap();

    schemadoc_cmd()
        .args(["--schema", path.to_str().unwrap(), "page"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load schema"));
}

// =============================================================================
// Page command
// =============================================================================

#[test]
fn test_page_without_type_prints_start_page() {
    let temp_dir = TempDir::new().unwrap();
    let schema = write_schema(&temp_dir);

    schemadoc_cmd()
        .args(["--schema", &schema, "page"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("root types").and(predicate::str::contains("Query")),
        );
}

#[test]
fn test_page_for_a_type() {
    let temp_dir = TempDir::new().unwrap();
    let schema = write_schema(&temp_dir);

    schemadoc_cmd()
        .args(["--schema", &schema, "page", "User"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("A registered user")
                .and(predicate::str::contains("fields"))
                .and(predicate::str::contains("id : ID!"))
                .and(predicate::str::contains("name : String")),
        );
}

#[test]
fn test_page_accepts_wrapped_type_names() {
    let temp_dir = TempDir::new().unwrap();
    let schema = write_schema(&temp_dir);

    schemadoc_cmd()
        .args(["--schema", &schema, "page", "[User]"])
        .assert()
        .success()
        .stdout(predicate::str::contains("id : ID!"));
}

#[test]
fn test_page_for_a_union() {
    let temp_dir = TempDir::new().unwrap();
    let schema = write_schema(&temp_dir);

    schemadoc_cmd()
        .args(["--schema", &schema, "page", "SearchResult"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("possible types")
                .and(predicate::str::contains("Book"))
                .and(predicate::str::contains("Movie")),
        );
}

#[test]
fn test_call_page_with_arguments() {
    let temp_dir = TempDir::new().unwrap();
    let schema = write_schema(&temp_dir);

    schemadoc_cmd()
        .args(["--schema", &schema, "page", "Query", "--field", "user"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("user : User")
                .and(predicate::str::contains("arguments"))
                .and(predicate::str::contains("ID! id")),
        );
}

#[test]
fn test_call_page_without_arguments_has_no_arguments_section() {
    let temp_dir = TempDir::new().unwrap();
    let schema = write_schema(&temp_dir);

    schemadoc_cmd()
        .args(["--schema", &schema, "page", "Query", "--field", "version"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("version : String")
                .and(predicate::str::contains("arguments").not()),
        );
}

#[test]
fn test_page_for_unknown_type_fails() {
    let temp_dir = TempDir::new().unwrap();
    let schema = write_schema(&temp_dir);

    schemadoc_cmd()
        .args(["--schema", &schema, "page", "Ghost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Type not found: Ghost"));
}

#[test]
fn test_page_for_unknown_field_fails() {
    let temp_dir = TempDir::new().unwrap();
    let schema = write_schema(&temp_dir);

    schemadoc_cmd()
        .args(["--schema", &schema, "page", "Query", "--field", "ghost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Field not found: Query.ghost"));
}

#[test]
fn test_page_json_output() {
    let temp_dir = TempDir::new().unwrap();
    let schema = write_schema(&temp_dir);

    let output = schemadoc_cmd()
        .args(["--schema", &schema, "page", "User", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let page: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(page["title"], "User");
    assert_eq!(page["sections"][0]["section"], "fields");
    assert_eq!(page["sections"][0]["fields"][0]["type_name"], "ID!");
}

#[test]
fn test_call_page_json_names_the_declaring_type() {
    let temp_dir = TempDir::new().unwrap();
    let schema = write_schema(&temp_dir);

    let output = schemadoc_cmd()
        .args(["--schema", &schema, "page", "Query", "--field", "user", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let page: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(page["title"], "user");
    assert_eq!(page["return_type"], "User");
    assert_eq!(page["declaring_type"], "Query");
}

// =============================================================================
// Types command
// =============================================================================

#[test]
fn test_types_listing() {
    let temp_dir = TempDir::new().unwrap();
    let schema = write_schema(&temp_dir);

    schemadoc_cmd()
        .args(["--schema", &schema, "types"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("object")
                .and(predicate::str::contains("union"))
                .and(predicate::str::contains("SearchResult")),
        );
}

#[test]
fn test_types_json_output() {
    let temp_dir = TempDir::new().unwrap();
    let schema = write_schema(&temp_dir);

    let output = schemadoc_cmd()
        .args(["--schema", &schema, "types", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let listing: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let names: Vec<_> = listing
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    assert!(names.contains(&"Query"));
    assert!(names.contains(&"SearchResult"));
}

// =============================================================================
// Config file
// =============================================================================

#[test]
fn test_schema_path_from_config_file() {
    let temp_dir = TempDir::new().unwrap();
    write_schema(&temp_dir);
    std::fs::write(
        temp_dir.path().join(".schemadoc.yml"),
        "schema:\n  path: schema.graphql\n",
    )
    .unwrap();

    schemadoc_cmd()
        .arg("page")
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("root types"));
}
