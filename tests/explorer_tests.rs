use schemadoc::explorer::{Explorer, Section, START_PAGE_LABEL, strip_wrappers};
use schemadoc::schema::SchemaIndex;

const SDL: &str = r#"
    type Query {
        user(id: ID!): User
        search(term: String!): [SearchResult]
    }

    type User {
        id: ID!
        name: String
    }

    union SearchResult = Book | Movie
    type Book { title: String }
    type Movie { title: String }
"#;

fn schema() -> SchemaIndex {
    SchemaIndex::parse(SDL).unwrap()
}

// =============================================================================
// Normalization
// =============================================================================

#[test]
fn test_normalization_examples() {
    assert_eq!(strip_wrappers("String!"), "String");
    assert_eq!(strip_wrappers("[User]"), "User");
    // Only one wrapper level is stripped per call.
    assert_eq!(strip_wrappers("[ID!]"), "ID!");
}

#[test]
fn test_normalization_idempotent_on_clean_input() {
    for raw in ["User", "String!", "[User]", "[SearchResult]", "ID"] {
        let once = strip_wrappers(raw);
        assert_eq!(strip_wrappers(once), once);
    }
}

// =============================================================================
// Stack / state coupling
// =============================================================================

#[test]
fn test_inspected_node_always_matches_stack_top() {
    let schema = schema();
    let mut explorer = Explorer::new(&schema);
    assert!(explorer.current_entry().is_none());

    explorer.open_type("Query");
    assert_eq!(explorer.current_entry().unwrap().name(), "Query");

    explorer.open_call("Query", "user");
    assert_eq!(explorer.current_entry().unwrap().name(), "user");

    explorer.open_type("User");
    assert_eq!(explorer.current_entry().unwrap().name(), "User");
    assert_eq!(explorer.depth(), 3);
}

#[test]
fn test_back_navigation_is_inverse_of_opening() {
    let schema = schema();
    let mut explorer = Explorer::new(&schema);

    explorer.open_type("Query");
    explorer.open_call("Query", "user");
    explorer.open_type("User");
    explorer.open_type("SearchResult");

    for _ in 0..4 {
        explorer.go_back();
    }

    assert_eq!(explorer.depth(), 0);
    assert!(explorer.current_entry().is_none());
    assert!(explorer.back_label().is_none());
}

#[test]
fn test_go_back_on_empty_stack_is_a_noop() {
    let schema = schema();
    let mut explorer = Explorer::new(&schema);
    explorer.go_back();
    assert_eq!(explorer.depth(), 0);
    assert!(explorer.current_entry().is_none());
}

#[test]
fn test_reset_clears_the_trail_but_not_visibility() {
    let schema = schema();
    let mut explorer = Explorer::new(&schema);
    explorer.open_type("Query");
    explorer.open_type("User");

    explorer.reset_to_start();
    assert_eq!(explorer.depth(), 0);
    assert!(explorer.is_expanded());
    assert_eq!(explorer.current_page().unwrap().title, "Schema");
}

// =============================================================================
// Lookup misses
// =============================================================================

#[test]
fn test_unknown_type_is_a_noop_from_any_state() {
    let schema = schema();
    let mut explorer = Explorer::new(&schema);

    // From the collapsed start state
    explorer.open_type("DoesNotExist");
    assert_eq!(explorer.depth(), 0);
    assert!(!explorer.is_expanded());

    // From a type page
    explorer.open_type("User");
    explorer.open_type("DoesNotExist");
    assert_eq!(explorer.depth(), 1);
    assert_eq!(explorer.current_entry().unwrap().name(), "User");

    // From a call page
    explorer.open_call("Query", "user");
    explorer.open_type("DoesNotExist");
    assert_eq!(explorer.depth(), 2);
    assert_eq!(explorer.current_entry().unwrap().name(), "user");
}

#[test]
fn test_unknown_call_is_a_noop() {
    let schema = schema();
    let mut explorer = Explorer::new(&schema);

    explorer.open_call("Query", "nope");
    explorer.open_call("Ghost", "user");
    assert_eq!(explorer.depth(), 0);
    assert!(!explorer.is_expanded());
}

#[test]
fn test_declaring_type_name_is_not_normalized() {
    let schema = schema();
    let mut explorer = Explorer::new(&schema);

    // Call links always carry bare declaring names; a wrapped one misses.
    explorer.open_call("[Query]", "user");
    assert_eq!(explorer.depth(), 0);
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_scenario_a_field_pages_and_wrapper_links() {
    let schema = schema();
    let mut explorer = Explorer::new(&schema);

    explorer.open_type("Query");
    let page = explorer.current_page().unwrap();
    let Some(Section::Fields { fields }) = page.sections.first() else {
        panic!("expected a fields section on Query");
    };
    assert_eq!(fields[0].name, "user");
    assert_eq!(fields[0].type_name, "User");

    explorer.open_type("User");
    let page = explorer.current_page().unwrap();
    let Some(Section::Fields { fields }) = page.sections.first() else {
        panic!("expected a fields section on User");
    };
    assert_eq!(fields[0].name, "id");
    assert_eq!(fields[0].type_name, "ID!");
    assert_eq!(fields[1].name, "name");
    assert_eq!(fields[1].type_name, "String");

    // The wrapped display name still resolves as a link target: the
    // `ID!` label normalizes to the built-in `ID` scalar.
    explorer.open_type(&fields[0].type_name);
    assert_eq!(explorer.current_page().unwrap().title, "ID");
    explorer.go_back();

    explorer.open_call("User", "name");
    assert_eq!(explorer.current_page().unwrap().title, "name");
}

#[test]
fn test_scenario_b_union_page() {
    let schema = schema();
    let mut explorer = Explorer::new(&schema);
    explorer.open_type("SearchResult");

    let page = explorer.current_page().unwrap();
    assert_eq!(page.sections.len(), 1, "unions expose no own fields");
    let Section::Types { label, types } = &page.sections[0] else {
        panic!("expected a types section");
    };
    assert_eq!(label, "possible types");
    let names: Vec<_> = types.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, ["Book", "Movie"]);
}

#[test]
fn test_scenario_c_back_label_names_the_previous_page() {
    let schema = schema();
    let mut explorer = Explorer::new(&schema);

    explorer.open_type("Query");
    explorer.open_type("User");
    assert_eq!(explorer.back_label(), Some("Query"));

    explorer.go_back();
    assert_eq!(explorer.back_label(), Some(START_PAGE_LABEL));

    explorer.go_back();
    assert_eq!(explorer.back_label(), None);
}

// =============================================================================
// Visibility
// =============================================================================

#[test]
fn test_toggle_round_trip_restores_the_same_page() {
    let schema = schema();
    let mut explorer = Explorer::new(&schema);
    explorer.open_call("Query", "search");

    explorer.toggle();
    assert!(explorer.current_page().is_none());

    explorer.toggle();
    let page = explorer.current_page().unwrap();
    assert_eq!(page.title, "search");
    assert_eq!(page.return_type.as_deref(), Some("[SearchResult]"));
    assert_eq!(page.declaring_type.as_deref(), Some("Query"));
}

#[test]
fn test_open_type_forces_visibility() {
    let schema = schema();
    let mut explorer = Explorer::new(&schema);
    assert!(!explorer.is_expanded());
    explorer.open_type("User");
    assert!(explorer.is_expanded());
}
