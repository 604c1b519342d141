use crate::parse::parse;

// Serializing any document this crate produces must yield text that
// reparses to a structurally equal document.
fn assert_round_trips(source: &str) {
    let doc = parse(source).unwrap();
    let printed = doc.to_graphql_string();
    let reparsed = parse(printed.as_str())
        .unwrap_or_else(|err| panic!("reparse of {printed:?} failed: {err}"));
    assert_eq!(reparsed, doc);
}

#[test]
fn simple_queries_round_trip() {
    assert_round_trips("{ user { id name } }");
    assert_round_trips("query GetUser { user { id } }");
    assert_round_trips("mutation { createUser(name: \"Alice\") { id } }");
    assert_round_trips("subscription OnUser { userCreated { id } }");
}

#[test]
fn variables_round_trip() {
    assert_round_trips("query Q($id: ID!, $limit: Int = 10) { get(id: $id) }");
    assert_round_trips("query ($ids: [ID!]!, $tags: [String]) { get(ids: $ids) }");
}

#[test]
fn directives_round_trip() {
    assert_round_trips("query Q @cached @log(level: \"info\") { user @skip(if: $no) }");
}

#[test]
fn fragments_round_trip() {
    assert_round_trips(
        r#"
        query {
            search {
                ...resultFields
                ... on User {
                    email
                }
                ... {
                    id
                }
            }
        }

        fragment resultFields on SearchResult {
            id
            score
        }
        "#,
    );
}

#[test]
fn value_literals_round_trip() {
    assert_round_trips(
        r#"
        {
            thing(
                int: 3,
                float: 1.5,
                whole: 42.0,
                string: "say \"hi\"",
                yes: true,
                nothing: null,
                color: RED,
                list: [1, [2, 3]],
                object: {a: 1, b: {c: [true]}}
            )
        }
        "#,
    );
}

#[test]
fn edited_documents_round_trip() {
    let doc = parse("query { user(id: 19) { id } }")
        .unwrap()
        .add_field("mailbox", crate::ops::FieldOpts::new().path(vec!["user".into()]))
        .unwrap()
        .add_directive("log", &["user".into()], vec![])
        .inject_typenames();

    let reparsed = parse(doc.to_graphql_string().as_str()).unwrap();
    assert_eq!(reparsed, doc);
}
