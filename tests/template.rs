use pretty_assertions::assert_eq;
use waypoint::{compile, InsertError, Segment};

fn parse(route: &str) -> Vec<Vec<Segment>> {
    compile(route)
        .unwrap()
        .into_iter()
        .map(|template| template.segments().to_vec())
        .collect()
}

#[test]
fn should_yield_static_route_given_static_route() {
    for route in ["/static", "/static/", "/a/b/c", "/"] {
        let templates = compile(route).unwrap();
        assert_eq!(templates.len(), 1);
        assert!(templates[0].is_static());
        assert_eq!(
            templates[0].literal(),
            Some(route.strip_suffix('/').filter(|r| !r.is_empty()).unwrap_or(route))
        );
    }
}

#[test]
fn should_yield_expanded_argument() {
    assert_eq!(
        parse("/:param"),
        vec![vec![Segment::literal("/"), Segment::bounded("param")]]
    );
}

#[test]
fn should_yield_expanded_wildcard_argument() {
    assert_eq!(
        parse("/*param"),
        vec![vec![Segment::literal("/"), Segment::greedy("param")]]
    );
}

#[test]
fn should_yield_multiple_expanded_arguments() {
    assert_eq!(
        parse("/:param1/:param2"),
        vec![vec![
            Segment::literal("/"),
            Segment::bounded("param1"),
            Segment::literal("/"),
            Segment::bounded("param2"),
        ]]
    );
}

#[test]
fn should_yield_expanded_arguments_with_statics() {
    assert_eq!(
        parse("/user/:id/items/:item"),
        vec![vec![
            Segment::literal("/user/"),
            Segment::bounded("id"),
            Segment::literal("/items/"),
            Segment::bounded("item"),
        ]]
    );
}

#[test]
fn should_allow_underscores_and_hyphens_in_argument_names() {
    assert_eq!(
        parse("/:user_id"),
        vec![vec![Segment::literal("/"), Segment::bounded("user_id")]]
    );
    assert_eq!(
        parse("/:user-id"),
        vec![vec![Segment::literal("/"), Segment::bounded("user-id")]]
    );
}

#[test]
fn should_yield_both_forms_of_optional_argument() {
    assert_eq!(
        parse("/:?slug"),
        vec![
            vec![Segment::literal("/")],
            vec![Segment::literal("/"), Segment::bounded("slug")],
        ]
    );
}

#[test]
fn should_branch_optional_argument_off_required_prefix() {
    assert_eq!(
        parse("/fixed/:var1/:?var2"),
        vec![
            vec![
                Segment::literal("/fixed/"),
                Segment::bounded("var1"),
                Segment::literal("/"),
            ],
            vec![
                Segment::literal("/fixed/"),
                Segment::bounded("var1"),
                Segment::literal("/"),
                Segment::bounded("var2"),
            ],
        ]
    );
}

#[test]
fn should_append_trailing_text_without_doubled_separator() {
    assert_eq!(
        parse("/a/:?b/c"),
        vec![
            vec![Segment::literal("/a/c")],
            vec![
                Segment::literal("/a/"),
                Segment::bounded("b"),
                Segment::literal("/c"),
            ],
        ]
    );
}

#[test]
fn should_branch_each_optional_argument_separately() {
    assert_eq!(
        parse("/a/:?b/:?c"),
        vec![
            vec![Segment::literal("/a/")],
            vec![Segment::literal("/a/"), Segment::bounded("b")],
            vec![Segment::literal("/a/"), Segment::bounded("c")],
        ]
    );
}

#[test]
fn should_reject_hyphen_in_optional_argument_name() {
    assert_eq!(
        compile("/page/:?page-slug"),
        Err(InsertError::InvalidArgumentName {
            name: "page-slug".to_string()
        })
    );
}

#[test]
fn should_leave_duplicates_to_the_registry() {
    assert_eq!(
        parse("/users/:id/photos/:id"),
        vec![vec![
            Segment::literal("/users/"),
            Segment::bounded("id"),
            Segment::literal("/photos/"),
            Segment::bounded("id"),
        ]]
    );
}

#[test]
fn should_compile_identically_twice() {
    for route in ["/", "/users/:id", "/shop/:?category/*rest", "/a/:?b/:?c/d"] {
        assert_eq!(compile(route), compile(route));
    }
}
