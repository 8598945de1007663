use schema_rail::{ErrorPath, PathSegment};

#[test]
fn root_path_renders_empty() {
    let path = ErrorPath::root();
    assert!(path.is_root());
    assert_eq!(path.to_string(), "");
    assert_eq!(ErrorPath::from(""), path);
}

#[test]
fn fields_join_with_dots_and_indices_with_brackets() {
    let path = ErrorPath::field("test").within(0usize).within("a");
    assert_eq!(
        path.segments(),
        &[PathSegment::Field("a".into()), PathSegment::Index(0), PathSegment::Field("test".into())]
    );
    assert_eq!(path.to_string(), "a[0].test");
}

#[test]
fn leading_index_has_no_dot() {
    let path = ErrorPath::field("b").within(3usize);
    assert_eq!(path.to_string(), "[3].b");

    let nested = ErrorPath::root().within(1usize).within(0usize);
    assert_eq!(nested.to_string(), "[0][1]");
}

#[test]
fn prepend_moves_one_scope_outward() {
    let mut path = ErrorPath::field("test");
    path.prepend("child");
    path.prepend("parent");
    assert_eq!(path, "parent.child.test");
}

#[test]
fn caller_parameters_stay_verbatim() {
    let path = ErrorPath::from("a|b").within(0usize);
    assert_eq!(path.to_string(), "[0].a|b");
    assert_eq!(path.segments().len(), 2);
}
