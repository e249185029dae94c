#[test]
fn postbox_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/postbox_error_pass.rs");
    t.pass("tests/ui/postbox_error_context.rs");
    t.compile_fail("tests/ui/postbox_error_no_context.rs");
    t.compile_fail("tests/ui/postbox_error_tuple_variant.rs");
    t.compile_fail("tests/ui/postbox_error_not_enum.rs");
    t.compile_fail("tests/ui/postbox_error_duplicate_source.rs");
}
