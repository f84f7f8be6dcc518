//! Integration tests for end-to-end specification assembly.

#[test]
fn assemble_reduces_graph_to_active_bundle_set() {
    // Load a multi-bundle document and verify only the configured
    // bundle's apps, libs, and services survive
}

#[test]
fn assemble_expands_transitive_library_chains() {
    // Verify api -> core -> utils ends with utils in api's lib set
}

#[test]
fn assemble_rejects_cyclic_library_relations() {
    // Verify a lib cycle fails with the cycle path in the message
}
