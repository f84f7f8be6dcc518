//! Integration tests for repository co-location queries.

#[test]
fn container_repos_union_app_and_lib_repos() {
    // Verify an app's repo set covers its own repo and every expanded
    // lib dependency's repo, with duplicate locations collapsed
}

#[test]
fn repos_listing_honors_overrides() {
    // Verify --paths reflects repo_overrides from the configuration
}
