//! Snapshot tests over sample stylesheets

use css_camelize::rewrite::DEFAULT_SCOPE_CLASS;
use css_camelize::StylesheetLoader;
use std::path::PathBuf;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn test_profile_page_module() {
    let loader = StylesheetLoader::from_path(fixture_path("ProfilePage.module.css"))
        .expect("Failed to read sample stylesheet");
    let output = loader.rewrite(DEFAULT_SCOPE_CLASS);

    insta::assert_snapshot!(output, @r"
/* Profile page styles */
.profilePage {
  max-width: 960px;
  margin: 0 auto;
}

.profileHeader {
  display: flex;
  background-color: #fafafa;
}

.profileHeaderTitle,
.profileHeaderSubtitle {
  font-size: 1.5rem;
  line-height: 1.2;
}

.userInfoCard .avatarImage {
  border-radius: 50%;
}

.tab-button:hover {
  color: var(--primary-color);
}

.tabButton.isActive {
  border-bottom: 2px solid currentColor;
}

@media (max-width: 768px) {
  .profileHeader {
    flex-direction: column;
  }
}
");
}

#[test]
fn test_profile_page_module_is_stable() {
    let first = StylesheetLoader::from_path(fixture_path("ProfilePage.module.css"))
        .expect("Failed to read sample stylesheet")
        .rewrite(DEFAULT_SCOPE_CLASS);
    let second = StylesheetLoader::from_string(first.clone()).rewrite(DEFAULT_SCOPE_CLASS);

    assert_eq!(first, second);
}
