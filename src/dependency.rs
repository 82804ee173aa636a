use crate::uidl::{ComponentDependency, DependencyType};

/// Picks the dependency of a mapped node. The UIDL's own dependency has
/// priority over the mapping's; a local dependency without a path is assumed
/// to live next to the generated file, at `prefix + mapped_type`.
pub fn resolve_dependency(
    mapped_type: &str,
    uidl_dependency: Option<ComponentDependency>,
    mapped_dependency: Option<ComponentDependency>,
    local_dependencies_prefix: &str,
) -> Option<ComponentDependency> {
    let mut dependency = uidl_dependency.or(mapped_dependency)?;

    let has_path = dependency.path.as_deref().is_some_and(|p| !p.is_empty());
    if dependency.r#type == DependencyType::Local && !has_path {
        dependency.path = Some(format!("{}{}", local_dependencies_prefix, mapped_type));
    }

    Some(dependency)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_path_defaults_to_prefix_and_type() {
        let dep = resolve_dependency("Navbar", Some(ComponentDependency::local()), None, "./")
            .unwrap();
        assert_eq!(dep.path.as_deref(), Some("./Navbar"));
    }

    #[test]
    fn test_uidl_dependency_wins() {
        let uidl = ComponentDependency::package("react-router-dom", "5.0.0");
        let mapped = ComponentDependency::package("next/link", "10.0.0");

        let dep = resolve_dependency("Link", Some(uidl.clone()), Some(mapped), "./").unwrap();
        assert_eq!(dep, uidl);
    }

    #[test]
    fn test_mapping_dependency_used_when_uidl_has_none() {
        let mut mapped = ComponentDependency::local();
        mapped.path = Some("../shared/Button".to_string());

        let dep = resolve_dependency("Button", None, Some(mapped), "./").unwrap();
        assert_eq!(dep.path.as_deref(), Some("../shared/Button"));
    }

    #[test]
    fn test_empty_path_is_defaulted() {
        let mut local = ComponentDependency::local();
        local.path = Some(String::new());

        let dep = resolve_dependency("Card", Some(local), None, "../components/").unwrap();
        assert_eq!(dep.path.as_deref(), Some("../components/Card"));
    }

    #[test]
    fn test_no_dependency() {
        assert!(resolve_dependency("div", None, None, "./").is_none());
    }
}
