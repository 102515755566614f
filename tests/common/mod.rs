//! Shared handler fixtures for integration tests.

use convention_routes::config::MappingConfig;
use convention_routes::routing::{ActionCandidate, HandlerCandidate, MappingResolver, RouteDeclaration, Visibility};

pub const BASE_MODULE: &str = "app::controllers";

/// Plain handler relying on conventions only.
pub fn test_plain_controller() -> HandlerCandidate {
    HandlerCandidate::new("TestPlainController")
        .in_module(BASE_MODULE)
        .action(ActionCandidate::new("index"))
        .action(ActionCandidate::new("list"))
        .action(ActionCandidate::new("doSomething"))
        .action(ActionCandidate::new("init"))
        .action(ActionCandidate::new("destroy"))
        .action(ActionCandidate::new("notAnAction").excluded())
        .action(ActionCandidate::new("helper").visibility(Visibility::Private))
}

/// Handler with explicit declarations at both levels.
pub fn test_anno_controller() -> HandlerCandidate {
    HandlerCandidate::new("TestAnnoController")
        .in_module(BASE_MODULE)
        .declared(RouteDeclaration::with_patterns(["test/ann/", "/test/annotation"]))
        .action(ActionCandidate::new("relativePath").declared(RouteDeclaration::with_patterns(["action1"])))
        .action(ActionCandidate::new("absolutePath").declared(RouteDeclaration::with_patterns(["/action2"])))
        .action(ActionCandidate::new("conventionalAction"))
}

pub fn module_one_controller() -> HandlerCandidate {
    HandlerCandidate::new("ModuleOneController")
        .in_module("app::controllers::module1")
        .action(ActionCandidate::new("index"))
        .action(ActionCandidate::new("fooBar"))
}

#[allow(dead_code)]
pub fn module_one_one_controller() -> HandlerCandidate {
    HandlerCandidate::new("ModuleOneOneController")
        .in_module("app::controllers::module1::module11")
        .action(ActionCandidate::new("index"))
        .action(ActionCandidate::new("fooBar"))
}

/// Matches the suffix but opts out of routing.
#[allow(dead_code)]
pub fn not_a_controller() -> HandlerCandidate {
    HandlerCandidate::new("NotAController")
        .in_module(BASE_MODULE)
        .excluded()
        .action(ActionCandidate::new("index"))
}

pub fn resolver_with(f: impl FnOnce(&mut MappingConfig)) -> MappingResolver {
    let mut config = MappingConfig::default();
    f(&mut config);
    MappingResolver::new(&config)
}

/// Sorted patterns for `action` on `handler`, `None` when unmapped.
#[allow(dead_code)]
pub fn mapped(resolver: &MappingResolver, handler: &HandlerCandidate, action: &str) -> Option<Vec<String>> {
    let action = handler.find_action(action).expect("fixture action exists");
    resolver.resolve(handler, action).map(|d| {
        let mut patterns = d.patterns;
        patterns.sort();
        patterns
    })
}
