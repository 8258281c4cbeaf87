//! Integration tests for visualizer lookup and dispatch.

use glimpse::glm::{mat_type, scalar_type, vec_type};
use glimpse::registry::{is_glm_mat, is_glm_vec};
use glimpse::snapshot::SnapshotBuilder;
use glimpse::visualize::VectorVisualizer;
use glimpse::{ElementKind, Registry, TemplateArg, TypeDescriptor, TypeKind, Visualizer};

fn float() -> TypeDescriptor {
    scalar_type(ElementKind::Float)
}

// ---------------------------------------------------------------------------
// Predicates
// ---------------------------------------------------------------------------

#[test]
fn vec_family_matches_single_level_template() {
    assert!(is_glm_vec(&vec_type(3, &float())));
    assert!(!is_glm_mat(&vec_type(3, &float())));
    assert!(is_glm_mat(&mat_type(2, 2, &float())));
    assert!(!is_glm_vec(&mat_type(2, 2, &float())));
}

#[test]
fn nested_template_argument_is_rejected() {
    let inner = vec_type(2, &float());
    let nested = TypeDescriptor::new(
        "glm::vec<2, glm::vec<2, float, (glm::qualifier)0>, (glm::qualifier)0>",
        16,
        TypeKind::Struct {
            template_args: vec![TemplateArg::Value(2), TemplateArg::Type(inner)],
            fields: vec![],
        },
    );
    assert!(!is_glm_vec(&nested));
}

#[test]
fn similar_names_do_not_match() {
    let vector = TypeDescriptor::new(
        "glm::vector<3, float>",
        12,
        TypeKind::Struct {
            template_args: vec![TemplateArg::Value(3), TemplateArg::Type(float())],
            fields: vec![],
        },
    );
    assert!(!is_glm_vec(&vector));
    assert!(!is_glm_vec(&float()));
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

#[test]
fn glm_registry_has_two_bindings() {
    let registry = Registry::glm();
    let names: Vec<&str> = registry.bindings().iter().map(|b| b.name()).collect();
    assert_eq!(names, vec!["glm::vec", "glm::mat"]);
}

#[test]
fn lookup_routes_by_family() {
    let registry = Registry::glm();
    let vec_binding = registry.lookup(&vec_type(2, &float())).unwrap();
    assert!(matches!(vec_binding.visualizer(), Visualizer::Vector(_)));
    let mat_binding = registry.lookup(&mat_type(3, 3, &float())).unwrap();
    assert!(matches!(mat_binding.visualizer(), Visualizer::Matrix(_)));
    assert!(registry.lookup(&float()).is_none());
}

#[test]
fn typedefs_are_resolved_before_matching() {
    let registry = Registry::glm();
    let vec3 = TypeDescriptor::alias("glm::vec3", vec_type(3, &float()));
    let binding = registry.lookup(&vec3).unwrap();
    assert_eq!(binding.name(), "glm::vec");
}

#[test]
fn first_matching_binding_wins() {
    let mut registry = Registry::new("test");
    registry
        .register(
            "first",
            |_| true,
            Visualizer::Vector(VectorVisualizer::default()),
        )
        .register(
            "second",
            |_| true,
            Visualizer::Vector(VectorVisualizer::default()),
        );
    assert_eq!(registry.lookup(&float()).unwrap().name(), "first");
}

#[test]
fn render_dispatches_or_declines() {
    let mut builder = SnapshotBuilder::new(0x1000);
    let addr = builder.push_f32(1.0);
    builder.push_f32(2.0);
    let snap = builder.build();
    let registry = Registry::glm();

    let node = registry
        .render(&snap.value(vec_type(2, &float()), addr))
        .unwrap()
        .unwrap();
    assert_eq!(node.summary, "vec2: [1.   2.  ]");

    assert!(registry.render(&snap.value(float(), addr)).is_none());
}

#[test]
fn visualizer_hooks_are_independent() {
    let mut builder = SnapshotBuilder::new(0x1000);
    let addr = builder.push_f32(3.0);
    let snap = builder.build();
    let value = snap.value(vec_type(1, &float()), addr);
    let registry = Registry::glm();
    let vis = registry.lookup(&vec_type(1, &float())).unwrap().visualizer();

    assert_eq!(vis.summary(&value).unwrap(), "vec1: [3.  ]");
    assert_eq!(vis.children(&value).unwrap().len(), 1);
    assert_eq!(vis.display_hint().as_str(), "array");
}
