//! Tests for the scene-host boundary and its generation operations.

use super::*;
use crate::error::PlatonicError;

/// Handles come back in insertion order.
#[test]
fn test_memory_host_handles_are_sequential() {
    let mut host = MemoryHost::new();
    let first = create_solid(&mut host, &BuildOptions::default()).unwrap();
    let second = create_solid(&mut host, &BuildOptions::default()).unwrap();
    assert_eq!((first, second), (0, 1));
    assert_eq!(host.objects().len(), 2);
}

/// The default options build a tetrahedron at the origin.
#[test]
fn test_create_solid_uses_kind_name() {
    let mut host = MemoryHost::new();
    create_solid(&mut host, &BuildOptions::default()).unwrap();
    let object = &host.objects()[0];
    assert_eq!(object.name, "Tetrahedron");
    assert_eq!(object.transform.translation, glam::DVec3::ZERO);
}

/// Existing objects survive by default.
#[test]
fn test_create_solid_keeps_existing_objects() {
    let mut host = MemoryHost::new();
    create_solid(&mut host, &BuildOptions::default()).unwrap();
    create_solid(
        &mut host,
        &BuildOptions {
            kind: SolidKind::Cube,
            ..BuildOptions::default()
        },
    )
    .unwrap();
    assert_eq!(host.objects().len(), 2);
}

/// The clear flag empties the host before inserting.
#[test]
fn test_create_solid_clears_when_asked() {
    let mut host = MemoryHost::new();
    create_solid(&mut host, &BuildOptions::default()).unwrap();
    create_solid(
        &mut host,
        &BuildOptions {
            kind: SolidKind::Icosahedron,
            clear_before_create: true,
            ..BuildOptions::default()
        },
    )
    .unwrap();
    assert_eq!(host.objects().len(), 1);
    assert_eq!(host.objects()[0].name, "Icosahedron");
}

/// A failed request leaves the host untouched, even with the clear flag set.
#[test]
fn test_failed_create_never_clears() {
    let mut host = MemoryHost::new();
    create_solid(&mut host, &BuildOptions::default()).unwrap();

    let result = create_solid(
        &mut host,
        &BuildOptions {
            scale: -1.0,
            clear_before_create: true,
            ..BuildOptions::default()
        },
    );
    assert!(matches!(result, Err(PlatonicError::InvalidScale(_))));
    assert_eq!(host.objects().len(), 1);
}

/// The template inserts all five solids in layout order.
#[test]
fn test_create_template_inserts_five_in_order() {
    let mut host = MemoryHost::new();
    let handles = create_template(&mut host, &BuildOptions::default()).unwrap();
    assert_eq!(handles, vec![0, 1, 2, 3, 4]);
    assert_eq!(host.objects().len(), 5);
    assert_eq!(host.objects()[3].name, "Dodecahedron");
}

/// The template honors the clear flag.
#[test]
fn test_create_template_clears_when_asked() {
    let mut host = MemoryHost::new();
    create_solid(&mut host, &BuildOptions::default()).unwrap();
    create_template(
        &mut host,
        &BuildOptions {
            clear_before_create: true,
            ..BuildOptions::default()
        },
    )
    .unwrap();
    assert_eq!(host.objects().len(), 5);
}
