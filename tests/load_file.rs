use std::fs;
use std::path::{Path, PathBuf};

use approx::assert_relative_eq;
use obj_ingest::loaders::obj::{
    load_file, load_file_with_options, load_materials, LoadError, LoadOptions, Material,
};
use obj_ingest::math::Vec3;
use obj_ingest::scene::build_mesh_component;

fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, contents).unwrap();
    path
}

const PALETTE: &str = "\
newmtl red
Kd 1.0 0.0 0.0
map_Kd red.png

newmtl blue
Kd 0.0 0.0 1.0
";

const TWO_GROUPS: &str = "\
mtllib palette.mtl
v 0 0 0
v 1 0 0
v 1 1 0
v 0 1 0
o left
usemtl red
f 1 2 3
o right
usemtl blue
f 1 3 4
";

#[test]
fn triangle_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(dir.path(), "tri.obj", "v 0 0 0\nv 1 0 0\nv 1 1 0\nf 1 2 3\n");

    let result = load_file(&path).unwrap();
    assert_eq!(result.meshes.len(), 1);
    assert_eq!(result.all_vertices.len(), 3);
    assert_eq!(result.all_indices, vec![0, 1, 2]);
}

#[test]
fn groups_bind_their_materials() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "palette.mtl", PALETTE);
    let path = write(dir.path(), "pair.obj", TWO_GROUPS);

    let result = load_file(&path).unwrap();
    assert_eq!(result.materials.len(), 2);
    assert_eq!(result.meshes.len(), 2);

    assert_eq!(result.meshes[0].name, "left");
    assert_eq!(result.meshes[0].material.name, "red");
    assert_eq!(
        result.meshes[0].material.texture_maps.diffuse.as_deref(),
        Some("red.png")
    );
    assert_eq!(result.meshes[1].name, "right");
    assert_eq!(result.meshes[1].material.name, "blue");
    assert_eq!(result.meshes[1].material.diffuse, Vec3::new(0.0, 0.0, 1.0));
}

#[test]
fn material_library_resolves_next_to_the_model() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "assets/materials/palette.mtl", PALETTE);
    let path = write(
        dir.path(),
        "assets/pair.obj",
        &TWO_GROUPS.replace("mtllib palette.mtl", "mtllib materials/palette.mtl"),
    );

    let result = load_file(&path).unwrap();
    assert_eq!(result.meshes[0].material.name, "red");
    assert_eq!(result.meshes[1].material.name, "blue");
}

#[test]
fn missing_material_library_is_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(dir.path(), "pair.obj", TWO_GROUPS);

    let result = load_file(&path).unwrap();
    assert!(result.materials.is_empty());
    assert_eq!(result.meshes.len(), 2);
    assert!(result.meshes.iter().all(|m| m.material.name.is_empty()));
}

#[test]
fn unknown_material_name_keeps_default_material() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "palette.mtl", PALETTE);
    let path = write(
        dir.path(),
        "pair.obj",
        &TWO_GROUPS.replace("usemtl blue", "usemtl green"),
    );

    let result = load_file(&path).unwrap();
    assert_eq!(result.meshes[0].material.name, "red");
    assert_eq!(result.meshes[1].material, Material::default());
}

#[test]
fn material_splits_bind_each_run_to_its_own_material() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "palette.mtl", PALETTE);
    let path = write(
        dir.path(),
        "split.obj",
        "\
mtllib palette.mtl
v 0 0 0
v 1 0 0
v 1 1 0
o a
usemtl red
f 1 2 3
usemtl blue
f 1 2 3
o b
f 3 2 1
",
    );

    let result = load_file(&path).unwrap();
    let bound: Vec<(&str, &str)> = result
        .meshes
        .iter()
        .map(|m| (m.name.as_str(), m.material.name.as_str()))
        .collect();
    assert_eq!(bound, vec![("a", "red"), ("a_2", "blue"), ("b", "blue")]);
    assert_eq!(result.meshes[0].material.diffuse, Vec3::new(1.0, 0.0, 0.0));
    assert_eq!(result.meshes[2].material.diffuse, Vec3::new(0.0, 0.0, 1.0));
}

#[test]
fn latin1_comments_and_names_do_not_abort_the_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("wuerfel.obj");
    fs::write(
        &path,
        b"# exported by caf\xe9 tool\nv 0 0 0\nv 1 0 0\nv 1 1 0\no W\xfcrfel\nf 1 2 3\n",
    )
    .unwrap();

    let result = load_file(&path).unwrap();
    assert_eq!(result.meshes.len(), 1);
    assert_eq!(result.meshes[0].name, "W\u{FFFD}rfel");
    assert_eq!(result.all_indices, vec![0, 1, 2]);
}

#[test]
fn latin1_material_file_still_loads() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("legacy.mtl");
    fs::write(&path, b"# r\xf6tlich\nnewmtl rot\nKd 1 0 0\n").unwrap();

    let materials = load_materials(&path).unwrap();
    assert_eq!(materials.len(), 1);
    assert_eq!(materials[0].diffuse, Vec3::new(1.0, 0.0, 0.0));
}

#[test]
fn directory_with_model_extension_is_file_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scene.obj");
    fs::create_dir(&path).unwrap();

    assert!(matches!(load_file(&path), Err(LoadError::FileNotFound { .. })));
}

#[test]
fn wrong_extension_is_rejected_before_reading() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("model.txt");

    assert!(matches!(
        load_file(&path),
        Err(LoadError::WrongExtension { expected: "obj", .. })
    ));
}

#[test]
fn missing_file_is_file_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.obj");

    assert!(matches!(load_file(&path), Err(LoadError::FileNotFound { .. })));
}

#[test]
fn comment_only_file_is_empty_model() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(dir.path(), "empty.obj", "# exported by nothing\n\n# end\n");

    assert!(matches!(load_file(&path), Err(LoadError::EmptyModel { .. })));
}

#[test]
fn short_vertex_line_is_malformed() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(dir.path(), "bad.obj", "v 0 0 0\nv 1 2\nv 1 1 0\nf 1 2 3\n");

    match load_file(&path) {
        Err(LoadError::MalformedLine { line, directive, .. }) => {
            assert_eq!(line, 2);
            assert_eq!(directive, "v");
        }
        other => panic!("expected MalformedLine, got {:?}", other),
    }
}

#[test]
fn materials_file_must_declare_a_material() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(dir.path(), "none.mtl", "# no materials\nKd 1 1 1\n");

    assert!(matches!(
        load_materials(&path),
        Err(LoadError::EmptyMaterialSet { .. })
    ));
    assert!(matches!(
        load_materials(&dir.path().join("palette.txt")),
        Err(LoadError::WrongExtension { expected: "mtl", .. })
    ));
}

#[test]
fn textured_polygon_with_normals() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(
        dir.path(),
        "hex.obj",
        "\
v 2 0 0
v 1 1.7 0
v -1 1.7 0
v -2 0 0
v -1 -1.7 0
v 1 -1.7 0
vt 0 0
vt 1 1
vn 0 0 1
o hexagon
f 1/1/1 2/2/1 3/1/1 4/2/1 5/1/1 6/2/1
",
    );

    let options = LoadOptions {
        flip_texcoord_v: true,
        ..Default::default()
    };
    let result = load_file_with_options(&path, &options).unwrap();
    let mesh = &result.meshes[0];

    assert_eq!(mesh.vertices.len(), 6);
    assert_eq!(mesh.indices.len(), 12);
    assert!(mesh.indices.iter().all(|&i| (i as usize) < mesh.vertices.len()));
    assert!(mesh.vertices.iter().all(|v| v.normal == Vec3::new(0.0, 0.0, 1.0)));
    assert_relative_eq!(mesh.vertices[1].texcoord.y, 0.0);
    assert_relative_eq!(mesh.vertices[0].texcoord.y, 1.0);

    let area: f32 = mesh
        .indices
        .chunks(3)
        .map(|t| {
            let a = mesh.vertices[t[0] as usize].position;
            let b = mesh.vertices[t[1] as usize].position;
            let c = mesh.vertices[t[2] as usize].position;
            (b - a).cross(c - a).z * 0.5
        })
        .sum();
    assert_relative_eq!(area, 10.2, epsilon = 1e-4);
}

#[test]
fn mesh_component_uses_the_flattened_view() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "palette.mtl", PALETTE);
    let path = write(dir.path(), "pair.obj", TWO_GROUPS);

    let component =
        build_mesh_component(path.to_str().unwrap(), &LoadOptions::default()).unwrap();
    assert_eq!(component.num_vertices, 6);
    assert_eq!(component.indices, vec![0, 1, 2, 3, 4, 5]);
}
