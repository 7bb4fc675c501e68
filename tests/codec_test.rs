use std::fs;

use objview::objects::{
    parse, parse_with, serialize, Face, Mesh, ObjError, ParseOptions, Vertex, DEFAULT_MESH_NAME,
};
use tempfile::TempDir;

const TWO_GROUPS: &str = "\
# two groups
g A
v 0 0 0
v 1 0 0
v 0 1 0
vn 0 0 1
f 1 2 3
g B
v 2 2 2
f 1
";

fn write(dir: &TempDir, name: &str, text: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, text).unwrap();
    path
}

#[test]
fn parses_groups_from_disk() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "scene.obj", TWO_GROUPS);

    let meshes = parse(&path).unwrap();

    assert_eq!(meshes.len(), 2);
    assert_eq!(meshes[0].name, "A");
    assert_eq!(meshes[0].faces[0].indices, vec![0, 1, 2]);
    assert_eq!(meshes[1].name, "B");
    assert_eq!(meshes[1].vertices.len(), 1);
}

#[test]
fn missing_source_is_a_hard_failure() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.obj");

    match parse(&path) {
        Err(ObjError::SourceUnavailable { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected SourceUnavailable, got {:?}", other),
    }
}

#[test]
fn unwritable_destination_is_a_hard_failure() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("no-such-dir").join("out.obj");

    let result = serialize(&Mesh::default(), &path);
    assert!(matches!(result, Err(ObjError::DestinationUnavailable { .. })));
    assert!(!path.exists());
}

#[test]
fn serialize_then_parse_round_trips() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("round.obj");

    let mut mesh = Mesh::new("Wedge");
    mesh.vertices = vec![
        Vertex::new(0.1, -2.5, 3.75),
        Vertex::new(1e-7, 12345.678, -0.0),
        Vertex::new(f32::MAX, f32::MIN_POSITIVE, 1.0 / 3.0),
    ];
    mesh.faces = vec![Face::new(vec![2, 0, 1]), Face::new(vec![0, 1])];

    serialize(&mesh, &path).unwrap();
    let meshes = parse(&path).unwrap();

    assert_eq!(meshes, vec![mesh]);
}

#[test]
fn serialize_overwrites_existing_file() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "out.obj", TWO_GROUPS);

    let mut mesh = Mesh::new("Only");
    mesh.vertices.push(Vertex::new(1., 2., 3.));
    mesh.faces.push(Face::new(vec![0]));
    serialize(&mesh, &path).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "g Only\nv 1 2 3\nf 1\n");
}

#[test]
fn face_order_survives_a_round_trip() {
    let dir = TempDir::new().unwrap();
    let input = write(&dir, "in.obj", "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 3 1 2\n");
    let output = dir.path().join("out.obj");

    let meshes = parse(&input).unwrap();
    assert_eq!(meshes[0].name, DEFAULT_MESH_NAME);
    assert_eq!(meshes[0].faces[0].indices, vec![2, 0, 1]);

    serialize(&meshes[0], &output).unwrap();
    let text = fs::read_to_string(&output).unwrap();
    assert!(text.lines().any(|line| line == "f 3 1 2"));
}

#[test]
fn strict_mode_reports_the_offending_line() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "bad.obj", "g A\nv 0 0 0\nv 1 nope 0\nf 1 2\n");

    assert_eq!(parse(&path).unwrap()[0].vertices[1], Vertex::new(1., 0., 0.));

    match parse_with(&path, &ParseOptions::strict()) {
        Err(ObjError::MalformedRecord { line, record, .. }) => {
            assert_eq!(line, 3);
            assert_eq!(record, "v");
        }
        other => panic!("expected MalformedRecord, got {:?}", other),
    }
}

#[test]
fn file_global_indices_dangle_after_rebasing() {
    let dir = TempDir::new().unwrap();
    // Second group refers to its vertices the conventional file-wide way.
    let path = write(&dir, "global.obj", "g A\nv 0 0 0\nf 1\ng B\nv 1 1 1\nf 2\n");

    let meshes = parse(&path).unwrap();

    assert!(meshes[0].validate().is_ok());
    assert!(matches!(
        meshes[1].validate(),
        Err(ObjError::DanglingIndex { index: 1, vertex_count: 1, .. })
    ));
}

#[test]
fn textured_faces_keep_vertex_indices_and_names_keep_hashes() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "textured.obj",
        "g part#2 # trailing\nv 0 0 0\nv 1 0 0\nv 0 1 0\nvt 0 0\nvn 0 0 1\nf 1/1/1 2/2/1 3/3/1\n",
    );

    let meshes = parse_with(&path, &ParseOptions::strict()).unwrap();

    assert_eq!(meshes[0].name, "part#2");
    assert_eq!(meshes[0].faces[0].indices, vec![0, 1, 2]);
}
