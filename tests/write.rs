use nalgebra::{Point3, Vector3};
use objtext::{de, ser, Corner, Face, Mesh, TextureVertex};

#[test]
fn integral_numbers_have_no_decimal_point() {
    let mesh: Mesh = Mesh {
        vertices: vec![Point3::new(1.0, 0.0, 0.0)],
        ..Mesh::new()
    };
    assert_eq!(ser::to_string(&mesh), "v 1 0 0\n");
}

#[test]
fn empty() {
    assert_eq!(ser::to_string(&Mesh::<f64, u32>::new()), "");
}

#[test]
fn section_order() {
    let mesh: Mesh = Mesh {
        vertices: vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(1.0, 1.0, 0.5),
        ],
        texture_vertices: Some(vec![
            TextureVertex::new(0.0, 0.0),
            TextureVertex::new(1.0, 0.0),
            TextureVertex::with_w(0.0, 1.0, 0.25),
        ]),
        normals: Some(vec![Vector3::new(0.0, 0.0, 1.0)]),
        faces: vec![
            Face::from_parts(&[0, 1, 2], Some(&[0, 1, 2][..]), Some(&[0, 0, 0][..])),
            Face::from_vertices([1, 3, 2]),
        ],
        objects: Some(vec!["quad".into()]),
        groups: Some(vec!["top".into(), "bottom".into()]),
        materials: Some(vec!["steel".into()]),
        smoothing_groups: Some(vec!["off".into()]),
    };

    assert_eq!(
        ser::to_string(&mesh),
        "\
o quad
v 0 0 0
v 1 0 0
v 0 1 0
v 1 1 0.5
vt 0 0
vt 1 0
vt 0 1 0.25
vn 0 0 1
g top
g bottom
usemtl steel
s off
f 1/1/1 2/2/1 3/3/1
f 2 4 3
"
    );
}

#[test]
fn names_are_hoisted_above_faces() {
    let text = "v 0 0 0\nv 1 0 0\nv 0 1 0\ng a\nf 1 2 3\ng b\nusemtl m\nf 3 2 1\no late\n";
    let mesh: Mesh = de::from_str(text);
    let written = ser::to_string(&mesh);
    assert_eq!(
        written,
        "o late\nv 0 0 0\nv 1 0 0\nv 0 1 0\ng a\ng b\nusemtl m\nf 1 2 3\nf 3 2 1\n"
    );
    assert_eq!(de::from_str::<f64, u32>(&written), mesh);
}

#[test]
fn corner_forms() {
    let face: Face<u32> = Face::new(vec![
        Corner::new(0).with_texture(1).with_normal(2),
        Corner::new(3).with_texture(4),
        Corner::new(5).with_normal(6),
        Corner::new(7),
    ]);
    assert_eq!(face.to_string(), "f 1/2/3 4/5 6//7 8");
}

#[test]
fn short_attribute_lists_leave_slots_empty() {
    let face = Face::<u32>::from_parts(&[0, 1, 2], Some(&[4][..]), Some(&[0, 1, 2, 3][..]));
    assert_eq!(face.to_string(), "f 1/5/1 2//2 3//3");
}

#[test]
fn triangles_are_not_written() {
    let mesh: Mesh = de::from_str("v 0 0 0\nf 1 1 1 1\nf 1 1 1\n");
    assert_eq!(mesh.triangles().count(), 1);
    assert_eq!(ser::to_string(&mesh), "v 0 0 0\nf 1 1 1 1\nf 1 1 1\n");
}

#[test]
fn shortest_numbers() {
    let mesh: Mesh<f32> = Mesh {
        vertices: vec![Point3::new(0.1, -2.5, 1e-3)],
        normals: Some(vec![Vector3::new(f32::NAN, f32::INFINITY, f32::NEG_INFINITY)]),
        ..Mesh::new()
    };
    assert_eq!(
        ser::to_string(&mesh),
        "v 0.1 -2.5 0.001\nvn NaN Infinity -Infinity\n"
    );
}

#[test]
fn extreme_magnitudes_use_exponents() {
    let mesh: Mesh = Mesh {
        vertices: vec![
            Point3::new(1e-7, 1e21, 1.5e300),
            Point3::new(5e-324, f64::MAX, -1e-6),
        ],
        ..Mesh::new()
    };
    let text = ser::to_string(&mesh);
    assert_eq!(
        text,
        "v 1e-7 1e+21 1.5e+300\nv 5e-324 1.7976931348623157e+308 -0.000001\n"
    );
    assert_eq!(de::from_str::<f64, u32>(&text), mesh);
    assert_eq!(text.parse::<Mesh>(), Ok(mesh));
}

#[test]
fn writer_matches_display() {
    let mesh: Mesh = de::from_str("o a\nv 1 2 3\nvn 0 0 1\nf 1//1 1//1 1//1\n");
    let mut buf = Vec::new();
    ser::to_writer(&mut buf, &mesh).unwrap();
    assert_eq!(String::from_utf8(buf).unwrap(), mesh.to_string());
}
