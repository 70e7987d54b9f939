//! Triangle meshes and OBJ loading.
//!
//! A [`Mesh`] is a list of object-space vertices and a list of triangular
//! faces indexing into it. The renderer only sees meshes through the
//! [`MeshSource`] trait, so other vertex stores can be rendered directly.

use std::fmt;
use std::io::BufRead;
use std::path::Path;

use crate::math::Vec3;

/// A triangle given by three 0-based indices into the vertex list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Face {
    pub a: u32,
    pub b: u32,
    pub c: u32,
}

impl Face {
    pub const fn new(a: u32, b: u32, c: u32) -> Self {
        Self { a, b, c }
    }

    pub const fn indices(&self) -> [u32; 3] {
        [self.a, self.b, self.c]
    }
}

/// Why a mesh could not be loaded or rendered.
#[derive(Debug)]
pub enum MeshError {
    /// The OBJ file could not be opened or parsed.
    Load(tobj::LoadError),
    /// The mesh has no faces to draw.
    Empty,
    /// The source reports a face count but has no face at `face`.
    MissingFace { face: usize },
    /// A face refers to a vertex that does not exist.
    FaceIndexOutOfRange {
        face: usize,
        index: u32,
        vertex_count: usize,
    },
}

impl fmt::Display for MeshError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeshError::Load(e) => write!(f, "invalid mesh: failed to load OBJ: {e}"),
            MeshError::Empty => write!(f, "invalid mesh: no faces"),
            MeshError::MissingFace { face } => write!(f, "invalid mesh: face {face} is missing"),
            MeshError::FaceIndexOutOfRange {
                face,
                index,
                vertex_count,
            } => write!(
                f,
                "invalid mesh: face {face} uses vertex {index} but the mesh has {vertex_count} vertices"
            ),
        }
    }
}

impl std::error::Error for MeshError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MeshError::Load(e) => Some(e),
            _ => None,
        }
    }
}

impl From<tobj::LoadError> for MeshError {
    fn from(e: tobj::LoadError) -> Self {
        MeshError::Load(e)
    }
}

/// Read access to a triangle mesh.
pub trait MeshSource {
    fn vertex_count(&self) -> usize;

    fn face_count(&self) -> usize;

    /// The vertex at `index`, or `None` past the end.
    fn vertex(&self, index: usize) -> Option<Vec3>;

    /// The face at `index`, or `None` past the end.
    fn face(&self, index: usize) -> Option<Face>;

    /// Check that there is something to draw and that every face index
    /// refers to an existing vertex.
    fn validate(&self) -> Result<(), MeshError> {
        if self.face_count() == 0 {
            return Err(MeshError::Empty);
        }
        let vertex_count = self.vertex_count();
        for i in 0..self.face_count() {
            let face = self.face(i).ok_or(MeshError::MissingFace { face: i })?;
            if let Some(&index) = face
                .indices()
                .iter()
                .find(|&&index| index as usize >= vertex_count)
            {
                return Err(MeshError::FaceIndexOutOfRange {
                    face: i,
                    index,
                    vertex_count,
                });
            }
        }
        Ok(())
    }
}

/// An indexed triangle mesh in object space.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
    vertices: Vec<Vec3>,
    faces: Vec<Face>,
}

impl Mesh {
    /// Build a mesh from raw parts. Indices are checked when rendering, or
    /// eagerly with [`MeshSource::validate`].
    pub fn new(vertices: Vec<Vec3>, faces: Vec<Face>) -> Self {
        Self { vertices, faces }
    }

    /// Load every object and group in an OBJ file into a single mesh.
    ///
    /// Polygons with more than three corners are triangulated; points and
    /// lines are ignored. Materials are not read.
    pub fn from_obj<P: AsRef<Path> + fmt::Debug>(file_path: P) -> Result<Self, MeshError> {
        let (models, _materials) = tobj::load_obj(&file_path, &Self::load_options())?;
        let mesh = Self::from_models(&models)?;
        log::info!(
            "loaded {:?}: {} vertices, {} faces",
            file_path,
            mesh.vertices.len(),
            mesh.faces.len()
        );
        Ok(mesh)
    }

    /// Load an OBJ document from an in-memory reader.
    pub fn from_obj_reader<R: BufRead>(reader: &mut R) -> Result<Self, MeshError> {
        let (models, _materials) = tobj::load_obj_buf(reader, &Self::load_options(), |_| {
            Err(tobj::LoadError::OpenFileFailed)
        })?;
        let mesh = Self::from_models(&models)?;
        log::debug!(
            "parsed OBJ: {} vertices, {} faces",
            mesh.vertices.len(),
            mesh.faces.len()
        );
        Ok(mesh)
    }

    fn load_options() -> tobj::LoadOptions {
        tobj::LoadOptions {
            triangulate: true,
            ignore_points: true,
            ignore_lines: true,
            ..Default::default()
        }
    }

    /// Merge tobj models, shifting each model's indices past the vertices of
    /// the models before it.
    fn from_models(models: &[tobj::Model]) -> Result<Self, MeshError> {
        let mut vertices = Vec::new();
        let mut faces = Vec::new();

        for model in models {
            let base = vertices.len() as u32;
            vertices.extend(
                model
                    .mesh
                    .positions
                    .chunks_exact(3)
                    .map(|p| Vec3::new(p[0], p[1], p[2])),
            );
            faces.extend(
                model
                    .mesh
                    .indices
                    .chunks_exact(3)
                    .map(|f| Face::new(base + f[0], base + f[1], base + f[2])),
            );
        }

        let mesh = Self::new(vertices, faces);
        mesh.validate()?;
        Ok(mesh)
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }
}

impl MeshSource for Mesh {
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn face_count(&self) -> usize {
        self.faces.len()
    }

    fn vertex(&self, index: usize) -> Option<Vec3> {
        self.vertices.get(index).copied()
    }

    fn face(&self, index: usize) -> Option<Face> {
        self.faces.get(index).copied()
    }
}
