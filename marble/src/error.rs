use thiserror::Error;

/// Errors that can occur when turning a vertex stream into a [`Mesh`].
///
/// [`Mesh`]: crate::Mesh
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum MeshError {
    #[error("got {count} vertices, which doesn't form whole triangles")]
    IncompleteTriangle { count: usize },

    #[error("index {index} is out of bounds for {vertices} vertices")]
    IndexOutOfBounds { index: u32, vertices: usize },
}
