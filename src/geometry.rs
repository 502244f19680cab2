pub mod affine;
pub mod delaunay;
