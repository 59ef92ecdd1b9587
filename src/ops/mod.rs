pub mod view;

pub use self::view::{allocate, as_vector, map_points, paired_len};
