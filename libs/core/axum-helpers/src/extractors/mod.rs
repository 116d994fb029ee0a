mod id_path;

pub use id_path::IdPath;
