mod edge_index;

pub(crate) use edge_index::EdgeIndex;
