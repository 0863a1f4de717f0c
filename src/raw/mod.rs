mod arena;
mod delete;
mod handle;
mod insert;
mod node;
mod raw_rb_tree;
mod rotation;

pub(crate) use node::Direction;
pub(crate) use raw_rb_tree::RawRBTree;
