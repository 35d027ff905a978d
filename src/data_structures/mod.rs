pub mod disjoint_set;
pub mod hash_table;
pub mod heap;
pub mod linked_list;
pub mod queue;
pub mod stack;
