pub mod binary_search;
pub mod bounds;
pub mod hash_lookup;
pub mod linear_search;
