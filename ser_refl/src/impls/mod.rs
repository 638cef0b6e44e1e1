mod primitives;
mod ptrs;
mod tuples;

#[cfg(feature = "num_bigint")]
mod bigint;
