//! [`Marshal`](crate::Marshal) impls for std types.

mod maps;
mod option;
mod pointers;
mod scalars;
mod sequences;
mod sets;
mod text;
mod tuples;
