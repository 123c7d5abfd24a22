//! Game implementations.

pub mod tic_hac_noe;
