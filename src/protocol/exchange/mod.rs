//! Exchange logic: the per-cycle send/receive driver plus the periodic
//! supervisor that paces it and feeds the presentation layer.
pub mod driver;
pub mod supervisor;
