//! Domain-level frontend features and their shared logic. Routes import
//! these modules to keep view code focused while API handling and the
//! view-state lifecycle stay in dedicated feature areas.

pub mod users;
