//! Run timing helpers shared by the report commands.

pub mod clock;
