//! Static reference tables. Compiled in, never mutated.

mod disasters;
mod resources;
mod severity;

pub use disasters::{find_disaster, supported_disasters, DisasterRecord, DISASTERS};
pub use resources::{contacts_for, GENERAL_CONTACTS, TYPE_CONTACTS};
pub use severity::{find_severity_table, SeverityTable, SEVERITY_TABLES};
